//! Utility functions shared across the server layers.

pub mod name;
