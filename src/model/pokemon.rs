use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDto {
    /// Ignored on create, must match the path ID on update
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    pub base_experience: i32,
}
