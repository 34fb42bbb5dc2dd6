//! Field-for-field translation between entity models and transfer objects.
//!
//! `Model -> Dto` drops storage-only columns. `Dto -> ActiveModel` sets every mapped
//! column plus the derived uniqueness key and leaves foreign keys unset, those are filled
//! in by the repositories from the request's related IDs.

use sea_orm::ActiveValue;

use crate::{
    model::{
        category::CategoryDto, country::CountryDto, owner::OwnerDto, pokemon::PokemonDto,
        review::ReviewDto, reviewer::ReviewerDto,
    },
    server::util::name::{normalize_full_name, normalize_name},
};

impl From<entity::pokemon::Model> for PokemonDto {
    fn from(pokemon: entity::pokemon::Model) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name,
            birth_date: pokemon.birth_date,
            base_experience: pokemon.base_experience,
        }
    }
}

impl From<PokemonDto> for entity::pokemon::ActiveModel {
    fn from(pokemon: PokemonDto) -> Self {
        Self {
            id: ActiveValue::Set(pokemon.id),
            normalized_name: ActiveValue::Set(normalize_name(&pokemon.name)),
            name: ActiveValue::Set(pokemon.name),
            birth_date: ActiveValue::Set(pokemon.birth_date),
            base_experience: ActiveValue::Set(pokemon.base_experience),
        }
    }
}

impl From<entity::category::Model> for CategoryDto {
    fn from(category: entity::category::Model) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

impl From<CategoryDto> for entity::category::ActiveModel {
    fn from(category: CategoryDto) -> Self {
        Self {
            id: ActiveValue::Set(category.id),
            normalized_name: ActiveValue::Set(normalize_name(&category.name)),
            name: ActiveValue::Set(category.name),
        }
    }
}

impl From<entity::country::Model> for CountryDto {
    fn from(country: entity::country::Model) -> Self {
        Self {
            id: country.id,
            name: country.name,
        }
    }
}

impl From<CountryDto> for entity::country::ActiveModel {
    fn from(country: CountryDto) -> Self {
        Self {
            id: ActiveValue::Set(country.id),
            normalized_name: ActiveValue::Set(normalize_name(&country.name)),
            name: ActiveValue::Set(country.name),
        }
    }
}

impl From<entity::owner::Model> for OwnerDto {
    fn from(owner: entity::owner::Model) -> Self {
        Self {
            id: owner.id,
            name: owner.name,
            gym: owner.gym,
        }
    }
}

impl From<OwnerDto> for entity::owner::ActiveModel {
    fn from(owner: OwnerDto) -> Self {
        Self {
            id: ActiveValue::Set(owner.id),
            normalized_name: ActiveValue::Set(normalize_name(&owner.name)),
            name: ActiveValue::Set(owner.name),
            gym: ActiveValue::Set(owner.gym),
            country_id: ActiveValue::NotSet,
        }
    }
}

impl From<entity::reviewer::Model> for ReviewerDto {
    fn from(reviewer: entity::reviewer::Model) -> Self {
        Self {
            id: reviewer.id,
            first_name: reviewer.first_name,
            last_name: reviewer.last_name,
        }
    }
}

impl From<ReviewerDto> for entity::reviewer::ActiveModel {
    fn from(reviewer: ReviewerDto) -> Self {
        Self {
            id: ActiveValue::Set(reviewer.id),
            normalized_name: ActiveValue::Set(normalize_full_name(
                &reviewer.first_name,
                &reviewer.last_name,
            )),
            first_name: ActiveValue::Set(reviewer.first_name),
            last_name: ActiveValue::Set(reviewer.last_name),
        }
    }
}

impl From<entity::review::Model> for ReviewDto {
    fn from(review: entity::review::Model) -> Self {
        Self {
            id: review.id,
            title: review.title,
            text: review.text,
            rating: review.rating,
        }
    }
}

impl From<ReviewDto> for entity::review::ActiveModel {
    fn from(review: ReviewDto) -> Self {
        Self {
            id: ActiveValue::Set(review.id),
            normalized_title: ActiveValue::Set(normalize_name(&review.title)),
            title: ActiveValue::Set(review.title),
            text: ActiveValue::Set(review.text),
            rating: ActiveValue::Set(review.rating),
            pokemon_id: ActiveValue::NotSet,
            reviewer_id: ActiveValue::NotSet,
        }
    }
}

/// Maps a list of entity models into DTOs.
pub fn map_all<M, D: From<M>>(models: Vec<M>) -> Vec<D> {
    models.into_iter().map(D::from).collect()
}
