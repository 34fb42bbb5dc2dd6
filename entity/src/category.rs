use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub normalized_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pokemon_category::Entity")]
    PokemonCategory,
}

impl Related<super::pokemon_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PokemonCategory.def()
    }
}

impl Related<super::pokemon::Entity> for Entity {
    fn to() -> RelationDef {
        super::pokemon_category::Relation::Pokemon.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pokemon_category::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
