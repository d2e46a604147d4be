use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Persisted mirror of the in-process category registry. Request-path
/// lookups never read this table; it exists for the provider/admin
/// subsystems that browse categories from the store.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub slug: String,
    pub name: String,
    pub icon: String,
    pub sort_order: i32,
    pub is_featured: bool,
    pub origin: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}
