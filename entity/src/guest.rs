//! `SeaORM` Entity for the `guests` collection
//!
//! `client_id` is a soft reference to `clients.id`; no foreign key exists in the
//! schema, so referential checks happen at write time in the repository.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "guests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub message: String,
    pub confirmation: String,
    #[sea_orm(indexed)]
    pub client_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
