//! `developer_analyses` table
//!
//! One row per analyzed developer, keyed by username. `domains` and
//! `profile` are JSONB columns mirroring the domain types.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "developer_analyses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    #[sea_orm(column_type = "Double")]
    pub talent_rank: f64,
    pub nation: String,
    #[sea_orm(column_type = "Double")]
    pub nation_confidence: f64,
    #[sea_orm(column_type = "JsonBinary")]
    pub domains: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub profile: Json,
    pub last_updated: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
