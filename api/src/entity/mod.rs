//! SeaORM table models
//!
//! Database-facing models, separate from the pure domain entities in
//! `domain::entities`.

pub mod developer_analyses;
