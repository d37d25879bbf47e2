//! SeaORM table models
//!
//! Generated-style entity definitions for the database schema. Domain
//! conversions live next to the adapters that use them.

pub mod employees;
