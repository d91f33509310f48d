//! Database module: schema, row models and the vacancy manager.
//!
//! Layout:
//! - `schema.rs`: SQL DDL for the `companies` / `vacancies` tables
//! - `models.rs`: Rust structs mirroring the rows the queries return
//! - `sqlite.rs`: `DbManager`, one owned connection plus the report queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Company, SalaryEntry, Vacancy, VacancyListing};
pub use schema::SQLITE_INIT;
pub use sqlite::DbManager;
