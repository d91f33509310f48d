pub mod config;
pub mod db;
pub mod error;
pub mod report;

pub use config::Config;
pub use db::DbManager;
pub use error::VacancyDbError;
pub use report::VacancyReport;
