use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum VacancyDbError {
    /// Opening the database connection failed.
    #[error("Connection error: {0}")]
    Connection(#[source] SqlxError),

    /// A statement was rejected: malformed DDL, constraint violation, permissions.
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Config error: {0}")]
    Config(#[source] Box<figment::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for VacancyDbError {
    fn from(e: figment::Error) -> Self {
        VacancyDbError::Config(Box::new(e))
    }
}

impl VacancyDbError {
    pub fn is_connection(&self) -> bool {
        matches!(self, VacancyDbError::Connection(_))
    }

    pub fn is_database(&self) -> bool {
        matches!(self, VacancyDbError::Database(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn every_wrapping_variant_exposes_its_source() {
        let connection = VacancyDbError::Connection(SqlxError::PoolTimedOut);
        let database = VacancyDbError::Database(SqlxError::RowNotFound);
        let config = VacancyDbError::from(figment::Error::from("bad value".to_string()));

        assert!(connection.source().is_some());
        assert!(database.source().is_some());
        assert!(config.source().is_some());
        assert!(connection.is_connection());
        assert!(database.is_database());
    }
}
