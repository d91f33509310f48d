use crate::config::Config;
use crate::db::models::{SalaryEntry, Vacancy, VacancyListing};
use crate::db::schema;
use crate::error::VacancyDbError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::{debug, info};

/// Owns one live SQLite connection and runs the company/vacancy report queries.
///
/// Every query takes `&mut self`, so a manager can only be driven by one caller
/// at a time. Callers that need parallelism open one manager per task.
///
/// The connection is released by [`DbManager::close`]. A manager dropped on an
/// error path still releases it through the driver's own `Drop`.
pub struct DbManager {
    conn: SqliteConnection,
}

impl DbManager {
    /// Open the database described by `cfg`. Foreign keys are enforced so
    /// `ON DELETE CASCADE` on `vacancies.company_id` takes effect, and `REGEXP`
    /// is registered for the keyword search.
    pub async fn connect(cfg: &Config) -> Result<Self, VacancyDbError> {
        let opts = SqliteConnectOptions::from_str(&cfg.database_url)
            .map_err(VacancyDbError::Connection)?
            .create_if_missing(cfg.create_if_missing)
            .foreign_keys(true)
            .with_regexp();
        let conn = opts.connect().await.map_err(VacancyDbError::Connection)?;
        info!(database_url = %cfg.database_url, "database connection opened");
        Ok(Self { conn })
    }

    /// Raw access for the ingestion side, which writes rows this manager only reads.
    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    /// Create both tables if absent and commit. Safe to call on every startup.
    pub async fn initialize(&mut self) -> Result<(), VacancyDbError> {
        let mut tx = self.conn.begin().await?;
        for stmt in schema::statements() {
            sqlx::query(stmt).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        info!("schema initialized");
        Ok(())
    }

    /// Vacancy count per company name. Companies without vacancies are absent.
    ///
    /// Grouping is by name, so two companies sharing a name are reported as one.
    pub async fn company_vacancy_counts(
        &mut self,
    ) -> Result<BTreeMap<String, i64>, VacancyDbError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"SELECT companies.name, COUNT(vacancies.id)
               FROM vacancies
               JOIN companies ON vacancies.company_id = companies.id
               GROUP BY companies.name"#,
        )
        .fetch_all(&mut self.conn)
        .await?;
        debug!(companies = rows.len(), "fetched company vacancy counts");
        Ok(rows.into_iter().collect())
    }

    /// Every vacancy with its company name. Order is unspecified.
    pub async fn all_vacancies(&mut self) -> Result<Vec<VacancyListing>, VacancyDbError> {
        let rows = sqlx::query_as::<_, VacancyListing>(
            r#"SELECT companies.name AS company_name, vacancies.job_title,
               vacancies.salary_from, vacancies.currency, vacancies.link_to_vacancy
               FROM vacancies
               JOIN companies ON vacancies.company_id = companies.id"#,
        )
        .fetch_all(&mut self.conn)
        .await?;
        debug!(vacancies = rows.len(), "fetched all vacancies");
        Ok(rows)
    }

    /// Mean of `salary_from`, skipping NULLs. `None` when there is nothing to average.
    pub async fn average_salary(&mut self) -> Result<Option<f64>, VacancyDbError> {
        let (avg,): (Option<f64>,) = sqlx::query_as("SELECT AVG(salary_from) FROM vacancies")
            .fetch_one(&mut self.conn)
            .await?;
        debug!(average = ?avg, "computed average salary");
        Ok(avg)
    }

    /// Vacancies whose `salary_from` is strictly above the current average.
    /// The average is recomputed by the subquery on every call.
    pub async fn vacancies_above_average_salary(
        &mut self,
    ) -> Result<Vec<SalaryEntry>, VacancyDbError> {
        let rows = sqlx::query_as::<_, SalaryEntry>(
            r#"SELECT job_title, salary_from FROM vacancies
               WHERE salary_from > (SELECT AVG(salary_from) FROM vacancies)"#,
        )
        .fetch_all(&mut self.conn)
        .await?;
        debug!(vacancies = rows.len(), "fetched vacancies above average salary");
        Ok(rows)
    }

    /// Case-insensitive substring search over `job_title`.
    ///
    /// SQLite's `LOWER`/`LIKE` only fold ASCII, so matching goes through `REGEXP`
    /// with a Unicode case-insensitive pattern. The keyword is bound as a
    /// parameter and every character in it matches literally.
    pub async fn vacancies_matching_keyword(
        &mut self,
        keyword: &str,
    ) -> Result<Vec<Vacancy>, VacancyDbError> {
        let pattern = keyword_regex(keyword);
        let rows = sqlx::query_as::<_, Vacancy>(
            r#"SELECT id, hh_id, job_title, salary_from, salary_to, currency,
               link_to_vacancy, company_id
               FROM vacancies
               WHERE job_title REGEXP ?"#,
        )
        .bind(pattern)
        .fetch_all(&mut self.conn)
        .await?;
        debug!(keyword, matches = rows.len(), "searched vacancies by keyword");
        Ok(rows)
    }

    /// Close the connection, reporting any error from the driver.
    pub async fn close(self) -> Result<(), VacancyDbError> {
        self.conn.close().await?;
        info!("database connection closed");
        Ok(())
    }
}

/// Case-insensitive regex matching `keyword` as a literal substring.
fn keyword_regex(keyword: &str) -> String {
    format!("(?i){}", regex::escape(keyword))
}

#[cfg(test)]
mod tests {
    use super::keyword_regex;
    use regex::Regex;

    fn matches(keyword: &str, title: &str) -> bool {
        Regex::new(&keyword_regex(keyword))
            .expect("keyword regex should compile")
            .is_match(title)
    }

    #[test]
    fn ascii_case_is_ignored() {
        assert!(matches("PYTHON", "Senior Python Engineer"));
        assert!(!matches("python", "Go Developer"));
    }

    #[test]
    fn cyrillic_case_is_ignored() {
        let title = "Ведущий Разработчик Python";
        assert!(matches("Разработчик", title));
        assert!(matches("разработчик", title));
        assert!(matches("РАЗРАБОТЧИК", title));
        assert!(!matches("тестировщик", title));
    }

    #[test]
    fn empty_keyword_matches_everything() {
        assert_eq!(keyword_regex(""), "(?i)");
        assert!(matches("", "anything"));
    }

    #[test]
    fn metacharacters_match_literally() {
        assert!(matches("100%", "Sales 100% remote"));
        assert!(!matches("e_c", "snakeXcase linter"));
        assert!(matches("c++", "C++ Developer"));
        assert!(!matches("c++", "Cc Developer"));
        assert!(!matches(".*", "Go Developer"));
    }

    #[test]
    fn sql_text_is_only_a_pattern() {
        assert!(!matches("'; DROP TABLE vacancies; --", "Python Developer"));
        assert!(matches("'; drop", "x'; DROP y"));
    }
}
