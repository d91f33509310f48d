//! SQL DDL for the companies and vacancies tables.

/// SQLite schema with:
/// - `hh_id` UNIQUE on both tables: the external identifier from the job board
/// - `vacancies.company_id` referencing `companies(id)`, cascading on delete
///
/// Every statement uses `IF NOT EXISTS`, so running it on each startup is a no-op
/// once the tables exist.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS companies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    hh_id TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    url TEXT NULL
);

CREATE TABLE IF NOT EXISTS vacancies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    hh_id TEXT NOT NULL UNIQUE,
    job_title TEXT NOT NULL,
    salary_from INTEGER NULL,
    salary_to INTEGER NULL,
    currency TEXT NULL,
    link_to_vacancy TEXT NULL,
    company_id INTEGER NULL REFERENCES companies(id) ON DELETE CASCADE
);
"#;

/// Splits [`SQLITE_INIT`] into single statements; `sqlx::query` runs one at a time.
pub fn statements() -> impl Iterator<Item = &'static str> {
    SQLITE_INIT
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
