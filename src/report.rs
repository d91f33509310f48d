use crate::db::DbManager;
use crate::db::models::{SalaryEntry, Vacancy, VacancyListing};
use crate::error::VacancyDbError;
use serde::Serialize;
use tracing::warn;
use std::collections::BTreeMap;

/// Snapshot of every report query, rendered by the binary as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VacancyReport {
    pub company_vacancy_counts: BTreeMap<String, i64>,
    pub vacancies: Vec<VacancyListing>,
    pub average_salary: Option<f64>,
    pub above_average_salary: Vec<SalaryEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub keyword_matches: Vec<Vacancy>,
}

impl VacancyReport {
    /// Run each query once against `db`. The keyword search is skipped when `keyword` is `None`.
    pub async fn collect(
        db: &mut DbManager,
        keyword: Option<&str>,
    ) -> Result<Self, VacancyDbError> {
        let company_vacancy_counts = db.company_vacancy_counts().await?;
        let vacancies = db.all_vacancies().await?;
        let average_salary = db.average_salary().await?;
        let above_average_salary = db.vacancies_above_average_salary().await?;
        let keyword_matches = match keyword {
            Some(k) => db.vacancies_matching_keyword(k).await?,
            None => Vec::new(),
        };

        Ok(Self {
            company_vacancy_counts,
            vacancies,
            average_salary,
            above_average_salary,
            keyword: keyword.map(str::to_string),
            keyword_matches,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, VacancyDbError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Initialize the schema, render the report as JSON, then close `db` on every path.
///
/// A query failure wins over a close failure; the latter is only logged then.
pub async fn render_and_close(
    mut db: DbManager,
    keyword: Option<&str>,
) -> Result<String, VacancyDbError> {
    let outcome = render(&mut db, keyword).await;
    let closed = db.close().await;

    match outcome {
        Ok(json) => closed.map(|_| json),
        Err(e) => {
            if let Err(close_err) = closed {
                warn!(error = %close_err, "failed to close database connection");
            }
            Err(e)
        }
    }
}

async fn render(db: &mut DbManager, keyword: Option<&str>) -> Result<String, VacancyDbError> {
    db.initialize().await?;
    VacancyReport::collect(db, keyword).await?.to_json_pretty()
}
