use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Company {
    pub id: i64,
    pub hh_id: String,
    pub name: String,
    pub url: Option<String>,
}

/// Full `vacancies` row, as returned by the keyword search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Vacancy {
    pub id: i64,
    pub hh_id: String,
    pub job_title: String,
    pub salary_from: Option<i64>,
    pub salary_to: Option<i64>,
    pub currency: Option<String>,
    pub link_to_vacancy: Option<String>,
    pub company_id: Option<i64>,
}

/// A vacancy joined with the name of its company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct VacancyListing {
    pub company_name: String,
    pub job_title: String,
    pub salary_from: Option<i64>,
    pub currency: Option<String>,
    pub link_to_vacancy: Option<String>,
}

/// Title and lower salary bound. Only produced for rows that have a `salary_from`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct SalaryEntry {
    pub job_title: String,
    pub salary_from: i64,
}
