//! Pulls every vacancy matching one hh.ru search and hands the raw records
//! back for saving.
//!
//! The search is described in human terms (city, experience level) and
//! resolved against the API's own dictionaries before paging starts.

pub mod client;
pub mod consts;
pub mod error;
pub mod models;
pub mod opts;
pub mod persist;

use tracing::info;

pub use client::{ClientConfig, HhClient};
pub use error::{Error, Result};
pub use models::{Collected, Experience, VacancyFilter, VacancyPage};
pub use persist::{write_results, OutputFormat};

#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    pub country: String,
    pub city: String,
    pub experience: String,
    pub per_page: u32,
}

/// Resolves the query's names to ids, then collects every page.
pub async fn collect_vacancies(client: &mut HhClient, query: &SearchQuery) -> Result<Collected> {
    let experience = client.experience_id(&query.experience).await?;
    let area = client.area_id(&query.country, &query.city).await?;
    info!(%area, %experience, text = %query.text, "resolved filter");

    let mut filter = VacancyFilter::new(query.text.as_str(), query.per_page)
        .with_area(area)
        .with_experience(experience);
    client.collect_all(&mut filter).await
}
