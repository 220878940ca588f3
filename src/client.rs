use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use crate::{
    consts::AREAS_LOCALE,
    models::{Area, Collected, Dictionaries, Experience, VacancyFilter, VacancyPage},
    Error, Result,
};

const NO_QUERY: &[(&str, &str)] = &[];

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Pause between two page requests.
    pub page_delay: Duration,
}

/// hh.ru API session.
///
/// The dictionary and area lookups are fetched on first use and kept for the
/// lifetime of the client. A failed fetch leaves the cache empty, so the next
/// call tries again. The underlying connection pool is released when the
/// client is dropped.
pub struct HhClient {
    http: reqwest::Client,
    base_url: String,
    page_delay: Duration,
    dictionaries: Option<Dictionaries>,
    areas: Option<Vec<Area>>,
}

impl HhClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_delay: config.page_delay,
            dictionaries: None,
            areas: None,
        })
    }

    async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}/{path}", self.base_url);
        let response = self.http.get(&url).query(query).send().await?;
        debug!(url = %response.url(), status = %response.status(), "GET");

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                url,
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }

    pub async fn dictionaries(&mut self) -> Result<&Dictionaries> {
        let dictionaries = match self.dictionaries.take() {
            Some(cached) => cached,
            None => {
                let fetched: Dictionaries = self.get_json("dictionaries", NO_QUERY).await?;
                debug!(experience = fetched.experience.len(), "cached dictionaries");
                fetched
            }
        };
        Ok(&*self.dictionaries.insert(dictionaries))
    }

    pub async fn areas(&mut self) -> Result<&[Area]> {
        let areas = match self.areas.take() {
            Some(cached) => cached,
            None => {
                let fetched: Vec<Area> =
                    self.get_json("areas", &[("locale", AREAS_LOCALE)]).await?;
                debug!(countries = fetched.len(), "cached areas");
                fetched
            }
        };
        Ok(self.areas.insert(areas).as_slice())
    }

    /// Resolves a human-readable experience label to the id the API filters
    /// on. The label is validated before anything is fetched.
    pub async fn experience_id(&mut self, label: &str) -> Result<String> {
        let experience: Experience = label.parse()?;
        let name = experience.display_name();
        debug!(%experience, "resolving experience");

        self.dictionaries()
            .await?
            .experience
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.id.clone())
            .ok_or_else(|| Error::NotFound {
                what: "experience",
                name: name.to_string(),
            })
    }

    /// Resolves a city to its area id. Only the country's direct children
    /// are searched.
    pub async fn area_id(&mut self, country: &str, city: &str) -> Result<String> {
        let country_area = self
            .areas()
            .await?
            .iter()
            .find(|area| area.name == country)
            .ok_or_else(|| Error::NotFound {
                what: "country",
                name: country.to_string(),
            })?;

        country_area
            .areas
            .iter()
            .find(|area| area.name == city)
            .map(|area| area.id.clone())
            .ok_or_else(|| Error::NotFound {
                what: "city",
                name: city.to_string(),
            })
    }

    pub async fn fetch_page(&self, filter: &VacancyFilter) -> Result<VacancyPage> {
        self.get_json("vacancies", filter).await
    }

    /// Walks every page of `filter` from page 0 and returns all items in
    /// order. `filter.page` is left on the last page fetched.
    pub async fn collect_all(&self, filter: &mut VacancyFilter) -> Result<Collected> {
        filter.page = 0;
        let mut collected = Collected {
            items: Vec::new(),
            found: None,
            pages: 0,
        };

        loop {
            let page = self.fetch_page(filter).await?;
            if filter.page == 0 {
                collected.found = page.found;
                collected.pages = page.pages;
                info!(found = ?page.found, pages = page.pages, "search started");
            }
            debug!(
                page = filter.page,
                reported_page = ?page.page,
                per_page = ?page.per_page,
                pages = page.pages,
                items = page.items.len(),
                "fetched page"
            );

            let last = page.is_last(filter.page);
            collected.items.extend(page.items);
            if last {
                break;
            }

            tokio::time::sleep(self.page_delay).await;
            filter.page += 1;
        }

        Ok(collected)
    }
}
