use std::{path::PathBuf, time::Duration};

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::{
    client::ClientConfig,
    consts::{DEFAULT_BASE_URL, DEFAULT_PAGE_DELAY_MS, DEFAULT_PER_PAGE, DEFAULT_USER_AGENT},
    persist::OutputFormat,
    SearchQuery,
};

/// Collects hh.ru vacancies for one search and saves them to a file.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Opts {
    /// Log level of application
    #[arg(short, long, env = "HH_LOG_LEVEL", default_value_t = LevelFilter::INFO)]
    pub log: LevelFilter,

    /// API base URL
    #[arg(short, long, env = "HH_URL", default_value_t = String::from(DEFAULT_BASE_URL))]
    pub url: String,

    #[arg(long, env = "HH_USER_AGENT", default_value_t = String::from(DEFAULT_USER_AGENT))]
    pub user_agent: String,

    /// Free-text search term
    #[arg(short, long, env = "HH_TEXT", default_value_t = String::from("Python"))]
    pub text: String,

    #[arg(long, env = "HH_COUNTRY", default_value_t = String::from("Россия"))]
    pub country: String,

    /// City, a direct child of the country in the area tree
    #[arg(long, env = "HH_CITY", default_value_t = String::from("Москва"))]
    pub city: String,

    /// Experience level, e.g. "От 3 до 6 лет", "between3And6" or "3 to 6 years"
    #[arg(short, long, env = "HH_EXPERIENCE", default_value_t = String::from("От 3 до 6 лет"))]
    pub experience: String,

    #[arg(long, env = "HH_PER_PAGE", default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,

    /// Pause between page requests, in milliseconds
    #[arg(long, env = "HH_DELAY_MS", default_value_t = DEFAULT_PAGE_DELAY_MS)]
    pub delay_ms: u64,

    #[arg(short, long, env = "HH_OUTPUT", default_value = "vacancies.json")]
    pub output: PathBuf,

    #[arg(short, long, env = "HH_FORMAT", value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl Opts {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.url.clone(),
            user_agent: self.user_agent.clone(),
            page_delay: Duration::from_millis(self.delay_ms),
        }
    }

    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            text: self.text.clone(),
            country: self.country.clone(),
            city: self.city.clone(),
            experience: self.experience.clone(),
            per_page: self.per_page,
        }
    }
}
