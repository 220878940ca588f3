use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
/// hh.ru caps `per_page` at 100.
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_PAGE_DELAY_MS: u64 = 250;
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(DEFAULT_PAGE_DELAY_MS);
/// Area names come back in the locale requested here.
pub const AREAS_LOCALE: &str = "RU";

pub const DEFAULT_LOG_FILTERS: &[&str] = &[
    #[cfg(not(debug_assertions))]
    "mio=info",
    "hyper_util=info",
    "reqwest=info",
    "rustls=info",
    "hickory_resolver=info",
    "hickory_proto=info",
];
