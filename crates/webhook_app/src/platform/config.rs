use anyhow::{bail, Context};
use webhook_engine::ApiSettings;

use super::logging::LogDestination;

pub const ENV_API_URL: &str = "WEBHOOKS_API_URL";
pub const ENV_LOG: &str = "WEBHOOKS_LOG";
pub const ENV_PAGE_ROWS: &str = "WEBHOOKS_PAGE_ROWS";

const DEFAULT_PAGE_ROWS: usize = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub log_destination: LogDestination,
    pub page_rows: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut api = ApiSettings::default();
        if let Some(url) = lookup(ENV_API_URL) {
            api.base_url = url;
        }

        let log_destination = match lookup(ENV_LOG) {
            Some(raw) => match LogDestination::parse(&raw) {
                Some(destination) => destination,
                None => bail!("{ENV_LOG} must be one of file, terminal, both (got {raw:?})"),
            },
            None => LogDestination::File,
        };

        let page_rows = match lookup(ENV_PAGE_ROWS) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{ENV_PAGE_ROWS} must be a positive integer"))?,
            None => DEFAULT_PAGE_ROWS,
        };
        if page_rows == 0 {
            bail!("{ENV_PAGE_ROWS} must be at least 1");
        }

        Ok(Self {
            api,
            log_destination,
            page_rows,
        })
    }
}
