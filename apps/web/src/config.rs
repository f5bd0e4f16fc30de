use anyhow::{Context, Result};

use crate::salary::jobs::DEFAULT_JOB_SEARCH_BASE_URL;
use crate::salary::page::PageSettings;
use crate::salary::related::DEFAULT_RELATED_LIMIT;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Brand appended to page titles.
    pub site_name: String,
    pub job_search_base_url: String,
    /// Replaces the built-in rate catalog when set (`RATE_CATALOG=10,12.5,15`).
    pub rate_catalog: Option<Vec<f64>>,
    pub related_rates_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 3000,
            rust_log: "info".to_string(),
            site_name: "SalaryCalc".to_string(),
            job_search_base_url: DEFAULT_JOB_SEARCH_BASE_URL.to_string(),
            rate_catalog: None,
            related_rates_limit: DEFAULT_RELATED_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: optional_env("PORT")
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("PORT must be a valid port number")?
                .unwrap_or(defaults.port),
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            site_name: optional_env("SITE_NAME").unwrap_or(defaults.site_name),
            job_search_base_url: optional_env("JOB_SEARCH_BASE_URL")
                .unwrap_or(defaults.job_search_base_url),
            rate_catalog: optional_env("RATE_CATALOG")
                .map(|v| parse_rate_list(&v))
                .transpose()
                .context("RATE_CATALOG must be a comma-separated list of positive rates")?,
            related_rates_limit: optional_env("RELATED_RATES_LIMIT")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("RELATED_RATES_LIMIT must be a non-negative integer")?
                .unwrap_or(defaults.related_rates_limit),
        })
    }

    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            brand: self.site_name.clone(),
            job_search_base_url: self.job_search_base_url.clone(),
            related_limit: self.related_rates_limit,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parses `10, 12.5,15` into rates, keeping the given order.
fn parse_rate_list(raw: &str) -> Result<Vec<f64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| -> Result<f64> {
            let rate = s
                .parse::<f64>()
                .with_context(|| format!("'{s}' is not a number"))?;
            anyhow::ensure!(rate.is_finite() && rate > 0.0, "'{s}' is not a positive rate");
            Ok(rate)
        })
        .collect()
}
