use std::sync::Arc;

use crate::config::Config;
use crate::salary::page::PageSettings;
use crate::salary::related::RateCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is immutable after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<RateCatalog>,
    pub page_settings: Arc<PageSettings>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let catalog = config
            .rate_catalog
            .clone()
            .map(RateCatalog::new)
            .unwrap_or_default();
        let page_settings = config.page_settings();

        Self {
            config,
            catalog: Arc::new(catalog),
            page_settings: Arc::new(page_settings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_when_not_configured() {
        let state = AppState::new(Config::default());
        assert_eq!(*state.catalog, RateCatalog::default());
        assert_eq!(state.page_settings.brand, "SalaryCalc");
    }

    #[test]
    fn test_configured_catalog_overrides_default() {
        let state = AppState::new(Config {
            rate_catalog: Some(vec![12.0, 14.0]),
            ..Config::default()
        });
        assert_eq!(state.catalog.rates(), &[12.0, 14.0]);
    }
}
