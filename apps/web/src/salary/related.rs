//! Related-Rate Finder and the rate catalog it draws from.

use serde::Serialize;

/// Hourly rates the site links to. Not a whitelist: any positive rate renders a page.
const DEFAULT_RATES: &[f64] = &[
    10.0, 11.0, 12.0, 13.0, 13.5, 14.0, 15.0, 15.5, 16.0, 16.5, 17.0, 17.5, 18.0, 18.5, 19.0,
    19.5, 20.0, 20.5, 21.0, 21.5, 22.0, 22.5, 23.0, 23.5, 24.0, 24.5, 25.0, 26.0, 26.5, 27.0,
    27.5, 28.0, 28.5, 29.0, 30.0, 31.0, 32.0, 33.0, 34.0, 35.0, 36.0, 37.0, 38.0, 39.0, 40.0,
    41.0, 42.0, 43.0, 44.0, 45.0, 46.0, 47.0, 48.0, 49.0, 50.0, 51.0, 52.0, 53.0, 54.0, 55.0,
    56.0, 57.0, 58.0, 59.0, 60.0, 61.0, 62.0, 63.0, 64.0, 65.0, 66.0, 67.0, 68.0, 69.0, 70.0,
    72.0, 74.0, 75.0, 76.0, 77.0, 78.0, 80.0, 83.0, 85.0, 90.0, 95.0, 100.0, 110.0, 115.0,
    120.0, 130.0, 140.0, 150.0, 200.0,
];

/// Maximum distance (in dollars per hour) for a catalog rate to count as related.
pub const RELATED_WINDOW: f64 = 10.0;

pub const DEFAULT_RELATED_LIMIT: usize = 10;

/// Ordered, immutable list of catalog rates. Built once at startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateCatalog {
    rates: Vec<f64>,
}

impl RateCatalog {
    pub fn new(rates: Vec<f64>) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RateCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_RATES.to_vec())
    }
}

/// Catalog rates within `RELATED_WINDOW` of `rate`, nearest first.
///
/// The rate itself is excluded. Equal distances keep catalog order.
pub fn find_related(rate: f64, catalog: &RateCatalog, max_results: usize) -> Vec<f64> {
    let mut nearby: Vec<f64> = catalog
        .rates()
        .iter()
        .copied()
        .filter(|&r| r != rate && (r - rate).abs() < RELATED_WINDOW)
        .collect();

    // sort_by is stable
    nearby.sort_by(|a, b| {
        (a - rate)
            .abs()
            .partial_cmp(&(b - rate).abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    nearby.truncate(max_results);
    nearby
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = RateCatalog::default();
        assert_eq!(catalog.len(), 94);
        assert_eq!(catalog.rates().first(), Some(&10.0));
        assert_eq!(catalog.rates().last(), Some(&200.0));
    }

    #[test]
    fn test_excludes_self_and_orders_by_distance() {
        let related = find_related(20.0, &RateCatalog::default(), DEFAULT_RELATED_LIMIT);
        assert_eq!(related.len(), 10);
        assert!(!related.contains(&20.0));
        assert!(related.contains(&18.0));
        assert!(related.contains(&22.0));
        assert!(!related.contains(&10.0));
        assert!(!related.contains(&30.0));
        assert_eq!(&related[..2], &[19.5, 20.5]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = RateCatalog::new(vec![25.0, 15.0, 22.0, 18.0]);
        let related = find_related(20.0, &catalog, 10);
        assert_eq!(related, vec![22.0, 18.0, 25.0, 15.0]);
    }

    #[test]
    fn test_window_is_exclusive() {
        let catalog = RateCatalog::new(vec![10.0, 10.5, 29.5, 30.0]);
        let related = find_related(20.0, &catalog, 10);
        assert_eq!(related, vec![10.5, 29.5]);
    }

    #[test]
    fn test_rate_off_catalog() {
        let related = find_related(24.038, &RateCatalog::default(), 3);
        assert_eq!(related, vec![24.0, 24.5, 23.5]);
    }

    #[test]
    fn test_max_results_zero_and_empty_catalog() {
        assert!(find_related(20.0, &RateCatalog::default(), 0).is_empty());
        assert!(find_related(20.0, &RateCatalog::new(Vec::new()), 10).is_empty());
    }

    #[test]
    fn test_far_away_rate_has_no_neighbours() {
        assert!(find_related(500.0, &RateCatalog::default(), 10).is_empty());
    }
}
