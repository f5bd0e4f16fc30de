//! Outbound job-search links.

use crate::salary::format::whole_dollars;

pub const DEFAULT_JOB_SEARCH_BASE_URL: &str = "https://jooble.org";

/// Job-search listing URL for an hourly rate, e.g. `https://jooble.org/jobs-25-per-hour`.
/// The rate is rounded to the nearest whole dollar.
pub fn build_job_search_url(base_url: &str, rate: f64) -> String {
    format!(
        "{}/jobs-{}-per-hour",
        base_url.trim_end_matches('/'),
        whole_dollars(rate)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_rate() {
        assert_eq!(
            build_job_search_url(DEFAULT_JOB_SEARCH_BASE_URL, 24.038),
            "https://jooble.org/jobs-24-per-hour"
        );
        assert_eq!(
            build_job_search_url(DEFAULT_JOB_SEARCH_BASE_URL, 13.5),
            "https://jooble.org/jobs-14-per-hour"
        );
    }

    #[test]
    fn test_huge_rate_is_not_truncated() {
        assert_eq!(
            build_job_search_url(DEFAULT_JOB_SEARCH_BASE_URL, 1e20),
            "https://jooble.org/jobs-100000000000000000000-per-hour"
        );
    }

    #[test]
    fn test_trailing_slash_on_base() {
        assert_eq!(
            build_job_search_url("https://jobs.example.com/", 30.0),
            "https://jobs.example.com/jobs-30-per-hour"
        );
    }
}
