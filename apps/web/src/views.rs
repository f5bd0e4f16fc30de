//! Askama page templates. Handlers fill these in; templates live in `templates/`.

use askama::Template;

use crate::salary::content::PageContent;
use crate::salary::format::FormattedBreakdown;
use crate::salary::page::RelatedRate;

/// `<head>` data shared by every page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub brand: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct PopularRate {
    pub link: RelatedRate,
    pub formatted: FormattedBreakdown,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub meta: PageMeta,
    /// Rate pre-filled in the quick calculator.
    pub quick_rate: String,
    pub quick: FormattedBreakdown,
    pub quick_detail_url: String,
    pub popular: Vec<PopularRate>,
    pub all_rates: Vec<RelatedRate>,
}

#[derive(Template)]
#[template(path = "calculator.html")]
pub struct CalculatorTemplate {
    pub meta: PageMeta,
    pub rate: String,
    pub formatted: FormattedBreakdown,
    pub content: PageContent,
    pub related: Vec<RelatedRate>,
    pub job_search_url: String,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub meta: PageMeta,
}

#[derive(Template)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate {
    pub meta: PageMeta,
}

#[derive(Template)]
#[template(path = "cookies.html")]
pub struct CookiesTemplate {
    pub meta: PageMeta,
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub meta: PageMeta,
    pub path: String,
}
