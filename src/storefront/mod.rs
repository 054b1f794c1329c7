use crate::config::Config;
use crate::fetcher::Fetch;

pub mod rating;
pub mod search;

/// Selectors for the storefront's markup.
pub mod selectors {
    pub const SEARCH_RESULT_LINKS: &str = "div#body-content a[title]";
    pub const RATING_SCORE: &str = "div[class='score-container'] div[class='score']";
    pub const REVIEW_COUNT: &str = "div[class='score-container'] span[class='reviews-num']";
}

/// The two network-issuing stages: search and rating lookup.
pub struct Storefront<F> {
    fetcher: F,
    config: Config,
}

impl<F: Fetch> Storefront<F> {
    pub fn new(fetcher: F, config: Config) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
