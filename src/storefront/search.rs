use reqwest::Url;

use super::{Storefront, selectors};
use crate::data_models::{Candidate, MatchResult};
use crate::document::Document;
use crate::error::ScrapeError;
use crate::fetcher::Fetch;
use crate::pacer::Pacer;
use crate::selector::select_best;

impl<F: Fetch> Storefront<F> {
    /// Search the apps category for `query_name` and pick the closest title.
    pub async fn search_for<P: Pacer>(
        &self,
        pacer: &mut P,
        query_name: &str,
    ) -> Result<MatchResult, ScrapeError> {
        let url = self.search_url(query_name)?;

        pacer.acquire().await;
        let body = self
            .fetcher
            .get(&url)
            .await
            .map_err(|source| ScrapeError::Transport {
                url: url.clone(),
                source,
            })?;

        let candidates = extract_candidates(&url, &body)?;
        if candidates.is_empty() {
            return Err(ScrapeError::NoResults {
                query: query_name.to_string(),
            });
        }
        log::debug!("{} candidates for {query_name:?}", candidates.len());

        select_best(query_name, candidates).ok_or_else(|| ScrapeError::NoResults {
            query: query_name.to_string(),
        })
    }

    pub fn search_url(&self, query_name: &str) -> Result<String, ScrapeError> {
        let endpoint = self.config.search_endpoint();
        let url = Url::parse_with_params(
            &endpoint,
            &[
                ("q", query_name),
                ("c", self.config.search_category.as_str()),
            ],
        )
        .map_err(|e| ScrapeError::InvalidUrl {
            base: endpoint.clone(),
            reason: e.to_string(),
        })?;
        Ok(url.into())
    }
}

/// (trimmed text, href) of every titled link in the results container.
/// A link without an href yields an empty link.
pub fn extract_candidates(url: &str, body: &str) -> Result<Vec<Candidate>, ScrapeError> {
    let document = Document::parse(url, body)?;
    let candidates = document
        .query(selectors::SEARCH_RESULT_LINKS)?
        .into_iter()
        .map(|node| {
            Candidate::new(
                node.text_content().trim(),
                node.attribute("href").unwrap_or_default(),
            )
        })
        .collect();
    Ok(candidates)
}
