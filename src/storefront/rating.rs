use super::{Storefront, selectors};
use crate::data_models::RatingInfo;
use crate::document::Document;
use crate::error::{Field, ScrapeError};
use crate::fetcher::Fetch;
use crate::pacer::Pacer;

impl<F: Fetch> Storefront<F> {
    /// Fetch `<origin><detail_path>` and read its score and review count.
    /// Both must be present and well formed.
    pub async fn fetch_rating<P: Pacer>(
        &self,
        pacer: &mut P,
        detail_path: &str,
    ) -> Result<RatingInfo, ScrapeError> {
        let url = self.config.absolute_url(detail_path);

        pacer.acquire().await;
        let body = self
            .fetcher
            .get(&url)
            .await
            .map_err(|source| ScrapeError::Transport {
                url: url.clone(),
                source,
            })?;

        extract_rating(&url, &body)
    }
}

pub fn extract_rating(url: &str, body: &str) -> Result<RatingInfo, ScrapeError> {
    let document = Document::parse(url, body)?;

    let rating_text = first_text(&document, selectors::RATING_SCORE, Field::Rating)?;
    let rating = parse_rating(&rating_text)?;

    let count_text = first_text(&document, selectors::REVIEW_COUNT, Field::RatingCount)?;
    let rating_count = parse_review_count(&count_text)?;

    Ok(RatingInfo {
        rating,
        rating_count,
    })
}

fn first_text(document: &Document, selector: &str, field: Field) -> Result<String, ScrapeError> {
    document
        .query_first(selector)?
        .map(|node| node.text_content())
        .ok_or_else(|| ScrapeError::MissingField {
            field,
            url: document.url().to_string(),
        })
}

/// Decimal score such as `4.6`; surrounding whitespace is ignored.
pub fn parse_rating(text: &str) -> Result<f64, ScrapeError> {
    text.trim()
        .parse::<f64>()
        .map_err(|e| ScrapeError::ParseField {
            field: Field::Rating,
            text: text.to_string(),
            reason: e.to_string(),
        })
}

/// Drops every non-digit, so `"152,034 reviews"` reads as 152034.
pub fn parse_review_count(text: &str) -> Result<u64, ScrapeError> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(ScrapeError::ParseField {
            field: Field::RatingCount,
            text: text.to_string(),
            reason: "no digits".to_string(),
        });
    }
    digits.parse::<u64>().map_err(|e| ScrapeError::ParseField {
        field: Field::RatingCount,
        text: text.to_string(),
        reason: e.to_string(),
    })
}
