use std::fmt;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The two numeric fields read from a detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Rating,
    RatingCount,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Rating => f.write_str("rating"),
            Field::RatingCount => f.write_str("ratingCount"),
        }
    }
}

/// Everything that can stop a single line at the search or rating stage.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("could not build request url from {base}: {reason}")]
    InvalidUrl { base: String, reason: String },

    #[error("could not parse document from {url}: {reason}")]
    ParseDocument { url: String, reason: String },

    #[error("could not parse {field} from {text:?}: {reason}")]
    ParseField {
        field: Field,
        text: String,
        reason: String,
    },

    #[error("no matching app links found when searching for {query:?}")]
    NoResults { query: String },

    #[error("no {field} element on {url}")]
    MissingField { field: Field, url: String },
}
