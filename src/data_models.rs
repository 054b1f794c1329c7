use serde::{Serialize, Serializer};

/// One search result before selection: visible text and its link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub label: String,
    pub link: String,
}

impl Candidate {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Candidate {
        Candidate {
            label: label.into(),
            link: link.into(),
        }
    }
}

/// The winning candidate for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub matched_label: String,
    pub link: String,
}

impl From<Candidate> for MatchResult {
    fn from(candidate: Candidate) -> Self {
        MatchResult {
            matched_label: candidate.label,
            link: candidate.link,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingInfo {
    pub rating: f64,
    pub rating_count: u64,
}

pub const REPORT_HEADER: [&str; 5] = ["Name", "Matched", "URL", "Rating", "Ratings"];

/// One report line. Fields of stages that did not run or failed stay empty / zero.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct OutputRow {
    #[serde(rename = "Name")]
    pub query_name: String,
    #[serde(rename = "Matched")]
    pub matched_label: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Rating", serialize_with = "six_decimals")]
    pub rating: f64,
    #[serde(rename = "Ratings")]
    pub rating_count: u64,
}

impl OutputRow {
    /// Row for a line whose search failed.
    pub fn unmatched(query_name: &str) -> OutputRow {
        OutputRow {
            query_name: query_name.to_string(),
            ..Default::default()
        }
    }

    /// Row for a line whose rating fetch failed.
    pub fn matched(query_name: &str, found: &MatchResult, url: String) -> OutputRow {
        OutputRow {
            query_name: query_name.to_string(),
            matched_label: found.matched_label.clone(),
            url,
            ..Default::default()
        }
    }

    pub fn rated(query_name: &str, found: &MatchResult, url: String, info: RatingInfo) -> OutputRow {
        OutputRow {
            rating: info.rating,
            rating_count: info.rating_count,
            ..Self::matched(query_name, found, url)
        }
    }
}

fn six_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.6}"))
}
