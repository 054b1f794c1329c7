use anyhow::{Context, Result};
use std::io::Write;

use crate::data_models::{OutputRow, REPORT_HEADER};

/// CSV report: header first, then one record per input line.
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvReport<W> {
    pub fn new(out: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);
        writer
            .write_record(REPORT_HEADER)
            .context("Failed to write report header")?;
        Ok(Self { writer })
    }

    pub fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        self.writer
            .serialize(row)
            .with_context(|| format!("Failed to write report row for {:?}", row.query_name))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush report")
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush report: {}", e.error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_models::{MatchResult, RatingInfo};

    fn render(rows: &[OutputRow]) -> String {
        let mut report = CsvReport::new(Vec::new()).unwrap();
        for row in rows {
            report.write_row(row).unwrap();
        }
        String::from_utf8(report.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_header_only() {
        assert_eq!(render(&[]), "Name,Matched,URL,Rating,Ratings\n");
    }

    #[test]
    fn test_unmatched_row_defaults() {
        let out = render(&[OutputRow::unmatched("Xyz")]);
        assert_eq!(out, "Name,Matched,URL,Rating,Ratings\nXyz,,,0.000000,0\n");
    }

    #[test]
    fn test_rated_row() {
        let found = MatchResult {
            matched_label: "Solitaire Classic".to_string(),
            link: "/store/apps/details?id=x".to_string(),
        };
        let row = OutputRow::rated(
            "Solitaire",
            &found,
            "https://play.google.com/store/apps/details?id=x".to_string(),
            RatingInfo {
                rating: 4.6,
                rating_count: 152034,
            },
        );
        let out = render(&[row]);
        assert_eq!(
            out.lines().nth(1).unwrap(),
            "Solitaire,Solitaire Classic,https://play.google.com/store/apps/details?id=x,4.600000,152034"
        );
    }

    #[test]
    fn test_quotes_only_when_needed() {
        let found = MatchResult {
            matched_label: "Cut the \"Rope\", Remastered".to_string(),
            link: "/d".to_string(),
        };
        let row = OutputRow::matched("rope, cut", &found, "https://s/d".to_string());
        let out = render(&[row]);
        assert_eq!(
            out.lines().nth(1).unwrap(),
            r#""rope, cut","Cut the ""Rope"", Remastered",https://s/d,0.000000,0"#
        );
    }

    #[test]
    fn test_blank_name_keeps_all_columns() {
        let out = render(&[OutputRow::unmatched("")]);
        assert_eq!(out.lines().nth(1).unwrap(), ",,,0.000000,0");
    }
}
