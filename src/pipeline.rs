use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::data_models::OutputRow;
use crate::fetcher::Fetch;
use crate::pacer::Pacer;
use crate::report::CsvReport;
use crate::storefront::Storefront;

/// Counts of how far each line got.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub matched: usize,
    pub rated: usize,
}

/// Reads names, one per line, and turns each into exactly one report row.
/// Lines are handled one at a time; a failing stage only ends its own line.
pub struct Pipeline<F, P> {
    storefront: Storefront<F>,
    pacer: P,
}

impl<F: Fetch, P: Pacer> Pipeline<F, P> {
    pub fn new(storefront: Storefront<F>, pacer: P) -> Self {
        Self { storefront, pacer }
    }

    pub async fn run<R, W>(&mut self, input: R, report: &mut CsvReport<W>) -> Result<RunSummary>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut summary = RunSummary::default();
        let mut lines = input.split(b'\n');

        while let Some(raw) = lines.next_segment().await.context("Failed to read input")? {
            let name = decode_line(&raw);
            let row = self.process_line(&name, &mut summary).await;
            report.write_row(&row)?;
        }
        report.flush()?;

        log::info!(
            "done: {} lines, {} matched, {} rated",
            summary.lines,
            summary.matched,
            summary.rated
        );
        Ok(summary)
    }

    /// Search, then fetch the rating of the best match. Never fails: whatever
    /// stages completed are reflected in the row.
    pub async fn process_line(&mut self, name: &str, summary: &mut RunSummary) -> OutputRow {
        summary.lines += 1;

        log::info!("searching for {name}");
        let found = match self.storefront.search_for(&mut self.pacer, name).await {
            Ok(found) => found,
            Err(e) => {
                log::warn!("failed to find {name}, {e}");
                return OutputRow::unmatched(name);
            }
        };
        summary.matched += 1;
        log::info!("{} ({})", found.matched_label, found.link);

        let url = self.storefront.config().detail_url(&found.link);

        log::info!("fetching rating for {name}");
        match self.storefront.fetch_rating(&mut self.pacer, &found.link).await {
            Ok(info) => {
                summary.rated += 1;
                log::info!("{:.6} ({})", info.rating, info.rating_count);
                OutputRow::rated(name, &found, url, info)
            }
            Err(e) => {
                log::warn!("failed to fetch the rating for {name}, {e}");
                OutputRow::matched(name, &found, url)
            }
        }
    }
}

/// Drops a trailing `\r`; bytes that are not UTF-8 become U+FFFD instead of
/// ending the run.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

#[test]
fn test_decode_line() {
    assert_eq!(decode_line(b"Solitaire"), "Solitaire");
    assert_eq!(decode_line(b"Solitaire\r"), "Solitaire");
    assert_eq!(decode_line(b""), "");
    assert_eq!(decode_line(b"Caf\xe9"), "Caf\u{FFFD}");
}
