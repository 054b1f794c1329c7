use anyhow::Context;
use storefront_rater::config::CONFIG;
use storefront_rater::fetcher::HttpFetcher;
use storefront_rater::pacer::IntervalPacer;
use storefront_rater::pipeline::Pipeline;
use storefront_rater::report::CsvReport;
use storefront_rater::storefront::Storefront;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr, stdout carries the CSV.
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    // Bridge log crate -> tracing (so log::info! etc. work)
    tracing_log::LogTracer::init().context("Failed to install log bridge")?;

    let fetcher = HttpFetcher::new(&CONFIG)?;
    let storefront = Storefront::new(fetcher, CONFIG.clone());
    let pacer = IntervalPacer::new(CONFIG.pacing_period);
    let mut pipeline = Pipeline::new(storefront, pacer);

    let stdout = std::io::stdout();
    let mut report = CsvReport::new(stdout.lock())?;
    pipeline
        .run(BufReader::new(tokio::io::stdin()), &mut report)
        .await?;
    Ok(())
}
