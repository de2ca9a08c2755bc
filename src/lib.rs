pub mod align;
pub mod chart;
pub mod cli;
pub mod endp;
pub mod error;
pub mod normalize;
pub mod schema;
pub mod ui;
pub mod www;

use error::PipelineError;
use std::future::Future;
use std::path::{Path, PathBuf};
use www::Company;

/// Drive every company's pipeline in order, collecting each outcome.
///
/// Failures are logged and recorded, never propagated mid-loop, so one
/// company's bad fetch cannot block another company's chart.
pub async fn run_all<F, Fut>(
    companies: &[Company],
    mut pipeline: F,
) -> Vec<(&'static str, Result<PathBuf, PipelineError>)>
where
    F: FnMut(Company) -> Fut,
    Fut: Future<Output = Result<PathBuf, PipelineError>>,
{
    let pb = ui::single_pb(companies.len() as u64);
    let mut results = Vec::with_capacity(companies.len());
    for company in companies {
        let outcome = pipeline(company.clone()).await;
        if let Err(e) = &outcome {
            log::error!("[{}] pipeline failed: {e}", company.ticker);
        }
        results.push((company.ticker, outcome));
        pb.inc(1);
    }
    pb.finish_with_message("done");
    results
}

/// Run the whole fetch -> parse -> normalize -> align -> render pipeline
/// for one company, returning the path of the written chart.
///
/// Each invocation builds its own series values; nothing is carried over
/// between companies.
pub async fn run(
    client: &reqwest::Client,
    company: &Company,
    out_dir: &Path,
) -> Result<PathBuf, PipelineError> {
    let ticker = company.ticker;

    log::info!("[{ticker}] fetching price history");
    let price = endp::yahoo_finance::fetch(client, ticker).await?;
    if let (Some(first), Some(last)) = (price.first(), price.last()) {
        log::info!(
            "[{ticker}] {} trading days ({} .. {})",
            price.len(),
            first.dated,
            last.dated
        );
    }

    log::info!("[{ticker}] scraping revenue table");
    let revenue = endp::stockanalysis::fetch(client, company.revenue_url).await?;
    log::info!("[{ticker}] {} reporting periods", revenue.len());

    let revenue = normalize::series(revenue)?;
    let aligned = align::align(revenue, price);
    let matched = aligned.resolved.iter().flatten().count();
    log::info!(
        "[{ticker}] {matched}/{} report dates matched to a trading day",
        aligned.resolved.len()
    );

    let path = out_dir.join(format!("{}.png", ticker.to_lowercase()));
    chart::render(
        &path,
        &format!("{} Revenue and Stock Prices", company.title),
        ticker,
        &aligned,
    )?;
    Ok(path)
}
