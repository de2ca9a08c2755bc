use crate::error::PipelineError;
use crate::schema::RevenuePoint;
use chrono::NaiveDate;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};

//////////////////////////////////////////////////////////////////////////////////////
// Revenue-by-period table scrape (stockanalysis.com)
//////////////////////////////////////////////////////////////////////////////////////

// Schema contract with the source table, checked at parse time rather than
// inferred: each report row holds 4 cells (period end, revenue, period
// label, YoY change), of which 2 are right-aligned numeric `td.tr` cells
// (revenue first, then the change). The stride extraction below is coupled
// to exactly this layout on purpose; a column added or removed upstream
// must fail the parse, not shift the data.
const ROW_WIDTH: usize = 4;
const NUMERIC_CELLS_PER_ROW: usize = 2;
const DATE_FORMAT: &str = "%b %d, %Y";

/// Fetch a revenue page and extract its report table.
pub async fn fetch(client: &Client, url: &str) -> Result<Vec<RevenuePoint>, PipelineError> {
    let html = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    extract(&html)
}

/// Extract (period-end date, raw magnitude string) pairs from a revenue
/// page, ascending by date.
pub fn extract(html: &str) -> Result<Vec<RevenuePoint>, PipelineError> {
    let document = Html::parse_document(html);
    let table_selector = selector("table")?;
    let cell_selector = selector("td")?;
    let numeric_selector = selector("td.tr")?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| PipelineError::Parse("revenue table not found".to_string()))?;

    let cells: Vec<ElementRef> = table.select(&cell_selector).collect();
    let numeric: Vec<ElementRef> = table.select(&numeric_selector).collect();

    if cells.is_empty() || cells.len() % ROW_WIDTH != 0 {
        return Err(PipelineError::Parse(format!(
            "expected rows of {ROW_WIDTH} cells, found {} cells in total",
            cells.len()
        )));
    }
    let rows = cells.len() / ROW_WIDTH;
    if numeric.len() != rows * NUMERIC_CELLS_PER_ROW {
        return Err(PipelineError::Parse(format!(
            "expected {} numeric cells for {rows} rows, found {}",
            rows * NUMERIC_CELLS_PER_ROW,
            numeric.len()
        )));
    }

    // every 4th cell is a period-end date, every 2nd numeric cell a revenue
    let dates = cells.iter().step_by(ROW_WIDTH);
    let revenues = numeric.iter().step_by(NUMERIC_CELLS_PER_ROW);

    let mut points = dates
        .zip(revenues)
        .map(|(date_cell, revenue_cell)| {
            let token = cell_text(date_cell);
            let dated = NaiveDate::parse_from_str(&token, DATE_FORMAT)
                .map_err(|e| PipelineError::Parse(format!("bad date token '{token}': {e}")))?;
            Ok(RevenuePoint {
                dated,
                revenue: cell_text(revenue_cell),
            })
        })
        .collect::<Result<Vec<_>, PipelineError>>()?;

    // page lists newest first
    points.sort_by_key(|point| point.dated);
    if points.windows(2).any(|pair| pair[0].dated == pair[1].dated) {
        return Err(PipelineError::Parse(
            "duplicate report dates in revenue table".to_string(),
        ));
    }
    Ok(points)
}

fn selector(css: &str) -> Result<Selector, PipelineError> {
    Selector::parse(css).map_err(|e| PipelineError::Parse(format!("bad selector '{css}': {e}")))
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}
