use crate::error::PipelineError;
use crate::schema::{AlignedSeries, NormalizedRevenuePoint, PricePoint};
use chrono::NaiveDate;

//////////////////////////////////////////////////////////////////////////////////////
// Date alignment of the sparse revenue series against the dense price series
//////////////////////////////////////////////////////////////////////////////////////

// Annual reports routinely post on weekends and market holidays, so an
// equality join on dates silently drops most revenue points (no matching
// trading day exists). Each revenue date instead resolves to the last
// trading day on-or-before it, which is deterministic and keeps an exact
// match when the report date is itself a trading day.

/// Pair each revenue point with the price of the last trading day
/// on-or-before its report date.
///
/// A revenue point older than all price history resolves to `None` and is
/// retained for revenue-only display; absence stays explicit, never a
/// substituted zero.
pub fn align(revenue: Vec<NormalizedRevenuePoint>, price: Vec<PricePoint>) -> AlignedSeries {
    let resolved = revenue
        .iter()
        .map(|point| {
            let hit = last_on_or_before(&price, point.dated).cloned();
            if hit.is_none() {
                log::warn!(
                    "revenue point {} predates all price history; kept for revenue-only display",
                    point.dated
                );
            }
            hit
        })
        .collect();

    AlignedSeries {
        revenue,
        price,
        resolved,
    }
}

/// Resolve a single date to a price point, surfacing the pre-history case
/// as a hard [`PipelineError::AlignmentGap`] for callers that need the
/// association to exist.
pub fn resolve(price: &[PricePoint], dated: NaiveDate) -> Result<&PricePoint, PipelineError> {
    last_on_or_before(price, dated).ok_or(PipelineError::AlignmentGap(dated))
}

// `price` is ascending by date, so the latest point on-or-before `dated`
// sits just left of the partition.
fn last_on_or_before(price: &[PricePoint], dated: NaiveDate) -> Option<&PricePoint> {
    let idx = price.partition_point(|p| p.dated <= dated);
    if idx == 0 {
        None
    } else {
        Some(&price[idx - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn december_week() -> Vec<PricePoint> {
        // Tue 2023-12-26 .. Fri 2023-12-29; Sat/Sun produce no points
        [26, 27, 28, 29]
            .iter()
            .map(|&d| PricePoint {
                dated: day(2023, 12, d),
                close: d as f64,
            })
            .collect()
    }

    #[test]
    fn trading_day_resolves_to_itself() {
        let price = december_week();
        let hit = resolve(&price, day(2023, 12, 28)).unwrap();
        assert_eq!(hit.dated, day(2023, 12, 28));
    }

    #[test]
    fn sunday_report_resolves_to_preceding_friday() {
        let price = december_week();
        let hit = resolve(&price, day(2023, 12, 31)).unwrap();
        assert_eq!(hit.dated, day(2023, 12, 29));
    }

    #[test]
    fn report_before_all_history_is_a_gap() {
        let price = december_week();
        assert!(matches!(
            resolve(&price, day(2020, 1, 1)),
            Err(PipelineError::AlignmentGap(_))
        ));
    }

    #[test]
    fn aligned_series_keeps_unmatched_revenue() {
        let price = december_week();
        let revenue = vec![
            NormalizedRevenuePoint {
                dated: day(2020, 1, 1),
                revenue_billions: 1.0,
            },
            NormalizedRevenuePoint {
                dated: day(2023, 12, 31),
                revenue_billions: 2.0,
            },
        ];
        let aligned = align(revenue, price);

        assert_eq!(aligned.revenue.len(), 2);
        assert_eq!(aligned.resolved.len(), 2);
        assert_eq!(aligned.resolved[0], None);
        assert_eq!(
            aligned.resolved[1].as_ref().map(|p| p.dated),
            Some(day(2023, 12, 29))
        );
    }
}
