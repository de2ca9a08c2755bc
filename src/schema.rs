use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One reported revenue figure, as scraped (e.g., "5.69B").
///
/// The magnitude string is kept raw here; [`crate::normalize`] turns it
/// into billions.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RevenuePoint {
    pub dated: NaiveDate,
    pub revenue: String,
}

/// A revenue figure converted to a single fixed unit (billions).
/// ```json
/// "revenue": [
///      {
///          "dated": "2022-12-31",
///          "revenue_billions": 81.46,
///      },
///      {
///          "dated": "2023-12-31",
///          "revenue_billions": 96.77,
///      },
///      // ...
/// ]
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NormalizedRevenuePoint {
    pub dated: NaiveDate,
    pub revenue_billions: f64,
}

/// One trading day's closing price.
///
/// Weekends and market holidays produce no point; gaps in the date
/// sequence are normal, not an error.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub dated: NaiveDate,
    pub close: f64,
}

/// Joint display form of one company's two series.
///
/// The series stay separate; `resolved` carries, index-parallel with
/// `revenue`, the price point each revenue date lands on (`None` when the
/// report predates all price history). They are unified only visually,
/// on a shared date axis.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    pub revenue: Vec<NormalizedRevenuePoint>,
    pub price: Vec<PricePoint>,
    pub resolved: Vec<Option<PricePoint>>,
}
