use crate::error::PipelineError;
use crate::schema::{NormalizedRevenuePoint, RevenuePoint};

//////////////////////////////////////////////////////////////////////////////////////
// Magnitude normalization: "5.69B" / "350M" / "900K" -> billions
//////////////////////////////////////////////////////////////////////////////////////

/// Convert an abbreviated magnitude string to billions.
///
/// Suffix rules, in priority order: `B` as-is, `M` / 1,000, `K` / 1,000,000.
/// A literal zero with no suffix is accepted as 0.0 (a genuinely reported
/// zero-revenue period should plot as zero, not abort the run); any other
/// unsuffixed or negative value is rejected.
pub fn to_billions(raw: &str) -> Result<f64, PipelineError> {
    let trimmed = raw.trim();
    if let Some(digits) = trimmed.strip_suffix('B') {
        return parse_magnitude(raw, digits);
    }
    if let Some(digits) = trimmed.strip_suffix('M') {
        return Ok(parse_magnitude(raw, digits)? / 1_000.0);
    }
    if let Some(digits) = trimmed.strip_suffix('K') {
        return Ok(parse_magnitude(raw, digits)? / 1_000_000.0);
    }
    if matches!(trimmed.parse::<f64>(), Ok(value) if value == 0.0) {
        return Ok(0.0);
    }
    Err(PipelineError::UnrecognizedMagnitude(raw.to_string()))
}

/// Normalize a whole scraped revenue series.
pub fn series(points: Vec<RevenuePoint>) -> Result<Vec<NormalizedRevenuePoint>, PipelineError> {
    points
        .into_iter()
        .map(|point| {
            Ok(NormalizedRevenuePoint {
                dated: point.dated,
                revenue_billions: to_billions(&point.revenue)?,
            })
        })
        .collect()
}

fn parse_magnitude(raw: &str, digits: &str) -> Result<f64, PipelineError> {
    let value: f64 = digits
        .trim()
        .parse()
        .map_err(|_| PipelineError::UnrecognizedMagnitude(raw.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(PipelineError::UnrecognizedMagnitude(raw.to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn billions_pass_through() {
        assert_eq!(to_billions("5.69B").unwrap(), 5.69);
    }

    #[test]
    fn millions_scale_down() {
        assert_eq!(to_billions("350M").unwrap(), 0.35);
    }

    #[test]
    fn thousands_scale_down() {
        assert_eq!(to_billions("900K").unwrap(), 0.0009);
    }

    #[test]
    fn literal_zero_is_accepted() {
        assert_eq!(to_billions("0").unwrap(), 0.0);
        assert_eq!(to_billions("0.00").unwrap(), 0.0);
    }

    #[test]
    fn bare_numbers_are_rejected() {
        assert!(matches!(
            to_billions("123"),
            Err(PipelineError::UnrecognizedMagnitude(_))
        ));
    }

    #[test]
    fn negative_values_are_rejected() {
        assert!(matches!(
            to_billions("-1.2B"),
            Err(PipelineError::UnrecognizedMagnitude(_))
        ));
    }

    #[test]
    fn unknown_suffix_is_rejected() {
        assert!(matches!(
            to_billions("4.5T"),
            Err(PipelineError::UnrecognizedMagnitude(_))
        ));
        assert!(matches!(
            to_billions(""),
            Err(PipelineError::UnrecognizedMagnitude(_))
        ));
    }

    #[test]
    fn whole_series_normalizes() {
        use crate::schema::RevenuePoint;
        use chrono::NaiveDate;

        let raw = vec![
            RevenuePoint {
                dated: NaiveDate::from_ymd_opt(2022, 12, 31).unwrap(),
                revenue: "81.46B".to_string(),
            },
            RevenuePoint {
                dated: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
                revenue: "96.77B".to_string(),
            },
        ];
        let normalized = series(raw).unwrap();
        assert_eq!(normalized[0].revenue_billions, 81.46);
        assert_eq!(normalized[1].revenue_billions, 96.77);
    }
}
