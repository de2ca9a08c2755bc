//! Fixed endpoints, and the two companies under comparison.

const INTERVAL: &str = "1d";
const RANGE: &str = "max";

/// Sent on the revenue page request; the site rejects default client UAs.
/// Overridable through the `USER_AGENT` environment variable.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/97.0.4692.71 Safari/537.36";

pub fn price_url(ticker: &str) -> String {
    format!(
        "https://query1.finance.yahoo.com/v8/finance/chart/{ticker}?symbol={ticker}&interval={}&range={}&events=div|split|capitalGains",
        INTERVAL,
        RANGE
    )
}

/// One company's fixed pipeline inputs; these are constants of this
/// version, not user-configurable surface.
#[derive(Debug, Clone)]
pub struct Company {
    pub ticker: &'static str,
    pub title: &'static str,
    pub revenue_url: &'static str,
}

pub const COMPANIES: [Company; 2] = [
    Company {
        ticker: "GME",
        title: "GameStop",
        revenue_url: "https://stockanalysis.com/stocks/gme/revenue/",
    },
    Company {
        ticker: "TSLA",
        title: "Tesla",
        revenue_url: "https://stockanalysis.com/stocks/tsla/revenue/",
    },
];
