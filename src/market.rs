// src/market.rs
//
// Static market-trend figures for the demo. No live data feed exists; the
// assistant's market reply and the trends widget both read from here.

/// Average price per sq.ft over the past year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub month: &'static str,
    pub price_per_sqft: i64,
}

/// Six-month outlook; `actual` is absent for future months.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    pub month: &'static str,
    pub actual: Option<i64>,
    pub forecast: i64,
}

pub const YOY_GROWTH_PCT: f64 = 8.2;
pub const TOP_LOCALITY: &str = "South Delhi";
pub const TOP_LOCALITY_GROWTH_PCT: f64 = 12.3;

const PRICE_TREND: [TrendPoint; 12] = [
    TrendPoint { month: "Jan", price_per_sqft: 12_500 },
    TrendPoint { month: "Feb", price_per_sqft: 12_700 },
    TrendPoint { month: "Mar", price_per_sqft: 13_000 },
    TrendPoint { month: "Apr", price_per_sqft: 13_200 },
    TrendPoint { month: "May", price_per_sqft: 13_500 },
    TrendPoint { month: "Jun", price_per_sqft: 13_800 },
    TrendPoint { month: "Jul", price_per_sqft: 14_000 },
    TrendPoint { month: "Aug", price_per_sqft: 14_200 },
    TrendPoint { month: "Sep", price_per_sqft: 14_500 },
    TrendPoint { month: "Oct", price_per_sqft: 14_800 },
    TrendPoint { month: "Nov", price_per_sqft: 15_000 },
    TrendPoint { month: "Dec", price_per_sqft: 15_200 },
];

const FORECAST: [ForecastPoint; 6] = [
    ForecastPoint { month: "Jan", actual: Some(15_200), forecast: 15_200 },
    ForecastPoint { month: "Feb", actual: Some(15_400), forecast: 15_400 },
    ForecastPoint { month: "Mar", actual: Some(15_600), forecast: 15_600 },
    ForecastPoint { month: "Apr", actual: None, forecast: 15_800 },
    ForecastPoint { month: "May", actual: None, forecast: 16_000 },
    ForecastPoint { month: "Jun", actual: None, forecast: 16_200 },
];

pub fn price_trend() -> &'static [TrendPoint] {
    &PRICE_TREND
}

pub fn forecast() -> &'static [ForecastPoint] {
    &FORECAST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_series_is_monotonic_and_year_long() {
        let trend = price_trend();
        assert_eq!(trend.len(), 12);
        assert!(trend.windows(2).all(|w| w[0].price_per_sqft <= w[1].price_per_sqft));
    }

    #[test]
    fn forecast_has_no_actuals_for_future_months() {
        let forecast = forecast();
        assert_eq!(forecast.len(), 6);
        assert!(forecast[..3].iter().all(|p| p.actual.is_some()));
        assert!(forecast[3..].iter().all(|p| p.actual.is_none()));
    }
}
