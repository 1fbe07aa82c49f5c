use crate::market;
use maud::{html, Markup};

/// Static price trend and forecast widget. No charting; the figures render
/// as a plain table.
pub fn market_trends_widget() -> Markup {
    html! {
        div class="market-trends" {
            div class="trends-header" {
                h4 { "Price Trend & Forecast" }
                span class="growth" { "+" (market::YOY_GROWTH_PCT) "% YoY" }
            }
            table {
                thead {
                    tr {
                        th { "Month" }
                        th { "Actual (₹/sq.ft)" }
                        th { "Forecast (₹/sq.ft)" }
                    }
                }
                tbody {
                    @for point in market::forecast() {
                        tr {
                            td { (point.month) }
                            td {
                                @if let Some(actual) = point.actual {
                                    (actual)
                                } @else {
                                    "-"
                                }
                            }
                            td { (point.forecast) }
                        }
                    }
                }
            }
        }
    }
}
