use std::fs;
use std::sync::Arc;

use chrono::{DateTime, Datelike, Local};
use thiserror::Error;
use tracing::info;

use crate::api::binance::BinanceClient;
use crate::api::thermos::ThermosClient;
use crate::catalog::{GIFT_ID_MAP, MONTH_NAMES};
use crate::models::{ChartGeometry, GiftQuote, MarketSnapshot};
use crate::services::chart_service::{self, ChartError, CHART_HEIGHT};
use crate::services::gift_service;
use crate::services::market_service::{self, MarketError};
use crate::utils::format::{format_percent, format_price, format_usd};
use crate::utils::svg::SvgDocument;

/// The presentation sink, overwritten every cycle.
pub const OUTPUT_PATH: &str = "dashboard.svg";

const DOC_WIDTH: u32 = 640;
const DOC_HEIGHT: u32 = 440;
const GIFT_ROWS_TOP: f64 = 118.0;
const GIFT_ROW_STEP: f64 = 22.0;
const CHART_TOP: f64 = 250.0;
const MARGIN: f64 = 20.0;

#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Market(#[from] MarketError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("Failed to write {path}: {source}")]
    Sink {
        path: String,
        source: std::io::Error,
    },
}

/// Run one refresh cycle: acquire market data and gift quotes, compute
/// the chart geometry, assemble the SVG document and write it to the
/// sink. A market or chart failure aborts the cycle; gift failures were
/// already downgraded to sentinel quotes upstream.
pub async fn refresh(
    binance: &BinanceClient,
    thermos: &Arc<ThermosClient>,
) -> Result<(), CycleError> {
    let now = Local::now();

    let snapshot = market_service::fetch_snapshot(binance).await?;
    let quotes = gift_service::fetch_all_quotes(thermos).await;
    let chart = chart_service::render_chart(&snapshot.history, snapshot.trend.color())?;

    let document = build_document(&now, &snapshot, &quotes, &chart);
    fs::write(OUTPUT_PATH, &document).map_err(|source| CycleError::Sink {
        path: OUTPUT_PATH.to_string(),
        source,
    })?;

    info!(
        "Dashboard written to {}: {} at {} ({}), {} gift quotes",
        OUTPUT_PATH,
        market_service::SYMBOL,
        format_usd(snapshot.current_price),
        format_percent(snapshot.change_percent),
        quotes.len()
    );
    Ok(())
}

/// Assemble the full dashboard document from this cycle's values.
fn build_document(
    now: &DateTime<Local>,
    snapshot: &MarketSnapshot,
    quotes: &[GiftQuote],
    chart: &ChartGeometry,
) -> String {
    let mut doc = SvgDocument::new(DOC_WIDTH, DOC_HEIGHT);
    doc.push(format!(
        r##"<rect width="{}" height="{}" fill="#0E0E10"/>"##,
        DOC_WIDTH, DOC_HEIGHT
    ));

    push_date_card(&mut doc, now);
    push_market_card(&mut doc, snapshot);
    push_gift_rows(&mut doc, snapshot, quotes);
    push_chart(&mut doc, chart);

    doc.render()
}

fn push_date_card(doc: &mut SvgDocument, now: &DateTime<Local>) {
    let month = MONTH_NAMES[now.month0() as usize];
    doc.push_text(
        MARGIN,
        52.0,
        r##"font-family="Inter, sans-serif" font-size="40" font-weight="bold" fill="#FFFFFF""##,
        &now.day().to_string(),
    );
    doc.push_text(
        MARGIN,
        76.0,
        r##"font-family="Inter, sans-serif" font-size="14" letter-spacing="2" fill="#8A8A8E""##,
        month,
    );
}

fn push_market_card(doc: &mut SvgDocument, snapshot: &MarketSnapshot) {
    doc.push_text(
        DOC_WIDTH as f64 - MARGIN,
        52.0,
        r##"text-anchor="end" font-family="Inter, sans-serif" font-size="28" font-weight="bold" fill="#FFFFFF""##,
        &format_usd(snapshot.current_price),
    );
    doc.push_text(
        DOC_WIDTH as f64 - MARGIN,
        76.0,
        &format!(
            r##"text-anchor="end" font-family="Inter, sans-serif" font-size="16" font-weight="bold" fill="{}""##,
            snapshot.trend.color()
        ),
        &format_percent(snapshot.change_percent),
    );
}

/// One row per catalog gift: name, floor in TON, USDT conversion at the
/// current ticker price, and the marketplace the floor sits on. Quotes
/// whose name is not in the catalog are skipped.
fn push_gift_rows(doc: &mut SvgDocument, snapshot: &MarketSnapshot, quotes: &[GiftQuote]) {
    let name_attrs = r##"font-family="Inter, sans-serif" font-size="14" fill="#FFFFFF""##;
    let value_attrs =
        r##"text-anchor="end" font-family="Inter, sans-serif" font-size="14" fill="#FFFFFF""##;
    let market_attrs =
        r##"text-anchor="end" font-family="Inter, sans-serif" font-size="12" fill="#8A8A8E""##;

    let mut y = GIFT_ROWS_TOP;
    for quote in quotes {
        let Some(id) = GIFT_ID_MAP.get(quote.name.as_str()) else {
            continue;
        };
        doc.push(format!(r#"<g id="gift-{}">"#, id));
        doc.push_text(MARGIN, y, name_attrs, &quote.name);
        doc.push_text(330.0, y, value_attrs, &format_price(quote.price));
        doc.push_text(
            470.0,
            y,
            value_attrs,
            &format_price(quote.price * snapshot.current_price),
        );
        doc.push_text(DOC_WIDTH as f64 - MARGIN, y, market_attrs, &quote.market);
        doc.push("</g>");
        y += GIFT_ROW_STEP;
    }
}

fn push_chart(doc: &mut SvgDocument, chart: &ChartGeometry) {
    doc.push(format!(
        r#"<defs><linearGradient id="chartGradient" x1="0" y1="0" x2="0" y2="1"><stop offset="0%" stop-color="{color}" stop-opacity="0.35"/><stop offset="100%" stop-color="{color}" stop-opacity="0"/></linearGradient></defs>"#,
        color = chart.color
    ));

    doc.push(format!(
        r#"<g transform="translate({},{})">"#,
        MARGIN, CHART_TOP
    ));
    doc.push(format!(
        r#"<path d="{}" fill="url(#chartGradient)" stroke="none"/>"#,
        chart.area_path
    ));
    doc.push(format!(
        r#"<path d="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
        chart.line_path, chart.color
    ));

    // Axis labels overlay the left edge of the chart, right-aligned,
    // spread over the surface height from max (top) to min (bottom).
    let steps = (chart.labels.len().max(2) - 1) as f64;
    for (i, label) in chart.labels.iter().enumerate() {
        let y = i as f64 / steps * CHART_HEIGHT;
        doc.push_text(
            48.0,
            y,
            r##"text-anchor="end" dominant-baseline="middle" font-family="Inter, sans-serif" font-size="11" fill="#8A8A8E""##,
            label,
        );
    }
    doc.push("</g>");
}
