//! Server-side HTML for the stock table and closing-price chart.
//!
//! Markup lives in tera templates under `templates/`; this module only builds
//! their context from a [`ViewState`]. Every `.html` template is autoescaped.

use std::collections::HashMap;

use serde::Serialize;
use tera::{Context, Tera, Value};
use tickertape_core::{ChartSeries, DailyRecord, RecordField, ViewState};

const PAGE_TEMPLATE: &str = "page.html";
const TABLE_TEMPLATE: &str = "table.html";
const CHART_TEMPLATE: &str = "chart.html";

const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 320.0;
const CHART_PADDING: f64 = 56.0;

/// Compiled page templates with the `price` and `volume` filters registered.
#[derive(Debug)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (PAGE_TEMPLATE, include_str!("../templates/page.html")),
            (TABLE_TEMPLATE, include_str!("../templates/table.html")),
            (CHART_TEMPLATE, include_str!("../templates/chart.html")),
        ])?;
        tera.register_filter("price", price_filter);
        tera.register_filter("volume", volume_filter);
        Ok(Self { tera })
    }

    /// Full page: heading, table, and chart for `view`.
    pub fn render_page(&self, view: &ViewState, symbol: &str) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("symbol", symbol);
        context.insert("table", &TableContext::from_view(view));
        context.insert("chart", &ChartContext::from_series(&view.chart_series()));
        self.tera.render(PAGE_TEMPLATE, &context)
    }

    pub fn render_table(&self, view: &ViewState) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("table", &TableContext::from_view(view));
        self.tera.render(TABLE_TEMPLATE, &context)
    }

    /// An empty series renders the frame and axis titles only.
    pub fn render_chart(&self, chart: &ChartSeries) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("chart", &ChartContext::from_series(chart));
        self.tera.render(CHART_TEMPLATE, &context)
    }
}

#[derive(Debug, Serialize)]
struct TableContext<'a> {
    error: Option<&'a str>,
    loading: bool,
    column_count: usize,
    headers: Vec<HeaderCell>,
    rows: Vec<DailyRecord>,
}

/// Header text plus the sort that clicking it produces.
#[derive(Debug, Serialize)]
struct HeaderCell {
    label: String,
    sort: &'static str,
    dir: &'static str,
}

impl<'a> TableContext<'a> {
    fn from_view(view: &'a ViewState) -> Self {
        let headers = RecordField::ALL
            .into_iter()
            .map(|key| {
                let next = view.sort().after_click(key);
                HeaderCell {
                    label: view.header_label(key),
                    sort: next.key.as_str(),
                    dir: next.direction.as_str(),
                }
            })
            .collect();

        Self {
            error: view.error_message(),
            loading: view.is_loading(),
            column_count: RecordField::ALL.len(),
            headers,
            rows: if view.is_loading() {
                Vec::new()
            } else {
                view.sorted_records()
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct ChartContext {
    label: String,
    width: f64,
    height: f64,
    left: f64,
    top: f64,
    plot_width: f64,
    plot_height: f64,
    center_x: f64,
    center_y: f64,
    tick_x: f64,
    date_title_y: f64,
    date_label_y: f64,
    scale: Option<ChartScale>,
}

/// Plotted part of the chart; absent when no value is finite.
#[derive(Debug, Serialize)]
struct ChartScale {
    high: f64,
    high_y: String,
    low: f64,
    low_y: String,
    points: String,
    markers: Vec<ChartMarker>,
}

#[derive(Debug, Serialize)]
struct ChartMarker {
    date: String,
    x: String,
    /// `None` for a `NaN` close: the date is labelled but no point is drawn.
    y: Option<String>,
    value: f64,
}

impl ChartContext {
    fn from_series(chart: &ChartSeries) -> Self {
        let left = CHART_PADDING;
        let right = CHART_WIDTH - CHART_PADDING / 2.0;
        let top = CHART_PADDING / 2.0;
        let bottom = CHART_HEIGHT - CHART_PADDING;

        let scale = chart.value_range().map(|(low, high)| {
            let count = chart.len();
            let x_at = |index: usize| {
                if count > 1 {
                    left + (right - left) / (count - 1) as f64 * index as f64
                } else {
                    (left + right) / 2.0
                }
            };
            let y_at = |value: f64| {
                if high > low {
                    bottom - (value - low) / (high - low) * (bottom - top)
                } else {
                    (top + bottom) / 2.0
                }
            };

            let points = chart
                .values
                .iter()
                .enumerate()
                .filter(|(_, value)| value.is_finite())
                .map(|(index, value)| format!("{:.1},{:.1}", x_at(index), y_at(*value)))
                .collect::<Vec<_>>()
                .join(" ");

            let markers = chart
                .labels
                .iter()
                .zip(&chart.values)
                .enumerate()
                .map(|(index, (date, value))| ChartMarker {
                    date: date.clone(),
                    x: format!("{:.1}", x_at(index)),
                    y: value.is_finite().then(|| format!("{:.1}", y_at(*value))),
                    value: *value,
                })
                .collect();

            ChartScale {
                high,
                high_y: format!("{:.1}", y_at(high) + 4.0),
                low,
                low_y: format!("{:.1}", y_at(low) + 4.0),
                points,
                markers,
            }
        });

        Self {
            label: chart.label.clone(),
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            left,
            top,
            plot_width: right - left,
            plot_height: bottom - top,
            center_x: (left + right) / 2.0,
            center_y: (top + bottom) / 2.0,
            tick_x: left - 4.0,
            date_title_y: CHART_HEIGHT - 8.0,
            date_label_y: bottom + 16.0,
            scale,
        }
    }
}

/// Two decimal places. `NaN` reaches the template as `null` and renders as `NaN`.
fn price_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    match value {
        Value::Null => Ok(Value::String(String::from("NaN"))),
        Value::Number(number) => {
            let price = number.as_f64().unwrap_or(f64::NAN);
            Ok(Value::String(format!("{price:.2}")))
        }
        other => Err(tera::Error::msg(format!(
            "price filter expects a number, got {other}"
        ))),
    }
}

/// Groups digits in threes: `3240064` becomes `3,240,064`.
fn volume_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let volume = value.as_u64().ok_or_else(|| {
        tera::Error::msg(format!("volume filter expects an unsigned integer, got {value}"))
    })?;

    let digits = volume.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    Ok(Value::String(grouped))
}
