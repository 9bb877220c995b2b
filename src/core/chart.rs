//! # Chart Data Mapper
//!
//! Reshapes the parallel `dates` / `sentiments` arrays of a result into
//! ordered chart points. Points are recomputed on every render and never
//! stored.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate};

use crate::analysis::AnalysisResult;

/// Calendar format used when none is configured (`5/1/2024`).
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: String,
    pub sentiment: f64,
}

/// One point per trend index, in backend order.
///
/// Absent result or absent trend data yields no points. Mismatched array
/// lengths are truncated to the shorter one.
pub fn chart_points(result: Option<&AnalysisResult>, date_format: &str) -> Vec<ChartPoint> {
    let Some(trend) = result.and_then(|r| r.trend_data.as_ref()) else {
        return Vec::new();
    };

    trend
        .dates
        .iter()
        .zip(trend.sentiments.iter())
        .map(|(date, &sentiment)| ChartPoint {
            date: format_date(date, date_format),
            sentiment,
        })
        .collect()
}

/// `(index, sentiment)` pairs for the chart widget's x/y plane.
pub fn plot_data(points: &[ChartPoint]) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.sentiment))
        .collect()
}

/// Whether chrono understands every specifier in `date_format`.
pub fn is_valid_date_format(date_format: &str) -> bool {
    !StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error))
}

/// Formats an ISO date (or RFC 3339 timestamp) as a calendar date.
/// Text that parses as neither, or a format chrono rejects, yields the
/// raw text unchanged.
fn format_date(raw: &str, date_format: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));

    let Some(d) = date else {
        return raw.to_string();
    };
    let mut out = String::new();
    match write!(out, "{}", d.format(date_format)) {
        Ok(()) => out,
        Err(_) => raw.to_string(),
    }
}
