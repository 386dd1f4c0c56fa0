// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use crate::error::Error;

/// Parses an RFC 3339 timestamp, or a bare `YYYY-MM-DD` taken as midnight in `offset`.
pub fn parse_datetime(s: &str, offset: FixedOffset) -> crate::error::Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let day = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(s.to_string()))?;
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .and_then(|d| offset.from_local_datetime(&d).single())
        .ok_or_else(|| Error::InvalidDate(s.to_string()))?;
    Ok(midnight.with_timezone(&Utc))
}

pub fn parse_decimal(s: &str) -> crate::error::Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_| Error::InvalidAmount(s.to_string()))
}

pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    if d.is_sign_negative() && !d.is_zero() {
        format!("-{}{:.2}", symbol, d.abs())
    } else {
        format!("{}{:.2}", symbol, d)
    }
}

/// Formats a `[0, 1]` fraction as a whole percentage.
pub fn fmt_percent(share: &Decimal) -> String {
    format!("{}%", (*share * Decimal::ONE_HUNDRED).round())
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
