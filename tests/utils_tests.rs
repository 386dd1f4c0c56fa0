// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{FixedOffset, TimeZone, Utc};
use pennywise::error::Error;
use pennywise::models::TransactionKind;
use pennywise::utils::{fmt_money, fmt_percent, parse_datetime, parse_decimal};
use rust_decimal::Decimal;

#[test]
fn parses_rfc3339_and_bare_dates() {
    let utc = FixedOffset::east_opt(0).unwrap();
    assert_eq!(
        parse_datetime("2025-08-10T09:15:00+02:00", utc).unwrap(),
        Utc.with_ymd_and_hms(2025, 8, 10, 7, 15, 0).unwrap()
    );
    let plus3 = FixedOffset::east_opt(3 * 3600).unwrap();
    assert_eq!(
        parse_datetime("2025-08-10", plus3).unwrap(),
        Utc.with_ymd_and_hms(2025, 8, 9, 21, 0, 0).unwrap()
    );
    assert_eq!(
        parse_datetime("10/08/2025", utc),
        Err(Error::InvalidDate("10/08/2025".into()))
    );
}

#[test]
fn parses_amounts() {
    assert_eq!(parse_decimal(" 12.50 ").unwrap(), Decimal::new(1250, 2));
    assert_eq!(parse_decimal("-3").unwrap(), Decimal::from(-3));
    assert_eq!(parse_decimal("ten"), Err(Error::InvalidAmount("ten".into())));
}

#[test]
fn parses_kinds() {
    assert_eq!("Expense".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
    assert_eq!(
        "transfer".parse::<TransactionKind>(),
        Err(Error::InvalidKind("transfer".into()))
    );
}

#[test]
fn formats_money_and_percent() {
    assert_eq!(fmt_money(&Decimal::new(2530, 0), "$"), "$2530.00");
    assert_eq!(fmt_money(&Decimal::new(-1505, 1), "$"), "-$150.50");
    assert_eq!(fmt_percent(&Decimal::new(3233, 4)), "32%");
}
