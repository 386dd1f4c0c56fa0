// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{FixedOffset, TimeZone};
use pennywise::catalog::predefined_categories;
use pennywise::error::Error;
use pennywise::session::{parse_script, replay, Operation};
use pennywise::store::{BudgetStore, FixedClock};
use rust_decimal::Decimal;

fn store() -> BudgetStore {
    let now = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2025, 8, 20, 10, 0, 0)
        .unwrap();
    BudgetStore::seeded(predefined_categories().to_vec(), Box::new(FixedClock(now)))
}

const SCRIPT: &str = r#"[
  {"op": "add", "transaction": {"id": "9", "type": "expense", "amount": 50,
    "description": "Farmers Market", "category": "grocery", "date": "2025-08-19T08:30:00Z"}},
  {"op": "update", "id": "9", "patch": {"amount": "55.40", "description": "Market"}},
  {"op": "delete", "id": "2"},
  {"op": "delete", "id": "does-not-exist"}
]"#;

#[test]
fn parses_every_operation_kind() {
    let ops = parse_script(
        r#"[{"op":"reset"},{"op":"restore"},{"op":"delete","id":"1"},
            {"op":"update","id":"1","patch":{}}]"#,
    )
    .unwrap();
    assert_eq!(ops[0], Operation::Reset);
    assert_eq!(ops[1], Operation::Restore);
    assert!(matches!(&ops[2], Operation::Delete { id } if id == "1"));
    assert!(matches!(&ops[3], Operation::Update { patch, .. } if patch.is_empty()));
}

#[test]
fn replays_mutations_in_order() {
    let mut store = store();
    let ops = parse_script(SCRIPT).unwrap();
    assert_eq!(replay(&mut store, &ops), 4);

    let first = &store.list()[0];
    assert_eq!(first.id, "9");
    assert_eq!(first.amount, "55.40".parse::<Decimal>().unwrap());
    assert_eq!(first.description, "Market");
    assert!(store.get("2").is_none());
    assert_eq!(store.list().len(), 8);

    let grocery = store
        .categories()
        .iter()
        .find(|c| c.id == "grocery")
        .unwrap();
    assert_eq!(grocery.amount, "175.40".parse::<Decimal>().unwrap());

    let s = store.monthly_summary();
    assert_eq!(s.expenses, "398.40".parse::<Decimal>().unwrap());
}

#[test]
fn reset_then_add_leaves_only_new_transactions() {
    let mut store = store();
    let ops = parse_script(
        r#"[{"op":"reset"},
            {"op":"add","transaction":{"id":"x","type":"income","amount":"10",
             "description":"Tip","category":"gifts","date":"2025-08-02T10:00:00+02:00"}}]"#,
    )
    .unwrap();
    replay(&mut store, &ops);
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.monthly_summary().income, Decimal::from(10));
}

#[test]
fn rejects_malformed_scripts() {
    assert!(matches!(parse_script(r#"[{"op":"explode"}]"#), Err(Error::Script(_))));
    assert!(matches!(
        parse_script(r#"[{"op":"add","transaction":{"id":"1","type":"expense","amount":"1",
            "description":"","category":"x","date":"last tuesday"}}]"#),
        Err(Error::Script(_))
    ));
}
