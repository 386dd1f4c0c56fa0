// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Scripted store mutations, replayed in order.
//!
//! A script is a JSON array such as:
//!
//! ```json
//! [
//!   {"op": "add", "transaction": {"id": "9", "type": "expense", "amount": "50",
//!     "description": "Market", "category": "grocery", "date": "2025-08-10T09:00:00Z"}},
//!   {"op": "update", "id": "9", "patch": {"amount": "55"}},
//!   {"op": "delete", "id": "2"},
//!   {"op": "reset"}
//! ]
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{Transaction, TransactionPatch};
use crate::store::BudgetStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    Add { transaction: Transaction },
    Delete { id: String },
    Update { id: String, patch: TransactionPatch },
    Reset,
    Restore,
}

impl Operation {
    pub fn apply(&self, store: &mut BudgetStore) {
        match self {
            Operation::Add { transaction } => store.add(transaction.clone()),
            Operation::Delete { id } => {
                store.delete(id);
            }
            Operation::Update { id, patch } => {
                store.update(id, patch);
            }
            Operation::Reset => store.reset(),
            Operation::Restore => store.restore_sample_data(),
        }
    }
}

pub fn parse_script(json: &str) -> Result<Vec<Operation>> {
    serde_json::from_str(json).map_err(|e| Error::Script(e.to_string()))
}

/// Applies every operation in order and returns how many ran.
pub fn replay(store: &mut BudgetStore, ops: &[Operation]) -> usize {
    for op in ops {
        op.apply(store);
    }
    info!(operations = ops.len(), remaining = store.list().len(), "replayed session script");
    ops.len()
}
