// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The session's transaction list and the views derived from it.

use chrono::{DateTime, FixedOffset, Local};
use tracing::debug;

use crate::aggregate::derive_categories;
use crate::catalog::predefined_categories;
use crate::error::{Error, Result};
use crate::models::{CatalogCategory, CategoryTotal, MonthlySummary, Transaction, TransactionPatch};
use crate::seed::sample_transactions;
use crate::summary::derive_monthly_summary;

/// Source of "now" for month scoping.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall-clock local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Owns the ordered transaction list, most recently added first.
///
/// Category totals are recomputed after every mutation. The monthly summary
/// is computed on read so that it follows the clock across month boundaries.
pub struct BudgetStore {
    transactions: Vec<Transaction>,
    catalog: Vec<CatalogCategory>,
    categories: Vec<CategoryTotal>,
    clock: Box<dyn Clock>,
}

impl BudgetStore {
    pub fn new(catalog: Vec<CatalogCategory>, clock: Box<dyn Clock>) -> Self {
        let mut store = BudgetStore {
            transactions: Vec::new(),
            catalog,
            categories: Vec::new(),
            clock,
        };
        store.recompute();
        store
    }

    /// A store holding the sample dataset, dated in the clock's current month.
    pub fn seeded(catalog: Vec<CatalogCategory>, clock: Box<dyn Clock>) -> Self {
        let mut store = BudgetStore::new(catalog, clock);
        store.restore_sample_data();
        store
    }

    pub fn add(&mut self, tx: Transaction) {
        debug!(id = %tx.id, kind = %tx.kind, amount = %tx.amount, "adding transaction");
        self.transactions.insert(0, tx);
        self.recompute();
    }

    /// Removes every transaction with `id` and returns how many went.
    pub fn delete(&mut self, id: &str) -> usize {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = before - self.transactions.len();
        if removed == 0 {
            debug!(id, "delete matched no transaction");
        } else {
            debug!(id, removed, "deleted transactions");
            self.recompute();
        }
        removed
    }

    /// Merges `patch` into every transaction with `id` and returns how many matched.
    pub fn update(&mut self, id: &str, patch: &TransactionPatch) -> usize {
        let mut updated = 0;
        for tx in self.transactions.iter_mut().filter(|t| t.id == id) {
            patch.apply_to(tx);
            updated += 1;
        }
        if updated == 0 {
            debug!(id, "update matched no transaction");
        } else {
            debug!(id, updated, "updated transactions");
            self.recompute();
        }
        updated
    }

    pub fn try_delete(&mut self, id: &str) -> Result<usize> {
        match self.delete(id) {
            0 => Err(Error::TransactionNotFound(id.to_string())),
            n => Ok(n),
        }
    }

    pub fn try_update(&mut self, id: &str, patch: &TransactionPatch) -> Result<usize> {
        match self.update(id, patch) {
            0 => Err(Error::TransactionNotFound(id.to_string())),
            n => Ok(n),
        }
    }

    pub fn reset(&mut self) {
        debug!(cleared = self.transactions.len(), "resetting store");
        self.transactions.clear();
        self.recompute();
    }

    /// Replaces the list with the sample dataset.
    pub fn restore_sample_data(&mut self) {
        self.transactions = sample_transactions(self.clock.now());
        debug!(count = self.transactions.len(), "restored sample data");
        self.recompute();
    }

    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The most recently added transaction carrying `id`.
    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn catalog(&self) -> &[CatalogCategory] {
        &self.catalog
    }

    pub fn categories(&self) -> &[CategoryTotal] {
        &self.categories
    }

    pub fn monthly_summary(&self) -> MonthlySummary {
        derive_monthly_summary(&self.transactions, self.clock.now())
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now()
    }

    fn recompute(&mut self) {
        self.categories = derive_categories(&self.transactions, &self.catalog);
    }
}

impl Default for BudgetStore {
    fn default() -> Self {
        BudgetStore::seeded(predefined_categories().to_vec(), Box::new(SystemClock))
    }
}
