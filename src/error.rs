// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error type shared by the library modules.

/// The errors that may occur while parsing input or mutating a store strictly.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A date or date-time string could not be parsed.
    #[error("invalid date '{0}', expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate(String),

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    /// A transaction type other than `income` or `expense`.
    #[error("invalid transaction type '{0}', expected 'income' or 'expense'")]
    InvalidKind(String),

    #[error("invalid time range '{0}', expected 'week', 'month' or 'year'")]
    InvalidTimeRange(String),

    /// A strict store operation referenced an id with no matching transaction.
    #[error("no transaction with id '{0}'")]
    TransactionNotFound(String),

    /// A session script could not be decoded.
    #[error("invalid session script: {0}")]
    Script(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
