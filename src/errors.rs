// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors raised by the wallet core.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Invalid amount '{0}', expected a number such as 45.50")]
    InvalidAmount(String),
    #[error("Amount must not be negative, got '{0}'")]
    NegativeAmount(String),
    #[error("Amount '{0}' is too large, the limit is 9,999,999,999,999.99")]
    AmountOutOfRange(String),
    #[error("Amount '{0}' has more than two decimal places")]
    TooPrecise(String),
    #[error("Unknown locale '{0}', expected something like en_US")]
    UnknownLocale(String),
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
