use thiserror::Error;

use crate::domain::{Cents, LedgerError};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("Customer not found")]
    CustomerNotFound(String),

    #[error("Customer already exists!")]
    CustomerAlreadyExists(String),

    #[error("Insufficient funds!")]
    InsufficientFunds { balance: Cents, requested: Cents },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds { balance, requested } => {
                AppError::InsufficientFunds { balance, requested }
            }
            LedgerError::BalanceOverflow { .. } => {
                AppError::InvalidAmount("amount out of range".to_string())
            }
        }
    }
}
