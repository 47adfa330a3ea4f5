use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{Cents, serialize_units};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Money entering the account (deposits)
    Credit,
    /// Money leaving the account (withdrawals)
    Debit,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Credit => "credit",
            OperationKind::Debit => "debit",
        }
    }

    /// Signed effect of an amount of this kind on the balance.
    pub fn signed(&self, amount: Cents) -> Cents {
        match self {
            OperationKind::Credit => amount,
            OperationKind::Debit => -amount,
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single statement entry. Operations are immutable once appended to a statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Amount in cents (never negative)
    #[serde(serialize_with = "serialize_units")]
    pub amount: Cents,
    /// Assigned when the operation is appended, never supplied by clients
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: OperationKind,
}

impl Operation {
    pub fn new(kind: OperationKind, amount: Cents, created_at: DateTime<Utc>) -> Self {
        assert!(amount >= 0, "Operation amount must not be negative");
        Self {
            description: None,
            amount,
            created_at,
            kind,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Calendar day (UTC) on which the operation was recorded.
    pub fn date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}
