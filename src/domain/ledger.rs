use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{Cents, Operation, OperationKind};

/// A customer's ordered, append-only sequence of operations.
/// Insertion order is chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Statement {
    operations: Vec<Operation>,
}

impl Statement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation stamped with the current time.
    pub fn append(
        &mut self,
        kind: OperationKind,
        amount: Cents,
        description: Option<String>,
    ) -> Operation {
        self.append_at(kind, amount, description, Utc::now())
    }

    /// Append an operation with an explicit creation timestamp.
    pub fn append_at(
        &mut self,
        kind: OperationKind,
        amount: Cents,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Operation {
        let mut operation = Operation::new(kind, amount, created_at);
        if let Some(desc) = description {
            operation = operation.with_description(desc);
        }
        self.operations.push(operation.clone());
        operation
    }

    pub fn balance(&self) -> Cents {
        compute_balance(&self.operations)
    }

    /// Operations matching `predicate`, in append order.
    pub fn filter<P>(&self, predicate: P) -> Vec<Operation>
    where
        P: Fn(&Operation) -> bool,
    {
        self.operations
            .iter()
            .filter(|op| predicate(op))
            .cloned()
            .collect()
    }

    /// Operations recorded on the given calendar day.
    pub fn on_date(&self, date: NaiveDate) -> Vec<Operation> {
        self.filter(|op| op.date() == date)
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Compute a balance by folding operations left to right.
/// Balance = sum of credits - sum of debits
///
/// Accumulates in i128 so no intermediate sum can overflow. Deposits are
/// checked with [`validate_deposit`], so the result always fits in `Cents`;
/// anything outside that range saturates.
pub fn compute_balance(operations: &[Operation]) -> Cents {
    let total = operations
        .iter()
        .fold(0i128, |balance, op| balance + i128::from(op.kind.signed(op.amount)));
    Cents::try_from(total).unwrap_or(if total < 0 { Cents::MIN } else { Cents::MAX })
}

/// Validate that a deposit keeps the balance representable.
pub fn validate_deposit(statement: &Statement, amount: Cents) -> Result<(), LedgerError> {
    let balance = statement.balance();
    if balance.checked_add(amount).is_none() {
        return Err(LedgerError::BalanceOverflow {
            balance,
            requested: amount,
        });
    }
    Ok(())
}

/// Validate that a withdrawal is covered by the balance before it is applied.
pub fn validate_withdrawal(statement: &Statement, amount: Cents) -> Result<(), LedgerError> {
    let balance = statement.balance();
    if balance < amount {
        return Err(LedgerError::InsufficientFunds {
            balance,
            requested: amount,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    InsufficientFunds { balance: Cents, requested: Cents },
    BalanceOverflow { balance: Cents, requested: Cents },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::InsufficientFunds { balance, requested } => {
                write!(
                    f,
                    "Withdrawal of {} cents exceeds balance of {} cents",
                    requested, balance
                )
            }
            LedgerError::BalanceOverflow { balance, requested } => {
                write!(
                    f,
                    "Deposit of {} cents would overflow balance of {} cents",
                    requested, balance
                )
            }
        }
    }
}

impl std::error::Error for LedgerError {}
