use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::{Cents, Operation, OperationKind, Statement};

pub type AccountId = Uuid;

/// National identification number. Unique per customer and the only
/// credential a request carries.
pub type Cpf = String;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub cpf: Cpf,
    pub name: String,
    pub id: AccountId,
    pub statement: Statement,
}

impl Customer {
    pub fn new(cpf: impl Into<Cpf>, name: impl Into<String>) -> Self {
        Self {
            cpf: cpf.into(),
            name: name.into(),
            id: Uuid::new_v4(),
            statement: Statement::new(),
        }
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn balance(&self) -> Cents {
        self.statement.balance()
    }

    /// Record a credit. Callers check the amount first with [`super::validate_deposit`].
    pub fn deposit(&mut self, amount: Cents, description: Option<String>) -> Operation {
        self.statement
            .append(OperationKind::Credit, amount, description)
    }

    /// Record a debit. Callers check funds first with [`super::validate_withdrawal`].
    pub fn withdraw(&mut self, amount: Cents) -> Operation {
        self.statement.append(OperationKind::Debit, amount, None)
    }

    pub fn operations_on(&self, date: NaiveDate) -> Vec<Operation> {
        self.statement.on_date(date)
    }
}
