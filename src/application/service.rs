use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::{
    Cents, Customer, Operation, format_cents, validate_deposit, validate_withdrawal,
};
use crate::storage::Directory;

use super::{AccountGuard, AppError};

/// Application service providing the banking operations.
/// Cloning is cheap: all clones share the same customer directory.
#[derive(Clone, Default)]
pub struct BankService {
    directory: Arc<RwLock<Directory>>,
}

impl BankService {
    /// Create a service over an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Account operations
    // ========================

    /// Register a new customer.
    pub async fn create_account(&self, cpf: &str, name: &str) -> Result<Customer, AppError> {
        if cpf.trim().is_empty() {
            return Err(AppError::InvalidRequest("cpf is required".to_string()));
        }

        let mut directory = self.directory.write().await;
        let customer = directory
            .create(cpf, name)
            .cloned()
            .ok_or_else(|| AppError::CustomerAlreadyExists(cpf.to_string()))?;

        tracing::info!(cpf, account_id = %customer.id, "account created");
        Ok(customer)
    }

    /// Check that a national ID belongs to a registered customer.
    pub async fn verify_account(&self, cpf: &str) -> Result<(), AppError> {
        let directory = self.directory.read().await;
        AccountGuard::resolve(&directory, cpf).map(|_| ())
    }

    /// Get the full customer record, statement included.
    pub async fn get_account(&self, cpf: &str) -> Result<Customer, AppError> {
        let directory = self.directory.read().await;
        AccountGuard::resolve(&directory, cpf).cloned()
    }

    /// Replace the customer's display name.
    pub async fn rename_account(&self, cpf: &str, name: &str) -> Result<Customer, AppError> {
        let mut directory = self.directory.write().await;
        let customer = AccountGuard::resolve_mut(&mut directory, cpf)?;
        customer.rename(name);
        Ok(customer.clone())
    }

    /// Remove a customer and return the customers that remain.
    pub async fn delete_account(&self, cpf: &str) -> Result<Vec<Customer>, AppError> {
        let mut directory = self.directory.write().await;
        AccountGuard::resolve(&directory, cpf)?;

        if let Some(removed) = directory.remove(cpf) {
            tracing::info!(cpf, account_id = %removed.id, "account deleted");
        }
        Ok(directory.customers().to_vec())
    }

    /// Snapshot of every registered customer.
    pub async fn list_accounts(&self) -> Vec<Customer> {
        self.directory.read().await.customers().to_vec()
    }

    // ========================
    // Statement operations
    // ========================

    pub async fn get_statement(&self, cpf: &str) -> Result<Vec<Operation>, AppError> {
        let directory = self.directory.read().await;
        let customer = AccountGuard::resolve(&directory, cpf)?;
        Ok(customer.statement.operations().to_vec())
    }

    /// Operations recorded on a calendar day given as `YYYY-MM-DD`.
    pub async fn get_statement_by_date(
        &self,
        cpf: &str,
        date: &str,
    ) -> Result<Vec<Operation>, AppError> {
        let directory = self.directory.read().await;
        let customer = AccountGuard::resolve(&directory, cpf)?;
        let date = parse_date(date)?;
        Ok(customer.operations_on(date))
    }

    pub async fn get_balance(&self, cpf: &str) -> Result<Cents, AppError> {
        let directory = self.directory.read().await;
        let customer = AccountGuard::resolve(&directory, cpf)?;
        Ok(customer.balance())
    }

    /// Record a credit as long as the resulting balance stays representable.
    pub async fn deposit(
        &self,
        cpf: &str,
        amount: Cents,
        description: Option<String>,
    ) -> Result<Operation, AppError> {
        let mut directory = self.directory.write().await;
        let customer = AccountGuard::resolve_mut(&mut directory, cpf)?;
        validate_amount(amount)?;
        validate_deposit(&customer.statement, amount)?;

        let operation = customer.deposit(amount, description);
        tracing::info!(cpf, amount = %format_cents(amount), "deposit recorded");
        Ok(operation)
    }

    /// Record a debit if the current balance covers it.
    /// The check and the append happen under the same write lock.
    pub async fn withdraw(&self, cpf: &str, amount: Cents) -> Result<Operation, AppError> {
        let mut directory = self.directory.write().await;
        let customer = AccountGuard::resolve_mut(&mut directory, cpf)?;
        validate_amount(amount)?;

        if let Err(err) = validate_withdrawal(&customer.statement, amount) {
            tracing::warn!(cpf, "withdrawal rejected: {}", err);
            return Err(err.into());
        }

        let operation = customer.withdraw(amount);
        tracing::info!(cpf, amount = %format_cents(amount), "withdrawal recorded");
        Ok(operation)
    }
}

fn validate_amount(amount: Cents) -> Result<(), AppError> {
    if amount < 0 {
        return Err(AppError::InvalidAmount(
            "Amount must not be negative".to_string(),
        ));
    }
    Ok(())
}

fn parse_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(format!("expected YYYY-MM-DD, got '{}'", date)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-15"),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
        assert!(matches!(parse_date("15/01/2024"), Err(AppError::InvalidDate(_))));
        assert!(matches!(parse_date("2024-02-30"), Err(AppError::InvalidDate(_))));
        assert!(matches!(parse_date(""), Err(AppError::InvalidDate(_))));
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0).is_ok());
        assert!(validate_amount(100).is_ok());
        assert!(matches!(validate_amount(-1), Err(AppError::InvalidAmount(_))));
    }
}
