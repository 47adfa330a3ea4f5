use crate::domain::Customer;
use crate::storage::Directory;

use super::AppError;

/// Resolves the acting customer from the national ID a request claims.
/// Every operation except account creation goes through here first; an
/// unknown ID ends the request with [`AppError::CustomerNotFound`].
pub struct AccountGuard;

impl AccountGuard {
    pub fn resolve<'a>(directory: &'a Directory, cpf: &str) -> Result<&'a Customer, AppError> {
        directory.find_by_cpf(cpf).ok_or_else(|| Self::reject(cpf))
    }

    pub fn resolve_mut<'a>(
        directory: &'a mut Directory,
        cpf: &str,
    ) -> Result<&'a mut Customer, AppError> {
        directory.find_by_cpf_mut(cpf).ok_or_else(|| Self::reject(cpf))
    }

    fn reject(cpf: &str) -> AppError {
        tracing::debug!(cpf, "no customer registered for national id");
        AppError::CustomerNotFound(cpf.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_customer() {
        let mut directory = Directory::new();
        directory.create("111", "Ana");

        let customer = AccountGuard::resolve(&directory, "111").unwrap();
        assert_eq!(customer.name, "Ana");
    }

    #[test]
    fn test_resolve_unknown_customer() {
        let directory = Directory::new();

        let result = AccountGuard::resolve(&directory, "999");
        assert_eq!(result, Err(AppError::CustomerNotFound("999".into())));
    }

    #[test]
    fn test_resolve_mut_unknown_customer() {
        let mut directory = Directory::new();
        directory.create("111", "Ana");

        assert!(matches!(
            AccountGuard::resolve_mut(&mut directory, ""),
            Err(AppError::CustomerNotFound(_))
        ));
    }
}
