use crate::domain::Customer;

/// In-memory collection of customers, kept in registration order.
/// National IDs are unique; callers check [`Directory::contains`] before inserting.
#[derive(Debug, Default)]
pub struct Directory {
    customers: Vec<Customer>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new customer. Returns `None` if the national ID is already taken.
    pub fn create(&mut self, cpf: &str, name: &str) -> Option<&Customer> {
        if self.contains(cpf) {
            return None;
        }
        self.customers.push(Customer::new(cpf, name));
        self.customers.last()
    }

    pub fn contains(&self, cpf: &str) -> bool {
        self.customers.iter().any(|c| c.cpf == cpf)
    }

    pub fn find_by_cpf(&self, cpf: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.cpf == cpf)
    }

    pub fn find_by_cpf_mut(&mut self, cpf: &str) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.cpf == cpf)
    }

    /// Remove a customer permanently, returning the removed record.
    pub fn remove(&mut self, cpf: &str) -> Option<Customer> {
        let index = self.customers.iter().position(|c| c.cpf == cpf)?;
        Some(self.customers.remove(index))
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
