//! Customer Repository

use super::{BaseRepository, RepoError, RepoResult, Repository};
use crate::db::JsonStore;
use shared::models::{Customer, CustomerCreate, CustomerUpdate};
use shared::util::new_id;

#[derive(Debug, Clone)]
pub struct CustomerRepository {
    base: BaseRepository,
}

impl CustomerRepository {
    pub fn new(store: JsonStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }
}

impl Repository<Customer, CustomerCreate, CustomerUpdate> for CustomerRepository {
    fn find_all(&self) -> RepoResult<Vec<Customer>> {
        Ok(self.base.store().load())
    }

    fn find_by_id(&self, id: &str) -> RepoResult<Option<Customer>> {
        let customer = self.base.store().find::<Customer>(id);
        if customer.is_none() {
            tracing::warn!(customer_id = %id, "Customer not found");
        }
        Ok(customer)
    }

    fn create(&self, data: CustomerCreate) -> RepoResult<Customer> {
        let customer = Customer::new(new_id(), data);
        self.base.store().insert(&customer);
        tracing::info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }

    fn update(&self, id: &str, data: CustomerUpdate) -> RepoResult<Customer> {
        self.base
            .store()
            .modify::<Customer>(id, |c| c.apply_update(data))
            .ok_or_else(|| {
                tracing::warn!(customer_id = %id, "Customer not found");
                RepoError::NotFound(format!("Customer {id} not found"))
            })
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        if !self.base.store().remove::<Customer>(id) {
            tracing::warn!(customer_id = %id, "Customer not found");
            return Ok(false);
        }
        tracing::info!(customer_id = %id, "Customer deleted");
        Ok(true)
    }
}
