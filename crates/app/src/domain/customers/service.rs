//! Customers service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::customers::{
        data::NewCustomer,
        errors::CustomersServiceError,
        records::{CustomerRecord, CustomerUuid},
        repository::PgCustomersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCustomersRepository::new(),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let customers = self.repository.list_customers(&mut tx).await?;

        tx.commit().await?;

        Ok(customers)
    }

    async fn get_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let customer = self.repository.get_customer(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(customer)
    }

    #[tracing::instrument(
        name = "customers.service.create_customer",
        skip(self, customer),
        fields(customer_uuid = %customer.uuid),
        err
    )]
    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        if customer.name.trim().is_empty() {
            return Err(CustomersServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_customer(&mut tx, customer).await?;

        tx.commit().await?;

        info!(name = %created.name, "customer created");

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Retrieves all customers, ordered by name.
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError>;

    /// Retrieve a single customer.
    async fn get_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Registers a new customer.
    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError>;
}
