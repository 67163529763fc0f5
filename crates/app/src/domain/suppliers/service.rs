//! Suppliers service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::suppliers::{
        data::NewSupplier, errors::SuppliersServiceError, records::SupplierRecord,
        repository::PgSuppliersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgSuppliersService {
    db: Db,
    repository: PgSuppliersRepository,
}

impl PgSuppliersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgSuppliersRepository::new(),
        }
    }
}

#[async_trait]
impl SuppliersService for PgSuppliersService {
    async fn list_suppliers(&self) -> Result<Vec<SupplierRecord>, SuppliersServiceError> {
        let mut tx = self.db.begin().await?;

        let suppliers = self.repository.list_suppliers(&mut tx).await?;

        tx.commit().await?;

        Ok(suppliers)
    }

    #[tracing::instrument(
        name = "suppliers.service.create_supplier",
        skip(self, supplier),
        fields(supplier_uuid = %supplier.uuid),
        err
    )]
    async fn create_supplier(
        &self,
        supplier: NewSupplier,
    ) -> Result<SupplierRecord, SuppliersServiceError> {
        if supplier.name.trim().is_empty() {
            return Err(SuppliersServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_supplier(&mut tx, supplier).await?;

        tx.commit().await?;

        info!(name = %created.name, "supplier created");

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait SuppliersService: Send + Sync {
    /// Retrieves all suppliers, ordered by name.
    async fn list_suppliers(&self) -> Result<Vec<SupplierRecord>, SuppliersServiceError>;

    /// Registers a new supplier.
    async fn create_supplier(
        &self,
        supplier: NewSupplier,
    ) -> Result<SupplierRecord, SuppliersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::suppliers::records::SupplierUuid, test::TestContext};

    use super::*;

    fn supplier(name: &str) -> NewSupplier {
        NewSupplier {
            uuid: SupplierUuid::new(),
            name: name.to_string(),
            contact: "+91 98450 00000".to_string(),
        }
    }

    #[tokio::test]
    async fn created_suppliers_are_listed_by_name() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.suppliers.create_supplier(supplier("Paper Mills")).await?;
        ctx.suppliers.create_supplier(supplier("Ink Works")).await?;

        let suppliers = ctx.suppliers.list_suppliers().await?;

        let names: Vec<&str> = suppliers.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, vec!["Ink Works", "Paper Mills"]);
        assert_eq!(suppliers[0].contact, "+91 98450 00000");

        Ok(())
    }

    #[tokio::test]
    async fn supplier_without_name_is_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx.suppliers.create_supplier(supplier(" ")).await;

        assert!(
            matches!(result, Err(SuppliersServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }
}
