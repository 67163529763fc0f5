//! Suppliers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::suppliers::{
    data::NewSupplier,
    records::{SupplierRecord, SupplierUuid},
};

const LIST_SUPPLIERS_SQL: &str = include_str!("sql/list_suppliers.sql");
const CREATE_SUPPLIER_SQL: &str = include_str!("sql/create_supplier.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSuppliersRepository;

impl PgSuppliersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_suppliers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<SupplierRecord>, sqlx::Error> {
        query_as::<Postgres, SupplierRecord>(LIST_SUPPLIERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_supplier(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        supplier: NewSupplier,
    ) -> Result<SupplierRecord, sqlx::Error> {
        query_as::<Postgres, SupplierRecord>(CREATE_SUPPLIER_SQL)
            .bind(supplier.uuid.into_uuid())
            .bind(supplier.name)
            .bind(supplier.contact)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for SupplierRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: SupplierUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            contact: row.try_get("contact")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
