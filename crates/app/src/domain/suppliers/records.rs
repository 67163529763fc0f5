//! Supplier Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Supplier UUID
pub type SupplierUuid = TypedUuid<SupplierRecord>;

/// Supplier Record
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierRecord {
    pub uuid: SupplierUuid,
    pub name: String,
    pub contact: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
