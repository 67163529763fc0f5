//! Suppliers Data

use crate::domain::suppliers::records::SupplierUuid;

/// New Supplier Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSupplier {
    pub uuid: SupplierUuid,
    pub name: String,

    /// Free-form contact details, such as a phone number or address.
    pub contact: String,
}
