//! Cell-phone inventory domain module.
//!
//! This crate contains the phone record, its value objects, and the
//! IMEI-keyed record store. Pure domain logic: no console, no storage.

pub mod imei;
pub mod phone;
pub mod price;
pub mod store;

pub use imei::Imei;
pub use phone::{
    CellPhone, Condition, PhoneDetails, STANDARD_SPEC_ATTRIBUTES, Specifications, split_list,
};
pub use price::Price;
pub use store::InventoryManager;
