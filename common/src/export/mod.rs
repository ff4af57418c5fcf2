//! Export core modules shared across CLI and WASM wrappers.

pub mod delivery;

#[cfg(feature = "excel")]
pub mod excel_core;

pub use delivery::{file_name_for, DeliveryPhoto, ShortlistDelivery};
