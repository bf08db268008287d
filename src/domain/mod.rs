//! Pricing rules for the shipping calculator live here.

pub mod catalog;
pub mod price_table;
pub mod resolver;
pub mod selection;
pub mod text;

pub use catalog::Catalog;
pub use price_table::{PriceTable, PriceTableError, Quote};
pub use resolver::{resolve, resolve_price, Resolution};
pub use selection::{Choice, DocumentType, FuelOption, Region, SelectionState, ShipmentDirection};
