//! Loading of external resources.

pub mod price_source;
