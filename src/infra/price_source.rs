//! Locates and loads the price table: the copy bundled into the binary, or a
//! `prices.json` dropped into the user's config directory.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use tracing::{info, warn};

use crate::domain::{PriceTable, PriceTableError};
use crate::util::assets::{asset_bytes, PRICES_JSON};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "Envios";
const APP_NAME: &str = "ShippingCalculator";

pub const OVERRIDE_FILENAME: &str = "prices.json";

#[derive(Clone, Debug, PartialEq)]
pub enum PriceSource {
    Embedded,
    Override(PathBuf),
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceSource::Embedded => f.write_str("bundled price table"),
            PriceSource::Override(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug)]
pub struct LoadedTable {
    pub table: PriceTable,
    pub source: PriceSource,
    /// Set when an override file existed but could not be used.
    pub override_error: Option<PriceTableError>,
}

/// Where an override table would live on this platform.
pub fn override_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(OVERRIDE_FILENAME))
}

pub fn load_price_table() -> Result<LoadedTable, PriceTableError> {
    load_with_override(override_path().as_deref())
}

/// Prefers a readable, valid override file; otherwise falls back to the
/// bundled table and keeps the override's error for the caller to report.
pub fn load_with_override(path: Option<&Path>) -> Result<LoadedTable, PriceTableError> {
    let mut override_error = None;

    if let Some(path) = path.filter(|path| path.exists()) {
        match load_from_path(path) {
            Ok(table) => {
                info!(path = %path.display(), "using price table override");
                return Ok(LoadedTable {
                    table,
                    source: PriceSource::Override(path.to_path_buf()),
                    override_error: None,
                });
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring price table override");
                override_error = Some(err);
            }
        }
    }

    let table = load_embedded()?;
    Ok(LoadedTable {
        table,
        source: PriceSource::Embedded,
        override_error,
    })
}

pub fn load_from_path(path: &Path) -> Result<PriceTable, PriceTableError> {
    let content = fs::read_to_string(path)?;
    PriceTable::from_json(&content)
}

pub fn load_embedded() -> Result<PriceTable, PriceTableError> {
    let bytes =
        asset_bytes(PRICES_JSON).ok_or_else(|| PriceTableError::MissingAsset(PRICES_JSON.to_string()))?;
    let content = String::from_utf8_lossy(&bytes);
    PriceTable::from_json(&content)
}
