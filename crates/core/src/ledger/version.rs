//! Version marker written at startup for external liveness probes.

use std::fs;

use super::error::LedgerError;
use super::store::LedgerPaths;

/// Product name recorded in the marker.
pub const PRODUCT: &str = "tallybox";
/// Build number recorded in the marker.
pub const BUILD: u32 = 4;
/// Human-readable release version.
pub const VERSION: &str = "1.1";

/// Marker contents, `"<product>:<build>"`.
#[must_use]
pub fn version_marker() -> String {
    format!("{PRODUCT}:{BUILD}")
}

/// Overwrites `version.txt` with the marker. Nothing in-process reads it back.
pub fn write_version_marker(paths: &LedgerPaths) -> Result<(), LedgerError> {
    fs::write(&paths.version, version_marker()).map_err(|e| LedgerError::io(&paths.version, e))
}
