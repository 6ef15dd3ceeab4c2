//=========================================================================
// Bundled Assets
//=========================================================================
//
// Read-only access to the host's asset bundle.
//
// Bundled assets live inside the application package and can never be
// written. Write modes are refused before the asset store is touched, so
// callers fall back to a path under the storage root instead.
//
//=========================================================================

//=== Standard Library ====================================================

use std::io::{self, Read};

//=== Internal Dependencies ===============================================

use crate::core::bridge_state::BridgeState;
use crate::core::platform_bridge::BridgeError;

//=== AccessMode ==========================================================

/// File access mode, parsed from a C-style mode string (`"r"`, `"wb"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Write,
}

impl AccessMode {
    /// Any mode that can modify the file (`w`, `a`, or `+`) is a write mode.
    pub fn parse(mode: &str) -> Self {
        if mode.starts_with('w') || mode.starts_with('a') || mode.contains('+') {
            Self::Write
        } else {
            Self::Read
        }
    }
}

//=== AssetSource =========================================================

/// A store of bundled assets addressed by relative name.
pub trait AssetSource {
    /// Opens `name` for streaming reads.
    fn open(&self, name: &str) -> io::Result<Box<dyn Read>>;
}

//=== Open Functions ======================================================

/// Opens a bundled asset from an explicit source.
///
/// # Errors
///
/// `PermissionDenied` for write modes; otherwise whatever the source
/// reports (typically `NotFound`).
pub fn open_asset_from(
    source: &dyn AssetSource,
    name: &str,
    mode: &str,
) -> io::Result<Box<dyn Read>> {
    refuse_write(name, mode)?;
    source.open(name)
}

/// Opens a bundled asset through the asset bundle installed in `state`.
///
/// # Errors
///
/// - `PermissionDenied` for write modes
/// - `NotFound` wrapping [`BridgeError::Uninitialized`] if no bundle is installed
/// - `Unsupported` on targets without an asset bundle backend
pub fn open_asset_in(state: &BridgeState, name: &str, mode: &str) -> io::Result<Box<dyn Read>> {
    refuse_write(name, mode)?;

    let handle = state.asset_bundle().map_err(into_io)?;
    let source = crate::platform::bundle_source(handle)?;
    open_asset_from(source.as_ref(), name, mode)
}

/// Opens a bundled asset through the process-wide bridge.
pub fn open_asset(name: &str, mode: &str) -> io::Result<Box<dyn Read>> {
    open_asset_in(crate::core::bridge_state::bridge(), name, mode)
}

fn refuse_write(name: &str, mode: &str) -> io::Result<()> {
    if AccessMode::parse(mode) == AccessMode::Write {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("bundled asset {:?} is read-only", name),
        ));
    }
    Ok(())
}

fn into_io(err: BridgeError) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, err)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Cursor;

    struct MemoryAssets(HashMap<&'static str, &'static [u8]>);

    impl AssetSource for MemoryAssets {
        fn open(&self, name: &str) -> io::Result<Box<dyn Read>> {
            self.0
                .get(name)
                .map(|bytes| Box::new(Cursor::new(*bytes)) as Box<dyn Read>)
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name.to_string()))
        }
    }

    fn bundle() -> MemoryAssets {
        MemoryAssets(HashMap::from([("data/settings.ini", b"sound=1".as_slice())]))
    }

    #[test]
    fn parse_recognises_write_modes() {
        assert_eq!(AccessMode::parse("r"), AccessMode::Read);
        assert_eq!(AccessMode::parse("rb"), AccessMode::Read);
        assert_eq!(AccessMode::parse("w"), AccessMode::Write);
        assert_eq!(AccessMode::parse("ab"), AccessMode::Write);
        assert_eq!(AccessMode::parse("r+"), AccessMode::Write);
    }

    #[test]
    fn read_mode_streams_asset() {
        let mut reader = open_asset_from(&bundle(), "data/settings.ini", "r").unwrap();
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();

        assert_eq!(text, "sound=1");
    }

    #[test]
    fn write_mode_is_refused() {
        let result = open_asset_from(&bundle(), "data/settings.ini", "w");

        assert_eq!(result.err().unwrap().kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn missing_asset_is_not_found() {
        let result = open_asset_from(&bundle(), "levels/999.wzp", "r");

        assert_eq!(result.err().unwrap().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn open_without_bundle_reports_uninitialized() {
        let state = BridgeState::new();

        let err = open_asset_in(&state, "data/settings.ini", "r").err().unwrap();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("asset bundle accessed before installation"));
    }

    #[test]
    fn write_refused_even_without_bundle() {
        let state = BridgeState::new();

        let err = open_asset_in(&state, "data/settings.ini", "w").err().unwrap();

        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn refuse_write_passes_read_modes() {
        assert!(refuse_write("data/settings.ini", "rb").is_ok());
        assert_eq!(
            refuse_write("data/settings.ini", "a+").err().unwrap().kind(),
            io::ErrorKind::PermissionDenied
        );
    }
}
