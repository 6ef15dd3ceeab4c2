//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Host-to-core interface types (resources, events and errors).
//
// Defines the contract between the host shim that installs resources and
// the engine code that later consumes them.
//
//=========================================================================

//=== Standard Library ====================================================

use std::fmt;
use std::io;
use std::path::PathBuf;

//=== Resource ============================================================

/// A host-supplied resource slot in the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// The host's read-only bundled-asset store.
    AssetBundle,

    /// The writable private storage directory.
    StorageRoot,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetBundle => write!(f, "asset bundle"),
            Self::StorageRoot => write!(f, "storage root"),
        }
    }
}

//=== BridgeEvent =========================================================

/// Events sent from the startup shim to engine threads via MPSC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    /// One resource slot was filled.
    Installed(Resource),

    /// The shim finished its startup sequence. Nothing more will be installed.
    StartupComplete,
}

//=== StorageRootDefect ===================================================

/// Why a host-supplied storage root path was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageRootDefect {
    Empty,
    NotAbsolute,
    Missing,
    NotADirectory,
    ReadOnly,
}

impl fmt::Display for StorageRootDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Empty => "path is empty",
            Self::NotAbsolute => "path is not absolute",
            Self::Missing => "directory does not exist",
            Self::NotADirectory => "path is not a directory",
            Self::ReadOnly => "directory is not writable",
        };
        f.write_str(reason)
    }
}

//=== BridgeError =========================================================

/// Bridge installation and access errors.
///
/// `Uninitialized` and `AlreadyInstalled` always indicate a startup
/// ordering bug in the host or the engine, never a transient condition.
#[derive(Debug)]
pub enum BridgeError {
    /// A resource was read before its installer ran.
    Uninitialized(Resource),

    /// A resource installer ran a second time in this process.
    AlreadyInstalled(Resource),

    /// The host handed over a null asset store.
    NullAssetBundle,

    /// The host handed over an unusable storage directory.
    InvalidStorageRoot {
        path: String,
        defect: StorageRootDefect,
    },

    /// The host's own startup procedure failed.
    HostStartup(String),

    /// The startup notifier was dropped before signalling completion.
    StartupAborted,

    /// A filesystem operation under the storage root failed.
    Io { path: PathBuf, source: io::Error },
}

//--- Trait Implementations -----------------------------------------------

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized(r) => write!(f, "{} accessed before installation", r),
            Self::AlreadyInstalled(r) => write!(f, "{} already installed", r),
            Self::NullAssetBundle => write!(f, "Host supplied a null asset bundle"),
            Self::InvalidStorageRoot { path, defect } => {
                write!(f, "Invalid storage root {:?}: {}", path, defect)
            }
            Self::HostStartup(e) => write!(f, "Host startup failed: {}", e),
            Self::StartupAborted => write!(f, "Startup aborted before completion"),
            Self::Io { path, source } => write!(f, "I/O error at {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_names_the_resource() {
        let err = BridgeError::Uninitialized(Resource::StorageRoot);
        assert_eq!(err.to_string(), "storage root accessed before installation");

        let err = BridgeError::AlreadyInstalled(Resource::AssetBundle);
        assert_eq!(err.to_string(), "asset bundle already installed");
    }

    #[test]
    fn display_includes_storage_defect() {
        let err = BridgeError::InvalidStorageRoot {
            path: "files".to_string(),
            defect: StorageRootDefect::NotAbsolute,
        };
        assert_eq!(err.to_string(), "Invalid storage root \"files\": path is not absolute");
    }

    #[test]
    fn io_error_exposes_source() {
        let err = BridgeError::Io {
            path: PathBuf::from("/data/files/dlc"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(BridgeError::NullAssetBundle.source().is_none());
    }
}
