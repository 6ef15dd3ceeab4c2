//=========================================================================
// Bridge Resources
//=========================================================================
//
// Value types for the two host-supplied resources.
//
// - AssetBundleHandle: non-owning pointer to the host's asset store
// - StorageRoot: owned copy of the host's private storage path
//
//=========================================================================

//=== Standard Library ====================================================

use std::ffi::c_void;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::ptr::NonNull;

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{BridgeError, StorageRootDefect};

//=== AssetBundleHandle ===================================================

/// Opaque, non-owning reference to the host's bundled-asset store.
///
/// The host owns the store and keeps it alive for the whole process. The
/// bridge never releases or duplicates it; copying the handle copies the
/// pointer only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetBundleHandle(NonNull<c_void>);

// SAFETY: the store is read-only and outlives every thread of the process.
unsafe impl Send for AssetBundleHandle {}
unsafe impl Sync for AssetBundleHandle {}

impl AssetBundleHandle {
    /// Wraps a raw host pointer, rejecting null.
    pub fn from_raw(ptr: *mut c_void) -> Result<Self, BridgeError> {
        NonNull::new(ptr).map(Self).ok_or(BridgeError::NullAssetBundle)
    }

    pub fn as_ptr(&self) -> *mut c_void {
        self.0.as_ptr()
    }

    pub fn as_non_null(&self) -> NonNull<c_void> {
        self.0
    }
}

//=== StorageRoot =========================================================

/// Absolute, existing, writable directory owned by the process.
///
/// Holds the host string verbatim: [`StorageRoot::as_str`] returns exactly
/// what was validated, with no normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageRoot {
    raw: String,
}

impl StorageRoot {
    /// Checks the host's guarantees and takes an owned copy of `path`.
    ///
    /// # Errors
    ///
    /// [`BridgeError::InvalidStorageRoot`] naming the first failed check.
    pub fn validate(path: &str) -> Result<Self, BridgeError> {
        let reject = |defect| BridgeError::InvalidStorageRoot {
            path: path.to_string(),
            defect,
        };

        if path.is_empty() {
            return Err(reject(StorageRootDefect::Empty));
        }
        if !Path::new(path).is_absolute() {
            return Err(reject(StorageRootDefect::NotAbsolute));
        }

        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(reject(StorageRootDefect::Missing))
            }
            Err(source) => {
                return Err(BridgeError::Io {
                    path: PathBuf::from(path),
                    source,
                })
            }
        };

        if !metadata.is_dir() {
            return Err(reject(StorageRootDefect::NotADirectory));
        }
        if metadata.permissions().readonly() {
            return Err(reject(StorageRootDefect::ReadOnly));
        }

        // Mode bits say nothing about read-only mounts or foreign owners.
        // Creating (and dropping) an unlinked temp file proves this process
        // can write here.
        if let Err(e) = tempfile::tempfile_in(path) {
            warn!(target: "bridge", "Write check failed in {}: {}", path, e);
            return Err(reject(StorageRootDefect::ReadOnly));
        }

        Ok(Self {
            raw: path.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.raw)
    }

    /// Resolves a read/write file path under the root.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.as_path().join(relative)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
