//=========================================================================
// Bridge State
//=========================================================================
//
// Process-wide, write-once holder for host-supplied resources.
//
// Lifecycle:
//   library load  → both slots unset (`BridgeState::new()` is const)
//   host startup  → each slot set exactly once by the shim
//   engine run    → unbounded reads from any thread
//   process exit  → implicit teardown, the asset store is not released
//
// `OnceLock` publishes with release/acquire ordering, so a reader that
// sees a slot set also sees the fully written value.
//
//=========================================================================

//=== Standard Library ====================================================

use std::sync::OnceLock;

//=== External Dependencies ===============================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{BridgeError, Resource};
use crate::core::resources::{AssetBundleHandle, StorageRoot};

//=== BridgeState =========================================================

/// Write-once slots for the asset bundle and the storage root.
///
/// Engine code normally goes through the global [`bridge()`] instance;
/// separate instances exist for hosts that embed several engines and for
/// tests.
#[derive(Debug, Default)]
pub struct BridgeState {
    asset_bundle: OnceLock<AssetBundleHandle>,
    storage_root: OnceLock<StorageRoot>,
}

impl BridgeState {
    /// Creates a state with both slots unset.
    pub const fn new() -> Self {
        Self {
            asset_bundle: OnceLock::new(),
            storage_root: OnceLock::new(),
        }
    }

    //--- Installation -----------------------------------------------------

    /// Installs the asset bundle handle.
    ///
    /// # Errors
    ///
    /// [`BridgeError::AlreadyInstalled`] if a handle is already present.
    /// The stored handle is left untouched.
    pub fn install_asset_bundle(&self, handle: AssetBundleHandle) -> Result<(), BridgeError> {
        if self.asset_bundle.set(handle).is_err() {
            return Err(Self::reject_reinstall(Resource::AssetBundle));
        }

        info!(target: "bridge", "Asset bundle installed ({:p})", handle.as_ptr());
        Ok(())
    }

    /// Validates and installs the storage root.
    ///
    /// The path is copied; the caller's string is not retained.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::AlreadyInstalled`] if a root is already present
    /// - [`BridgeError::InvalidStorageRoot`] if the path fails validation
    pub fn install_storage_root(&self, path: &str) -> Result<(), BridgeError> {
        if self.storage_root.get().is_some() {
            return Err(Self::reject_reinstall(Resource::StorageRoot));
        }

        let root = StorageRoot::validate(path).map_err(|e| {
            error!(target: "bridge", "Rejected storage root: {}", e);
            e
        })?;

        if self.storage_root.set(root).is_err() {
            return Err(Self::reject_reinstall(Resource::StorageRoot));
        }

        info!(target: "bridge", "Storage root installed ({})", path);
        Ok(())
    }

    fn reject_reinstall(resource: Resource) -> BridgeError {
        error!(
            target: "bridge",
            "Rejected second {} installation; host lifecycle re-ran startup without a fresh process",
            resource
        );
        BridgeError::AlreadyInstalled(resource)
    }

    //--- Access -----------------------------------------------------------

    /// Returns the installed asset bundle handle.
    ///
    /// # Errors
    ///
    /// [`BridgeError::Uninitialized`] if called before installation.
    pub fn asset_bundle(&self) -> Result<AssetBundleHandle, BridgeError> {
        self.asset_bundle
            .get()
            .copied()
            .ok_or_else(|| Self::reject_read(Resource::AssetBundle))
    }

    /// Returns the installed storage root.
    ///
    /// # Errors
    ///
    /// [`BridgeError::Uninitialized`] if called before installation, or if
    /// the host never installs one.
    pub fn storage_root(&self) -> Result<&StorageRoot, BridgeError> {
        self.storage_root
            .get()
            .ok_or_else(|| Self::reject_read(Resource::StorageRoot))
    }

    fn reject_read(resource: Resource) -> BridgeError {
        error!(target: "bridge", "{} read before installation", resource);
        BridgeError::Uninitialized(resource)
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_installed(&self, resource: Resource) -> bool {
        match resource {
            Resource::AssetBundle => self.asset_bundle.get().is_some(),
            Resource::StorageRoot => self.storage_root.get().is_some(),
        }
    }

    /// True once both slots are set.
    pub fn is_ready(&self) -> bool {
        self.is_installed(Resource::AssetBundle) && self.is_installed(Resource::StorageRoot)
    }
}

//=== Global Instance =====================================================

static BRIDGE: BridgeState = BridgeState::new();

/// The process-wide bridge state.
pub fn bridge() -> &'static BridgeState {
    &BRIDGE
}

/// Installs the asset bundle into the process-wide state.
pub fn install_asset_bundle(handle: AssetBundleHandle) -> Result<(), BridgeError> {
    BRIDGE.install_asset_bundle(handle)
}

/// Installs the storage root into the process-wide state.
pub fn install_storage_root(path: &str) -> Result<(), BridgeError> {
    BRIDGE.install_storage_root(path)
}

/// Reads the process-wide asset bundle handle.
pub fn asset_bundle() -> Result<AssetBundleHandle, BridgeError> {
    BRIDGE.asset_bundle()
}

/// Reads the process-wide storage root.
pub fn storage_root() -> Result<&'static StorageRoot, BridgeError> {
    BRIDGE.storage_root()
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::c_void;
    use std::sync::Arc;
    use std::thread;

    fn handle(slot: &'static u8) -> AssetBundleHandle {
        AssetBundleHandle::from_raw(slot as *const u8 as *mut c_void).unwrap()
    }

    static H1: u8 = 1;
    static H2: u8 = 2;

    //=====================================================================
    // Startup Sequence Tests
    //=====================================================================

    #[test]
    fn full_startup_returns_installed_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();
        let state = BridgeState::new();

        state.install_asset_bundle(handle(&H1)).unwrap();
        state.install_storage_root(path).unwrap();

        assert_eq!(state.asset_bundle().unwrap(), handle(&H1));
        assert_eq!(state.storage_root().unwrap().as_str(), path);
        assert!(state.is_ready());
    }

    #[test]
    fn asset_only_startup_leaves_storage_uninitialized() {
        let state = BridgeState::new();

        state.install_asset_bundle(handle(&H1)).unwrap();

        assert_eq!(state.asset_bundle().unwrap(), handle(&H1));
        assert!(matches!(
            state.storage_root(),
            Err(BridgeError::Uninitialized(Resource::StorageRoot))
        ));
        assert!(state.is_installed(Resource::AssetBundle));
        assert!(!state.is_ready());
    }

    #[test]
    fn reads_before_install_are_rejected() {
        let state = BridgeState::new();

        assert!(matches!(
            state.storage_root(),
            Err(BridgeError::Uninitialized(Resource::StorageRoot))
        ));
        assert!(matches!(
            state.asset_bundle(),
            Err(BridgeError::Uninitialized(Resource::AssetBundle))
        ));
    }

    //=====================================================================
    // Single-Write Tests
    //=====================================================================

    #[test]
    fn second_asset_install_is_rejected() {
        let state = BridgeState::new();

        state.install_asset_bundle(handle(&H1)).unwrap();
        let second = state.install_asset_bundle(handle(&H2));

        assert!(matches!(
            second,
            Err(BridgeError::AlreadyInstalled(Resource::AssetBundle))
        ));
        assert_eq!(state.asset_bundle().unwrap(), handle(&H1));
    }

    #[test]
    fn second_storage_install_is_rejected() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let state = BridgeState::new();

        state.install_storage_root(first.path().to_str().unwrap()).unwrap();
        let result = state.install_storage_root(second.path().to_str().unwrap());

        assert!(matches!(
            result,
            Err(BridgeError::AlreadyInstalled(Resource::StorageRoot))
        ));
        assert_eq!(state.storage_root().unwrap().as_path(), first.path());
    }

    #[test]
    fn second_storage_install_rejected_even_if_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let state = BridgeState::new();

        state.install_storage_root(dir.path().to_str().unwrap()).unwrap();

        assert!(matches!(
            state.install_storage_root(""),
            Err(BridgeError::AlreadyInstalled(Resource::StorageRoot))
        ));
    }

    #[test]
    fn invalid_storage_root_leaves_slot_unset() {
        let state = BridgeState::new();

        let result = state.install_storage_root("relative/files");

        assert!(matches!(result, Err(BridgeError::InvalidStorageRoot { .. })));
        assert!(!state.is_installed(Resource::StorageRoot));

        let dir = tempfile::tempdir().unwrap();
        state.install_storage_root(dir.path().to_str().unwrap()).unwrap();
        assert!(state.is_installed(Resource::StorageRoot));
    }

    //=====================================================================
    // Visibility Tests
    //=====================================================================

    #[test]
    fn installed_values_visible_to_other_threads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap().to_string();
        let state = Arc::new(BridgeState::new());

        state.install_asset_bundle(handle(&H1)).unwrap();
        state.install_storage_root(&path).unwrap();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    (
                        state.asset_bundle().unwrap(),
                        state.storage_root().unwrap().as_str().to_string(),
                    )
                })
            })
            .collect();

        for reader in readers {
            let (bundle, root) = reader.join().unwrap();
            assert_eq!(bundle, handle(&H1));
            assert_eq!(root, path);
        }
    }

    //=====================================================================
    // Global Instance Test
    //=====================================================================

    // The only test touching the process-wide instance.
    #[test]
    fn global_bridge_follows_install_once_contract() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();

        assert!(matches!(
            storage_root(),
            Err(BridgeError::Uninitialized(Resource::StorageRoot))
        ));

        install_asset_bundle(handle(&H1)).unwrap();
        install_storage_root(path).unwrap();

        assert!(install_asset_bundle(handle(&H2)).is_err());
        assert_eq!(asset_bundle().unwrap(), handle(&H1));
        assert_eq!(storage_root().unwrap().as_str(), path);
        assert!(bridge().is_ready());
    }
}
