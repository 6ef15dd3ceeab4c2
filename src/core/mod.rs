//=========================================================================
// Core Bridge State
//
// Host-agnostic half of the bridge: the write-once state, the value types
// it holds, and the accessors engine code uses once startup is done.
//
// Responsibilities:
// - Hold the asset bundle handle and storage root for the process
// - Reject repeated installation and uninitialized reads
// - Resolve user directories and bundled assets from installed values
// - Signal installation progress to engine threads
//
// Notes:
// Nothing here knows which host installed the values. Host-specific
// acquisition lives in `crate::platform`.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod assets;
pub mod bridge_state;
pub mod platform_bridge;
pub mod resources;
pub mod user_paths;

//=== Public API ==========================================================

pub use bridge_state::{
    asset_bundle, bridge, install_asset_bundle, install_storage_root, storage_root, BridgeState,
};
pub use resources::{AssetBundleHandle, StorageRoot};
pub use user_paths::UserPaths;
