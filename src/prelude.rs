//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and functions.
//
// Usage:
//   use aetheric_bridge::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Bridge state and accessors
pub use crate::core::{
    asset_bundle, bridge, storage_root, AssetBundleHandle, BridgeState, StorageRoot, UserPaths,
};

// Bundled assets
pub use crate::core::assets::{open_asset, AssetSource};

// Errors and startup signalling
pub use crate::core::platform_bridge::{
    startup_channel, BridgeError, BridgeEvent, Resource, StartupGate, StartupStatus,
};

// Host shim
pub use crate::platform::{HostContext, ShimBuilder, StartupVariant};
