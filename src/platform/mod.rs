//=========================================================================
// Platform Subsystem
//
// Host-facing side of the bridge.
//
// Architecture:
// ```text
//  Host (main/UI thread)              Engine (any thread)
//  ┌──────────────────────────┐      ┌──────────────────────┐
//  │  startup callback        │      │  StartupGate         │
//  │   ↓                      │      │   ↓ (Ready)          │
//  │  ResourceAcquisitionShim │      │  bridge()            │
//  │   ├─ host.start()        │      │   ├─ asset_bundle()  │
//  │   ├─ asset bundle  ──────┼──┐   │   └─ storage_root()  │
//  │   ├─ storage root  ──────┼──┤   └──────────────────────┘
//  │   └─ StartupComplete ────┼──┼──────────▲
//  └──────────────────────────┘  └──► BridgeState (write-once)
// ```
//
// Hosts:
// - Java activity: calls the JNI exports in `android::jni_entry`
// - Native activity: `android::native_activity::NativeActivityHost`
// - Anything else (desktop, tests): implement `HostContext`
//
//=========================================================================

//=== Submodules ==========================================================

mod shim;

#[cfg(target_os = "android")]
pub mod android;

//=== Standard Library ====================================================

use std::io;

//=== Internal Imports ====================================================

use crate::core::assets::AssetSource;
use crate::core::resources::AssetBundleHandle;

//=== Public API ==========================================================

pub use shim::{HostContext, ResourceAcquisitionShim, ShimBuilder, StartupReport, StartupVariant};

//=== Asset Bundle Backend ================================================

/// Asset source reading through an installed handle.
#[cfg(target_os = "android")]
pub(crate) fn bundle_source(handle: AssetBundleHandle) -> io::Result<Box<dyn AssetSource>> {
    Ok(Box::new(android::assets::NdkAssets::new(handle)))
}

/// The handle is opaque off Android; callers use `open_asset_from` instead.
#[cfg(not(target_os = "android"))]
pub(crate) fn bundle_source(_handle: AssetBundleHandle) -> io::Result<Box<dyn AssetSource>> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "no asset bundle backend for this target",
    ))
}
