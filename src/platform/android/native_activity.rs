//=========================================================================
// Native Activity Host
//=========================================================================
//
// HostContext over the `AndroidApp` that winit passes to `android_main`.
// android-activity has already attached the activity by the time
// `android_main` runs, so the host's own startup has completed.
//
//=========================================================================

use std::ffi::c_void;

use log::debug;
use winit::platform::android::activity::AndroidApp;

use crate::core::bridge_state;
use crate::core::platform_bridge::BridgeError;
use crate::platform::{HostContext, ShimBuilder, StartupReport, StartupVariant};

/// Native-activity host resources.
pub struct NativeActivityHost {
    app: AndroidApp,
}

impl NativeActivityHost {
    pub fn new(app: AndroidApp) -> Self {
        Self { app }
    }
}

impl HostContext for NativeActivityHost {
    fn start(&mut self) -> Result<(), BridgeError> {
        debug!(target: "platform", "Native activity attached; host startup already complete");
        Ok(())
    }

    fn asset_bundle(&self) -> *mut c_void {
        self.app.asset_manager().ptr().as_ptr().cast()
    }

    fn storage_root(&self) -> Option<String> {
        self.app
            .internal_data_path()
            .and_then(|path| path.to_str().map(str::to_owned))
    }
}

/// Installs the app's resources into the process-wide bridge.
///
/// Call at the top of `android_main`, before building the event loop.
pub fn install_from_android_app(
    app: &AndroidApp,
    variant: StartupVariant,
) -> Result<StartupReport, BridgeError> {
    let mut host = NativeActivityHost::new(app.clone());
    ShimBuilder::new()
        .with_variant(variant)
        .build()
        .on_start(&mut host, bridge_state::bridge())
}
