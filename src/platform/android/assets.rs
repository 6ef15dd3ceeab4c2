//=========================================================================
// NDK Asset Source
//=========================================================================
//
// Streams bundled assets out of the APK through the installed
// AAssetManager. The manager is owned by the host; dropping NdkAssets
// never releases it. Each opened asset is closed when its reader drops.
//
//=========================================================================

use std::ffi::CString;
use std::io::{self, Read};

use ndk::asset::AssetManager;

use crate::core::assets::AssetSource;
use crate::core::resources::AssetBundleHandle;

/// [`AssetSource`] over the host's NDK asset manager.
pub struct NdkAssets {
    manager: AssetManager,
}

impl NdkAssets {
    pub fn new(handle: AssetBundleHandle) -> Self {
        let ptr = handle.as_non_null().cast::<ndk_sys::AAssetManager>();
        // SAFETY: the installer only accepts pointers obtained from
        // AAssetManager_fromJava or android-activity, which stay valid for
        // the process lifetime.
        let manager = unsafe { AssetManager::from_ptr(ptr) };
        Self { manager }
    }
}

impl AssetSource for NdkAssets {
    fn open(&self, name: &str) -> io::Result<Box<dyn Read>> {
        let filename = CString::new(name).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "asset name contains a NUL byte")
        })?;

        self.manager
            .open(&filename)
            .map(|asset| Box::new(asset) as Box<dyn Read>)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no bundled asset {:?}", name)))
    }
}
