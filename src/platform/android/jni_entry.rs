//=========================================================================
// JNI Entry Points
//=========================================================================
//
// Native half of the Java activity shim (`com.aetheric.bridge.BridgeActivity`).
// The activity calls these from its startup callback, after its own
// super.onCreate(), in this order:
//
//   installAssetBundle(getAssets())
//   installStorageRoot(getFilesDir().getAbsolutePath())   [optional]
//
// Rejections are logged and rethrown into Java so a lifecycle bug
// surfaces in the host instead of being swallowed.
//
//=========================================================================

//=== Standard Library ====================================================

use std::sync::OnceLock;

//=== External Dependencies ===============================================

use jni::objects::{GlobalRef, JObject, JString};
use jni::JNIEnv;
use log::error;

//=== Internal Dependencies ===============================================

use crate::core::bridge_state;
use crate::core::platform_bridge::BridgeError;
use crate::core::resources::AssetBundleHandle;

/// Keeps the Java AssetManager reachable while native code uses its
/// AAssetManager. Set once, alongside the asset bundle slot.
static ASSET_MANAGER_REF: OnceLock<GlobalRef> = OnceLock::new();

//=== Exports =============================================================

/// `native void installAssetBundle(AssetManager manager)`
#[no_mangle]
pub extern "system" fn Java_com_aetheric_bridge_BridgeActivity_installAssetBundle<'local>(
    mut env: JNIEnv<'local>,
    _activity: JObject<'local>,
    asset_manager: JObject<'local>,
) {
    if asset_manager.is_null() {
        throw(&mut env, &BridgeError::NullAssetBundle);
        return;
    }

    // Pin before installing so the handle never outlives its Java owner.
    let pinned = match env.new_global_ref(&asset_manager) {
        Ok(global) => global,
        Err(e) => {
            error!(target: "platform", "Cannot pin AssetManager: {}", e);
            let err = BridgeError::HostStartup(format!("cannot pin AssetManager: {}", e));
            throw(&mut env, &err);
            return;
        }
    };

    // SAFETY: `env` is the current thread's JNIEnv and `asset_manager` is a
    // live, non-null local reference for the duration of this call.
    let raw = unsafe {
        ndk_sys::AAssetManager_fromJava(env.get_raw().cast(), asset_manager.as_raw().cast())
    };

    let result = AssetBundleHandle::from_raw(raw.cast()).and_then(bridge_state::install_asset_bundle);
    if let Err(e) = result {
        throw(&mut env, &e);
        return;
    }

    if ASSET_MANAGER_REF.set(pinned).is_err() {
        error!(target: "platform", "AssetManager already pinned; keeping the first reference");
    }
}

/// `native void installStorageRoot(String storageRoot)`
#[no_mangle]
pub extern "system" fn Java_com_aetheric_bridge_BridgeActivity_installStorageRoot<'local>(
    mut env: JNIEnv<'local>,
    _activity: JObject<'local>,
    storage_root: JString<'local>,
) {
    // Copied out of the JVM; the Java string is not retained.
    let path: String = match env.get_string(&storage_root) {
        Ok(s) => s.into(),
        Err(e) => {
            error!(target: "platform", "Unreadable storage root string: {}", e);
            let err = BridgeError::HostStartup(e.to_string());
            throw(&mut env, &err);
            return;
        }
    };

    if let Err(e) = bridge_state::install_storage_root(&path) {
        throw(&mut env, &e);
    }
}

//=== Helpers =============================================================

fn throw(env: &mut JNIEnv, err: &BridgeError) {
    let class = match err {
        BridgeError::AlreadyInstalled(_) | BridgeError::Uninitialized(_) => {
            "java/lang/IllegalStateException"
        }
        _ => "java/lang/IllegalArgumentException",
    };

    error!(target: "platform", "Bridge installation failed: {}", err);
    if let Err(e) = env.throw_new(class, err.to_string()) {
        error!(target: "platform", "Could not raise {}: {}", class, e);
    }
}
