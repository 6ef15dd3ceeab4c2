//=========================================================================
// Android Hosts
//=========================================================================
//
// - `jni_entry`: exports called by a Java activity
// - `native_activity`: HostContext over android-activity's AndroidApp
// - `assets`: AssetSource over the NDK asset manager
//
//=========================================================================

pub mod assets;
pub mod jni_entry;
pub mod native_activity;
