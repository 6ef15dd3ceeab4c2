//=========================================================================
// Aetheric Bridge — Library Root
//
// Hands host-supplied resources to the native engine at process startup.
//
// Responsibilities:
// - Install the host's asset bundle and storage root exactly once
// - Expose both to engine code for the rest of the process lifetime
// - Fail loudly on out-of-order reads and repeated installs
//
// Typical usage (engine side, after the host shim has run):
// ```no_run
// use aetheric_bridge::core::{storage_root, UserPaths};
//
// let root = storage_root().expect("host installs storage root at startup");
// let paths = UserPaths::prepare(root).unwrap();
// println!("highscores in {}", paths.highscore_dir().display());
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the process-wide bridge state and everything engine code
// reads from it.
//
pub mod core;

//--- Host Modules --------------------------------------------------------
//
// `platform` holds the startup shim and the Android hosts (JNI activity,
// native activity) that drive it.
//
pub mod platform;

pub mod prelude;
