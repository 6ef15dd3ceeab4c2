//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the host shim (JNI activity, native activity, tests)
// and the engine code that consumes installed resources.
//
// Components:
// - `interface`: Resource slots, events and error definitions
// - `startup_gate`: Engine-side readiness signal
//
//=========================================================================

//=== Module Declarations =================================================

pub mod interface;
pub mod startup_gate;

//=== Public API ==========================================================

pub use interface::{BridgeError, BridgeEvent, Resource, StorageRootDefect};
pub use startup_gate::{startup_channel, StartupGate, StartupStatus};
