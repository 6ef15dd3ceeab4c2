//=========================================================================
// Resource Acquisition Shim
//=========================================================================
//
// Runs inside the host's startup callback and forwards host resources
// into a BridgeState in a fixed order:
//
//   host.start()          (host's own setup must finish first)
//     ↓
//   install asset bundle
//     ↓
//   install storage root  (AssetsAndStorage variant only)
//     ↓
//   BridgeEvent::StartupComplete
//
// Engine code must not assume both resources exist until `on_start`
// returns (or the StartupGate reports Ready).
//
//=========================================================================

//=== Standard Library ====================================================

use std::ffi::c_void;

//=== External Dependencies ===============================================

use crossbeam_channel::Sender;
use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::core::bridge_state::BridgeState;
use crate::core::platform_bridge::{BridgeError, BridgeEvent, Resource};
use crate::core::resources::AssetBundleHandle;

//=== HostContext =========================================================

/// The hosting environment as seen from its startup callback.
pub trait HostContext {
    /// Runs the host's own startup procedure.
    fn start(&mut self) -> Result<(), BridgeError>;

    /// Raw pointer to the host's asset store. Null if unavailable.
    fn asset_bundle(&self) -> *mut c_void;

    /// Absolute path of the host's private storage directory, if it has one.
    fn storage_root(&self) -> Option<String>;
}

//=== StartupVariant ======================================================

/// Which resources the host installs at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartupVariant {
    /// Asset bundle only. Filesystem features stay unavailable.
    AssetsOnly,

    /// Asset bundle, then storage root.
    #[default]
    AssetsAndStorage,
}

//=== StartupReport =======================================================

/// Resources installed by one `on_start` run, in installation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupReport {
    pub installed: Vec<Resource>,
}

impl StartupReport {
    pub fn contains(&self, resource: Resource) -> bool {
        self.installed.contains(&resource)
    }
}

//=== ShimBuilder =========================================================

/// Builder for configuring a [`ResourceAcquisitionShim`].
///
/// # Default Values
///
/// - **Variant**: [`StartupVariant::AssetsAndStorage`]
/// - **Notifier**: none
///
/// # Examples
///
/// ```
/// use aetheric_bridge::platform::{ShimBuilder, StartupVariant};
/// use aetheric_bridge::core::platform_bridge::startup_channel;
///
/// let (tx, _gate) = startup_channel();
/// let shim = ShimBuilder::new()
///     .with_variant(StartupVariant::AssetsOnly)
///     .with_notifier(tx)
///     .build();
/// assert_eq!(shim.variant(), StartupVariant::AssetsOnly);
/// ```
#[derive(Debug, Default)]
pub struct ShimBuilder {
    variant: StartupVariant,
    notifier: Option<Sender<BridgeEvent>>,
}

impl ShimBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects which resources the shim installs.
    pub fn with_variant(mut self, variant: StartupVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Reports installation progress to engine threads.
    ///
    /// Pair with [`crate::core::platform_bridge::startup_channel`].
    pub fn with_notifier(mut self, notifier: Sender<BridgeEvent>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn build(self) -> ResourceAcquisitionShim {
        ResourceAcquisitionShim {
            variant: self.variant,
            notifier: self.notifier,
        }
    }
}

//=== ResourceAcquisitionShim =============================================

/// Forwards host resources into a [`BridgeState`].
///
/// Performs no validation of its own; the state's installers reject bad
/// values and repeated installation.
#[derive(Debug)]
pub struct ResourceAcquisitionShim {
    variant: StartupVariant,
    notifier: Option<Sender<BridgeEvent>>,
}

impl ResourceAcquisitionShim {
    pub fn variant(&self) -> StartupVariant {
        self.variant
    }

    //--- on_start() -------------------------------------------------------

    /// Drives the startup sequence for `host` into `state`.
    ///
    /// # Errors
    ///
    /// - host startup failure (nothing installed)
    /// - any installer rejection; later steps are skipped and
    ///   `StartupComplete` is not sent
    pub fn on_start<H: HostContext + ?Sized>(
        &self,
        host: &mut H,
        state: &BridgeState,
    ) -> Result<StartupReport, BridgeError> {
        //--- Step 1: Host's own startup -----------------------------------
        host.start()?;

        let mut report = StartupReport {
            installed: Vec::with_capacity(2),
        };

        //--- Step 2: Asset bundle -----------------------------------------
        let handle = AssetBundleHandle::from_raw(host.asset_bundle())?;
        state.install_asset_bundle(handle)?;
        self.record(&mut report, Resource::AssetBundle);

        //--- Step 3: Storage root -----------------------------------------
        match self.variant {
            StartupVariant::AssetsAndStorage => match host.storage_root() {
                Some(path) => {
                    state.install_storage_root(&path)?;
                    self.record(&mut report, Resource::StorageRoot);
                }
                None => {
                    warn!(target: "platform", "Host has no private storage; storage root left unset");
                }
            },
            StartupVariant::AssetsOnly => {
                warn!(target: "platform", "Assets-only startup; storage root left unset");
            }
        }

        //--- Step 4: Signal completion ------------------------------------
        self.notify(BridgeEvent::StartupComplete);
        info!(target: "platform", "Bridge startup finished: {:?}", report.installed);

        Ok(report)
    }

    fn record(&self, report: &mut StartupReport, resource: Resource) {
        report.installed.push(resource);
        self.notify(BridgeEvent::Installed(resource));
    }

    fn notify(&self, event: BridgeEvent) {
        if let Some(notifier) = &self.notifier {
            if notifier.send(event).is_err() {
                warn!(target: "platform", "Startup gate dropped; engine will not see progress");
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
