//=========================================================================
// Startup Gate
//=========================================================================
//
// Engine-side readiness check for bridge installation.
//
// Architecture:
//   Shim → Sender<BridgeEvent> → StartupGate::poll()/wait() → StartupStatus
//
// A receive on the channel happens-after the matching send, so a thread
// that observes `Ready` also observes every field the shim installed.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, RecvError, Sender, TryRecvError};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::{BridgeError, BridgeEvent, Resource};

//=== StartupStatus =======================================================

/// Installation progress as seen by an engine thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupStatus {
    /// The shim has not finished yet.
    Pending,

    /// The shim completed its startup sequence.
    Ready,

    /// The shim went away without completing.
    Aborted,
}

//=== startup_channel() ===================================================

/// Creates the shim-to-engine notification channel.
///
/// Unbounded so the host's main thread never blocks on a slow engine.
pub fn startup_channel() -> (Sender<BridgeEvent>, StartupGate) {
    let (tx, rx) = unbounded();
    (tx, StartupGate::new(rx))
}

//=== StartupGate =========================================================

/// Receives [`BridgeEvent`]s and tracks which resources were installed.
pub struct StartupGate {
    receiver: Receiver<BridgeEvent>,
    installed: Vec<Resource>,
    status: StartupStatus,
}

impl StartupGate {
    pub fn new(receiver: Receiver<BridgeEvent>) -> Self {
        Self {
            receiver,
            installed: Vec::with_capacity(2),
            status: StartupStatus::Pending,
        }
    }

    /// Drains pending events without blocking (bounded per call).
    pub fn poll(&mut self) -> StartupStatus {
        const MAX_EVENTS_PER_POLL: usize = 16;

        let mut drained = 0;
        while self.status == StartupStatus::Pending && drained < MAX_EVENTS_PER_POLL {
            match self.receiver.try_recv() {
                Ok(event) => {
                    self.handle_event(event);
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => self.abort(),
                Err(TryRecvError::Empty) => break,
            }
        }

        self.status
    }

    /// Blocks until the shim completes or disconnects.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::StartupAborted`] if every sender was dropped
    /// before `StartupComplete` arrived.
    pub fn wait(&mut self) -> Result<&[Resource], BridgeError> {
        while self.status == StartupStatus::Pending {
            match self.receiver.recv() {
                Ok(event) => self.handle_event(event),
                Err(RecvError) => self.abort(),
            }
        }

        match self.status {
            StartupStatus::Ready => Ok(&self.installed),
            _ => Err(BridgeError::StartupAborted),
        }
    }

    /// Resources reported installed so far.
    pub fn installed(&self) -> &[Resource] {
        &self.installed
    }

    pub fn status(&self) -> StartupStatus {
        self.status
    }

    fn handle_event(&mut self, event: BridgeEvent) {
        match event {
            BridgeEvent::Installed(resource) => {
                if !self.installed.contains(&resource) {
                    self.installed.push(resource);
                }
            }
            BridgeEvent::StartupComplete => {
                info!(target: "bridge", "Startup complete ({} resources)", self.installed.len());
                self.status = StartupStatus::Ready;
            }
        }
    }

    fn abort(&mut self) {
        warn!(target: "bridge", "Startup notifier disconnected before completion");
        self.status = StartupStatus::Aborted;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn poll_is_pending_on_empty_queue() {
        let (_tx, mut gate) = startup_channel();

        assert_eq!(gate.poll(), StartupStatus::Pending);
        assert!(gate.installed().is_empty());
    }

    #[test]
    fn poll_tracks_installed_resources() {
        let (tx, mut gate) = startup_channel();

        tx.send(BridgeEvent::Installed(Resource::AssetBundle)).unwrap();
        assert_eq!(gate.poll(), StartupStatus::Pending);
        assert_eq!(gate.installed(), &[Resource::AssetBundle]);

        tx.send(BridgeEvent::Installed(Resource::StorageRoot)).unwrap();
        tx.send(BridgeEvent::StartupComplete).unwrap();
        assert_eq!(gate.poll(), StartupStatus::Ready);
        assert_eq!(gate.installed(), &[Resource::AssetBundle, Resource::StorageRoot]);
    }

    #[test]
    fn poll_reports_abort_on_disconnect() {
        let (tx, mut gate) = startup_channel();

        tx.send(BridgeEvent::Installed(Resource::AssetBundle)).unwrap();
        drop(tx);

        assert_eq!(gate.poll(), StartupStatus::Aborted);
        assert_eq!(gate.installed(), &[Resource::AssetBundle]);
    }

    #[test]
    fn ready_is_sticky_after_disconnect() {
        let (tx, mut gate) = startup_channel();

        tx.send(BridgeEvent::StartupComplete).unwrap();
        drop(tx);

        assert_eq!(gate.poll(), StartupStatus::Ready);
        assert_eq!(gate.poll(), StartupStatus::Ready);
    }

    #[test]
    fn wait_blocks_until_complete() {
        let (tx, mut gate) = startup_channel();

        let host = thread::spawn(move || {
            tx.send(BridgeEvent::Installed(Resource::AssetBundle)).unwrap();
            tx.send(BridgeEvent::StartupComplete).unwrap();
        });

        let installed = gate.wait().unwrap().to_vec();
        host.join().unwrap();

        assert_eq!(installed, vec![Resource::AssetBundle]);
        assert_eq!(gate.status(), StartupStatus::Ready);
    }

    #[test]
    fn wait_fails_when_sender_dropped() {
        let (tx, mut gate) = startup_channel();
        drop(tx);

        assert!(matches!(gate.wait(), Err(BridgeError::StartupAborted)));
    }
}
