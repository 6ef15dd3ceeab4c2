//=========================================================================
// User Paths
//=========================================================================
//
// Engine directory layout under the installed storage root.
//
//   <root>/               config files
//   <root>/editorlevels/  levels saved from the editor
//   <root>/highscores/    per-pack highscore tables
//   <root>/dlc/           user-installed level packs
//
//=========================================================================

//=== Standard Library ====================================================

use std::fs;
use std::path::{Path, PathBuf};

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::bridge_state::BridgeState;
use crate::core::platform_bridge::BridgeError;
use crate::core::resources::StorageRoot;

//=== UserPaths ===========================================================

/// Resolved (and created) user directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPaths {
    config: PathBuf,
    user_levels: PathBuf,
    highscores: PathBuf,
    user_packs: PathBuf,
}

impl UserPaths {
    const USER_LEVEL_DIR: &'static str = "editorlevels";
    const HIGHSCORE_DIR: &'static str = "highscores";
    const USER_PACK_DIR: &'static str = "dlc";

    /// Derives the layout from `root` and creates any missing directory.
    ///
    /// Existing directories and their contents are left alone.
    pub fn prepare(root: &StorageRoot) -> Result<Self, BridgeError> {
        let paths = Self {
            config: root.as_path().to_path_buf(),
            user_levels: root.join(Self::USER_LEVEL_DIR),
            highscores: root.join(Self::HIGHSCORE_DIR),
            user_packs: root.join(Self::USER_PACK_DIR),
        };

        for dir in paths.dirs() {
            ensure_dir(dir)?;
        }

        info!(target: "bridge", "User paths ready under {}", root.as_str());
        Ok(paths)
    }

    /// Prepares the layout from an installed bridge state.
    ///
    /// # Errors
    ///
    /// [`BridgeError::Uninitialized`] if the host never installed a storage
    /// root; filesystem features are then unavailable.
    pub fn from_state(state: &BridgeState) -> Result<Self, BridgeError> {
        Self::prepare(state.storage_root()?)
    }

    /// Prepares the layout from the process-wide bridge.
    pub fn from_bridge() -> Result<Self, BridgeError> {
        Self::from_state(crate::core::bridge_state::bridge())
    }

    pub fn config_dir(&self) -> &Path {
        &self.config
    }

    pub fn user_level_dir(&self) -> &Path {
        &self.user_levels
    }

    pub fn highscore_dir(&self) -> &Path {
        &self.highscores
    }

    pub fn user_pack_dir(&self) -> &Path {
        &self.user_packs
    }

    fn dirs(&self) -> [&Path; 4] {
        [
            self.config.as_path(),
            self.user_levels.as_path(),
            self.highscores.as_path(),
            self.user_packs.as_path(),
        ]
    }
}

fn ensure_dir(dir: &Path) -> Result<(), BridgeError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| BridgeError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

//=========================================================================
// Unit Tests
//=========================================================================
