use std::path::PathBuf;

use crate::cleanup::DeleteOutcome;
use crate::error::CleanupError;
use crate::library::{Detection, SteamLibrary};
use crate::reconcile::OrphanSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    /// A detection found orphans and deletion is waiting on the user.
    AwaitingConfirmation,
}

/// Everything the front end shows, rebuilt on each refresh or detection.
#[derive(Debug)]
pub struct Session {
    library: SteamLibrary,
    manifests: Vec<String>,
    game_folders: Vec<String>,
    orphans: OrphanSet,
    stage: Stage,
}

impl Session {
    pub fn new(library_root: impl Into<PathBuf>) -> Self {
        Self {
            library: SteamLibrary::new(library_root),
            manifests: Vec::new(),
            game_folders: Vec::new(),
            orphans: OrphanSet::new(),
            stage: Stage::Idle,
        }
    }

    pub fn library(&self) -> &SteamLibrary {
        &self.library
    }

    pub fn manifests(&self) -> &[String] {
        &self.manifests
    }

    pub fn game_folders(&self) -> &[String] {
        &self.game_folders
    }

    pub fn orphans(&self) -> &OrphanSet {
        &self.orphans
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn has_lists(&self) -> bool {
        !self.manifests.is_empty() || !self.game_folders.is_empty()
    }

    /// Points the session at another library and forgets the old one.
    pub fn set_library_root(&mut self, library_root: impl Into<PathBuf>) {
        self.library = SteamLibrary::new(library_root);
        self.clear();
    }

    /// Relists manifests and game folders. A list that can't be read is left
    /// empty and the first such error is returned.
    pub fn refresh(&mut self) -> Result<(), CleanupError> {
        self.clear();

        let manifests = self.library.list_manifests();
        let folders = self.library.list_game_folders();

        let mut first_err = None;
        match manifests {
            Ok(list) => self.manifests = list,
            Err(e) => first_err = Some(e),
        }
        match folders {
            Ok(list) => self.game_folders = list,
            Err(e) => {
                first_err.get_or_insert(e);
            }
        }

        match first_err {
            Some(e) => {
                log::warn!("Refresh of {} failed: {}", self.library.root().display(), e);
                Err(e)
            }
            None => Ok(()),
        }
    }

    /// Runs detection over the listed manifests. `None` when nothing is listed.
    pub fn detect(&mut self) -> Option<Detection> {
        if self.manifests.is_empty() {
            return None;
        }

        self.orphans.clear();
        self.stage = Stage::Idle;

        let detection = self.library.scan_and_reconcile(&self.manifests);
        if detection.has_orphans() {
            self.orphans = detection.orphans.clone();
            self.stage = Stage::AwaitingConfirmation;
        }
        Some(detection)
    }

    /// Deletes the orphans of the pending detection, then drops all state so
    /// the next deletion needs a fresh detection.
    pub fn delete(&mut self) -> Result<Vec<DeleteOutcome>, CleanupError> {
        if self.stage != Stage::AwaitingConfirmation {
            return Err(CleanupError::NothingToDelete);
        }

        let outcomes = self.library.delete_orphans(&self.orphans);
        self.clear();
        Ok(outcomes)
    }

    fn clear(&mut self) {
        self.manifests.clear();
        self.game_folders.clear();
        self.orphans.clear();
        self.stage = Stage::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn library() -> TempDir {
        let root = TempDir::new().unwrap();
        let steamapps = root.path().join("steamapps");
        fs::create_dir_all(steamapps.join("common").join("Kept")).unwrap();
        fs::write(steamapps.join("appmanifest_1.acf"), "\"installdir\" \"Kept\"\n").unwrap();
        fs::write(steamapps.join("appmanifest_2.acf"), "\"installdir\" \"Gone\"\n").unwrap();
        root
    }

    #[test]
    fn full_cycle_returns_to_idle() {
        let root = library();
        let mut session = Session::new(root.path());

        session.refresh().unwrap();
        assert_eq!(session.manifests().len(), 2);
        assert_eq!(session.game_folders(), ["Kept".to_string()]);

        let detection = session.detect().unwrap();
        assert_eq!(detection.missing.len(), 1);
        assert_eq!(session.stage(), Stage::AwaitingConfirmation);

        let outcomes = session.delete().unwrap();
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].is_deleted());
        assert_eq!(session.stage(), Stage::Idle);
        assert!(!session.has_lists());
        assert!(session.orphans().is_empty());
    }

    #[test]
    fn delete_twice_needs_a_new_detection() {
        let root = library();
        let mut session = Session::new(root.path());
        session.refresh().unwrap();
        session.detect();
        session.delete().unwrap();

        assert!(matches!(session.delete(), Err(CleanupError::NothingToDelete)));
    }

    #[test]
    fn detect_without_manifests_does_nothing() {
        let root = TempDir::new().unwrap();
        let mut session = Session::new(root.path());
        assert!(session.detect().is_none());
    }

    #[test]
    fn clean_library_stays_idle() {
        let root = library();
        fs::create_dir(root.path().join("steamapps/common/Gone")).unwrap();
        let mut session = Session::new(root.path());
        session.refresh().unwrap();

        let detection = session.detect().unwrap();
        assert!(!detection.has_orphans());
        assert_eq!(session.stage(), Stage::Idle);
        assert!(matches!(session.delete(), Err(CleanupError::NothingToDelete)));
    }

    #[test]
    fn refresh_of_bad_root_leaves_lists_empty() {
        let root = TempDir::new().unwrap();
        let mut session = Session::new(root.path().join("missing"));
        assert!(matches!(session.refresh(), Err(CleanupError::Open { .. })));
        assert!(!session.has_lists());
    }

    #[test]
    fn manifests_listed_even_without_common() {
        let root = TempDir::new().unwrap();
        let steamapps = root.path().join("steamapps");
        fs::create_dir(&steamapps).unwrap();
        fs::write(steamapps.join("appmanifest_5.acf"), "\"installdir\" \"X\"\n").unwrap();

        let mut session = Session::new(root.path());
        assert!(session.refresh().is_err());
        assert_eq!(session.manifests(), ["appmanifest_5.acf".to_string()]);
        assert!(session.game_folders().is_empty());
    }

    #[test]
    fn changing_root_clears_state() {
        let root = library();
        let mut session = Session::new(root.path());
        session.refresh().unwrap();
        session.detect();

        session.set_library_root("/elsewhere");
        assert_eq!(session.stage(), Stage::Idle);
        assert!(!session.has_lists());
        assert_eq!(session.library().root(), std::path::Path::new("/elsewhere"));
    }
}
