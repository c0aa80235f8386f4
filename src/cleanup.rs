use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CleanupError;
use crate::manifest::is_manifest_name;
use crate::reconcile::OrphanSet;

/// What happened to one orphaned manifest. `Ok` holds the absolute path
/// that was removed.
#[derive(Debug)]
pub struct DeleteOutcome {
    pub manifest: String,
    pub result: Result<PathBuf, CleanupError>,
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        self.result.is_ok()
    }
}

/// Removes every orphan from `steamapps_dir`. A failure only affects its own item.
pub fn delete_orphans(steamapps_dir: &Path, orphans: &OrphanSet) -> Vec<DeleteOutcome> {
    orphans
        .iter()
        .map(|manifest| DeleteOutcome {
            manifest: manifest.clone(),
            result: delete_manifest(steamapps_dir, manifest),
        })
        .collect()
}

fn delete_manifest(steamapps_dir: &Path, manifest: &str) -> Result<PathBuf, CleanupError> {
    if !is_manifest_name(manifest) {
        log::error!("Refusing to delete {}, not a .acf file", manifest);
        return Err(CleanupError::NotManifest {
            manifest: manifest.to_string(),
        });
    }

    let path = steamapps_dir.join(manifest);
    let absolute = fs::canonicalize(&path).map_err(|e| {
        log::error!("Couldn't resolve {} for deletion: {}", path.display(), e);
        CleanupError::open(&path, e)
    })?;

    match fs::remove_file(&absolute) {
        Ok(()) => {
            log::info!("Deleted {}", absolute.display());
            Ok(absolute)
        }
        Err(e) => {
            log::error!("Couldn't delete {}: {}", absolute.display(), e);
            Err(CleanupError::Delete {
                path: absolute,
                source: e,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn orphans(names: &[&str]) -> OrphanSet {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn deletes_orphaned_manifest() {
        let steamapps = TempDir::new().unwrap();
        let acf = steamapps.path().join("appmanifest_20.acf");
        fs::write(&acf, "\"installdir\" \"DeletedGame\"").unwrap();

        let outcomes = delete_orphans(steamapps.path(), &orphans(&["appmanifest_20.acf"]));
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].is_deleted());
        assert!(outcomes[0].result.as_ref().unwrap().is_absolute());
        assert!(!acf.exists());
    }

    #[test]
    fn non_manifest_is_skipped_not_deleted() {
        let steamapps = TempDir::new().unwrap();
        let vdf = steamapps.path().join("libraryfolders.vdf");
        fs::write(&vdf, "").unwrap();

        let outcomes = delete_orphans(steamapps.path(), &orphans(&["libraryfolders.vdf"]));
        assert!(matches!(outcomes[0].result, Err(CleanupError::NotManifest { .. })));
        assert!(vdf.exists());
    }

    #[test]
    fn one_failure_does_not_stop_the_rest() {
        let steamapps = TempDir::new().unwrap();
        fs::write(steamapps.path().join("b.acf"), "").unwrap();
        fs::create_dir(steamapps.path().join("c.acf")).unwrap();

        let outcomes = delete_orphans(steamapps.path(), &orphans(&["a.acf", "b.acf", "c.acf"]));
        assert!(matches!(outcomes[0].result, Err(CleanupError::Open { .. })));
        assert!(outcomes[1].is_deleted());
        assert!(matches!(outcomes[2].result, Err(CleanupError::Delete { .. })));
        assert!(steamapps.path().join("c.acf").is_dir());
    }
}
