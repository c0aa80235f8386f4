use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::cleanup::{self, DeleteOutcome};
use crate::error::CleanupError;
use crate::lister::{list_dir, ListMode};
use crate::manifest::{scan_reader, ManifestEntry, MANIFEST_EXTENSION};
use crate::reconcile::{self, InstallDirMap, OrphanSet};

/// Result of scanning a batch of manifests.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub install_dirs: InstallDirMap,
    /// Lines that mention `installdir` without a usable value.
    pub warnings: Vec<CleanupError>,
    /// Manifests left out: unreadable or without the key.
    pub failures: Vec<CleanupError>,
}

#[derive(Debug, Default)]
pub struct Detection {
    pub scan: ScanReport,
    pub missing: Vec<ManifestEntry>,
    pub orphans: OrphanSet,
}

impl Detection {
    pub fn has_orphans(&self) -> bool {
        !self.orphans.is_empty()
    }
}

/// A Steam library folder, the one holding `steamapps/`.
#[derive(Debug, Clone)]
pub struct SteamLibrary {
    root: PathBuf,
}

impl SteamLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn steamapps_dir(&self) -> PathBuf {
        self.root.join("steamapps")
    }

    pub fn common_dir(&self) -> PathBuf {
        self.steamapps_dir().join("common")
    }

    pub fn manifest_path(&self, manifest: &str) -> PathBuf {
        self.steamapps_dir().join(manifest)
    }

    pub fn install_path(&self, install_dir: &str) -> PathBuf {
        reconcile::install_path(&self.common_dir(), install_dir)
    }

    /// File names of the `.acf` manifests in `steamapps/`.
    pub fn list_manifests(&self) -> Result<Vec<String>, CleanupError> {
        list_dir(
            &self.steamapps_dir(),
            ListMode::FilesOnly,
            Some(MANIFEST_EXTENSION),
        )
    }

    /// Folder names under `steamapps/common/`.
    pub fn list_game_folders(&self) -> Result<Vec<String>, CleanupError> {
        list_dir(&self.common_dir(), ListMode::FoldersOnly, None)
    }

    pub fn scan_install_dirs(&self, manifests: &[String]) -> ScanReport {
        let mut report = ScanReport::default();

        for manifest in manifests {
            let path = self.manifest_path(manifest);
            let file = match File::open(&path) {
                Ok(f) => f,
                Err(e) => {
                    log::warn!("Couldn't open {}: {}", path.display(), e);
                    report.failures.push(CleanupError::open(path, e));
                    continue;
                }
            };

            match scan_reader(manifest, &path, BufReader::new(file), &mut report.warnings) {
                Ok(install_dir) => {
                    log::debug!("Found install dir {:?} for {}", install_dir, manifest);
                    report.install_dirs.insert(manifest.clone(), install_dir);
                }
                Err(e) => {
                    log::warn!("{}", e);
                    report.failures.push(e);
                }
            }
        }

        report
    }

    pub fn reconcile(&self, install_dirs: &InstallDirMap) -> OrphanSet {
        reconcile::reconcile(&self.common_dir(), install_dirs)
    }

    /// Scans `manifests` and collects those pointing at a missing folder.
    pub fn scan_and_reconcile(&self, manifests: &[String]) -> Detection {
        let scan = self.scan_install_dirs(manifests);
        let orphans = self.reconcile(&scan.install_dirs);
        let missing = orphans
            .iter()
            .filter_map(|manifest| {
                scan.install_dirs.get(manifest).map(|install_dir| ManifestEntry {
                    manifest: manifest.clone(),
                    install_dir: install_dir.clone(),
                })
            })
            .collect();

        if orphans.is_empty() {
            log::info!("No missing install dirs in {}", self.root.display());
        }
        Detection {
            scan,
            missing,
            orphans,
        }
    }

    pub fn delete_orphans(&self, orphans: &OrphanSet) -> Vec<DeleteOutcome> {
        cleanup::delete_orphans(&self.steamapps_dir(), orphans)
    }
}
