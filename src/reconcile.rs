use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Manifest file name -> declared install directory.
pub type InstallDirMap = BTreeMap<String, String>;

/// Manifests whose install directory is gone.
pub type OrphanSet = BTreeSet<String>;

/// Folder for `install_dir` under `common_dir`. Roots, drive prefixes and
/// leading separators are dropped so the result never leaves `common_dir`
/// through an absolute path.
pub fn install_path(common_dir: &Path, install_dir: &str) -> PathBuf {
    let mut path = common_dir.to_path_buf();
    for component in Path::new(install_dir).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::ParentDir => path.push(".."),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    path
}

/// Manifests of `install_dirs` whose folder under `common_dir` can't be opened.
pub fn reconcile(common_dir: &Path, install_dirs: &InstallDirMap) -> OrphanSet {
    let mut orphans = OrphanSet::new();
    for (manifest, install_dir) in install_dirs {
        let folder = install_path(common_dir, install_dir);
        if fs::read_dir(&folder).is_ok() {
            continue;
        }
        log::info!("Missing install dir {:?} for {}", install_dir, manifest);
        orphans.insert(manifest.clone());
    }
    orphans
}
