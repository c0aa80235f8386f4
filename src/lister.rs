use std::fs;
use std::path::Path;

use crate::error::CleanupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    FoldersOnly,
    FilesOnly,
}

/// Names of the entries directly under `root` that match `mode`.
///
/// With [`ListMode::FilesOnly`] and an `extension`, only files whose text
/// after the last `.` equals `extension` exactly (case-sensitive) are kept.
/// The `extension` is ignored for folders. Results are sorted by name.
pub fn list_dir(
    root: &Path,
    mode: ListMode,
    extension: Option<&str>,
) -> Result<Vec<String>, CleanupError> {
    let entries = fs::read_dir(root).map_err(|e| CleanupError::open(root, e))?;

    let mut names = Vec::new();
    for entry in entries.flatten() {
        let Ok(name) = entry.file_name().into_string() else {
            log::warn!("Skipping non UTF-8 entry in {}", root.display());
            continue;
        };
        // file_type() doesn't follow symlinks, a linked game folder still counts
        let is_dir = entry.path().is_dir();

        let keep = match mode {
            ListMode::FoldersOnly => is_dir,
            ListMode::FilesOnly if is_dir => false,
            ListMode::FilesOnly => match extension {
                None => true,
                Some(ext) => extension_of(&name) == Some(ext),
            },
        };
        if keep {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

fn extension_of(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("appmanifest_10.acf"), "").unwrap();
        fs::write(dir.path().join("appmanifest_20.acf"), "").unwrap();
        fs::write(dir.path().join("UPPER.ACF"), "").unwrap();
        fs::write(dir.path().join("libraryfolders.vdf"), "").unwrap();
        fs::write(dir.path().join("noext"), "").unwrap();
        fs::create_dir(dir.path().join("common")).unwrap();
        fs::create_dir(dir.path().join("fake.acf")).unwrap();
        dir
    }

    #[test]
    fn files_with_extension_is_case_sensitive() {
        let dir = fixture();
        let names = list_dir(dir.path(), ListMode::FilesOnly, Some("acf")).unwrap();
        assert_eq!(names, vec!["appmanifest_10.acf", "appmanifest_20.acf"]);
    }

    #[test]
    fn files_without_extension_lists_every_file() {
        let dir = fixture();
        let names = list_dir(dir.path(), ListMode::FilesOnly, None).unwrap();
        assert_eq!(
            names,
            vec![
                "UPPER.ACF",
                "appmanifest_10.acf",
                "appmanifest_20.acf",
                "libraryfolders.vdf",
                "noext"
            ]
        );
    }

    #[test]
    fn folders_only_skips_files() {
        let dir = fixture();
        let names = list_dir(dir.path(), ListMode::FoldersOnly, Some("acf")).unwrap();
        assert_eq!(names, vec!["common", "fake.acf"]);
    }

    #[test]
    fn missing_root_is_an_open_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = list_dir(&missing, ListMode::FoldersOnly, None).unwrap_err();
        assert!(matches!(err, CleanupError::Open { ref path, .. } if *path == missing));
    }

    #[test]
    fn file_as_root_is_an_open_error() {
        let dir = fixture();
        let err = list_dir(&dir.path().join("noext"), ListMode::FilesOnly, None).unwrap_err();
        assert!(matches!(err, CleanupError::Open { .. }));
    }
}
