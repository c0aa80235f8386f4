//! Reads the declared install directory out of Steam app manifests.
//!
//! Manifests are Valve's loosely structured KeyValues text. Rather than parse
//! the grammar, the scanner takes the first line mentioning `installdir` and
//! keeps the last quoted fragment on it, which is how the value sits in every
//! manifest Steam writes:
//!
//! ```text
//! "AppState"
//! {
//!     "appid"       "440"
//!     "installdir"  "Team Fortress 2"
//! }
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::CleanupError;

pub const MANIFEST_EXTENSION: &str = "acf";

const INSTALL_DIR_KEY: &str = "installdir";

/// A manifest together with the install directory it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub manifest: String,
    pub install_dir: String,
}

pub fn is_manifest_name(name: &str) -> bool {
    name.strip_suffix(MANIFEST_EXTENSION)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Install directory declared by the manifest at `path`.
///
/// Lines that mention the key but carry no usable value are logged at debug
/// level and skipped.
pub fn scan_manifest(path: &Path) -> Result<String, CleanupError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let file = File::open(path).map_err(|e| CleanupError::open(path, e))?;
    let mut warnings = Vec::new();
    scan_reader(&name, path, BufReader::new(file), &mut warnings)
}

/// Same as [`scan_manifest`] over any buffered reader. `path` only names the
/// source in read errors. Parse failures are pushed onto `warnings` instead
/// of ending the scan.
pub fn scan_reader<R: BufRead>(
    manifest: &str,
    path: &Path,
    mut reader: R,
    warnings: &mut Vec<CleanupError>,
) -> Result<String, CleanupError> {
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| CleanupError::open(path, e))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if !line.to_lowercase().contains(INSTALL_DIR_KEY) {
            continue;
        }

        match extract_install_dir(line) {
            Some(install_dir) => return Ok(install_dir.to_string()),
            None => {
                log::debug!(
                    "Couldn't parse installdir key on line {} of {}",
                    line_no,
                    manifest
                );
                warnings.push(CleanupError::ParseFailure {
                    manifest: manifest.to_string(),
                    line: line_no,
                });
            }
        }
    }

    Err(CleanupError::KeyNotFound {
        manifest: manifest.to_string(),
    })
}

/// Last non-empty fragment of `line` split on `"`. A line without any quote
/// has no value to offer.
pub fn extract_install_dir(line: &str) -> Option<&str> {
    if !line.contains('"') {
        return None;
    }
    line.split('"').filter(|f| !f.is_empty()).last()
}
