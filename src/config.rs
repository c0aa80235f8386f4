use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings the front end edits at runtime. Nothing here is written to disk;
/// every launch starts again from the guessed default.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    pub library_root: PathBuf,
    pub verbose: bool,
    /// Pause before a refresh of already populated lists. Zero disables it.
    pub refresh_delay: Duration,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            library_root: find_default_library().unwrap_or_default(),
            verbose: false,
            refresh_delay: Duration::from_millis(300),
        }
    }
}

impl LibraryConfig {
    pub fn has_root(&self) -> bool {
        !self.library_root.as_os_str().is_empty()
    }
}

/// Best guess at the Steam library on this machine. Falls back to the first
/// candidate even when it doesn't exist so the user has something to edit.
pub fn find_default_library() -> Option<PathBuf> {
    let candidates = library_candidates();
    candidates
        .iter()
        .find(|p| p.is_dir())
        .or_else(|| candidates.first())
        .cloned()
}

#[cfg(windows)]
fn library_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // 1. Registry (most reliable)
    let keys = [
        ("SOFTWARE\\WOW6432Node\\Valve\\Steam", "InstallPath"), // x64 OS
        ("SOFTWARE\\Valve\\Steam", "InstallPath"),              // x86 OS
    ];
    for (key_path, value_name) in keys.iter() {
        if let Ok(output) = std::process::Command::new("reg")
            .args(["query", &format!("HKLM\\{}", key_path), "/v", value_name])
            .output()
        {
            let out = String::from_utf8_lossy(&output.stdout);
            if let Some(path) = parse_reg_sz(&out) {
                candidates.push(PathBuf::from(path));
            }
        }
    }

    // 2. Common install locations
    candidates.push(PathBuf::from(r"C:\Program Files (x86)\Steam"));
    candidates.push(PathBuf::from(r"C:\Program Files\Steam"));
    candidates
}

#[cfg(target_os = "macos")]
fn library_candidates() -> Vec<PathBuf> {
    dirs::home_dir()
        .map(|home| vec![home.join("Library").join("Application Support").join("Steam")])
        .unwrap_or_default()
}

#[cfg(all(unix, not(target_os = "macos")))]
fn library_candidates() -> Vec<PathBuf> {
    match dirs::home_dir() {
        Some(home) => unix_candidates(&home),
        None => Vec::new(),
    }
}

#[cfg(not(any(unix, windows)))]
fn library_candidates() -> Vec<PathBuf> {
    Vec::new()
}

#[cfg_attr(not(all(unix, not(target_os = "macos"))), allow(dead_code))]
fn unix_candidates(home: &Path) -> Vec<PathBuf> {
    vec![
        home.join(".steam").join("steam"),
        home.join(".local").join("share").join("Steam"),
    ]
}

/// Pulls the value out of `reg query` output:
/// `    InstallPath    REG_SZ    C:\Program Files (x86)\Steam`
#[cfg_attr(not(windows), allow(dead_code))]
fn parse_reg_sz(output: &str) -> Option<&str> {
    let pos = output.find("REG_SZ")?;
    let value = output[pos + "REG_SZ".len()..].lines().next()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
