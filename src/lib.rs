//! Finds Steam app manifests (`steamapps/*.acf`) whose install folder under
//! `steamapps/common/` no longer exists, and deletes them.
//!
//! The core ([`lister`], [`manifest`], [`reconcile`], [`cleanup`], fronted by
//! [`library::SteamLibrary`]) takes plain data in and hands plain data back.
//! [`session`] and [`ui`] own everything shown to the user.

pub mod cleanup;
pub mod config;
pub mod error;
pub mod library;
pub mod lister;
pub mod logging;
pub mod manifest;
pub mod markup;
pub mod reconcile;
pub mod session;
pub mod ui;

pub use cleanup::DeleteOutcome;
pub use config::LibraryConfig;
pub use error::CleanupError;
pub use library::{Detection, ScanReport, SteamLibrary};
pub use lister::{list_dir, ListMode};
pub use manifest::{scan_manifest, ManifestEntry};
pub use reconcile::{InstallDirMap, OrphanSet};
pub use session::{Session, Stage};
