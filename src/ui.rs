use std::path::Path;
use std::thread;

use console::{Color, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::cleanup::DeleteOutcome;
use crate::config::LibraryConfig;
use crate::error::CleanupError;
use crate::library::Detection;
use crate::logging;
use crate::markup::{
    bold, code, color, dim, install_dir, manifest, tag_error, tag_found, tag_missing, tag_success,
    tag_warning,
};
use crate::session::{Session, Stage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Refresh,
    Detect,
    Delete,
    ChangePath,
    ToggleVerbose,
    Quit,
}

impl Action {
    fn label(self, verbose: bool) -> &'static str {
        match self {
            Action::Refresh => "Refresh lists",
            Action::Detect => "Detect missing game folders",
            Action::Delete => "Delete orphaned manifests",
            Action::ChangePath => "Change library path",
            Action::ToggleVerbose if verbose => "Verbose log: on",
            Action::ToggleVerbose => "Verbose log: off",
            Action::Quit => "Quit",
        }
    }
}

fn available_actions(stage: Stage) -> Vec<Action> {
    let mut actions = vec![Action::Refresh, Action::Detect];
    if stage == Stage::AwaitingConfirmation {
        actions.push(Action::Delete);
    }
    actions.extend([Action::ChangePath, Action::ToggleVerbose, Action::Quit]);
    actions
}

/// Interactive terminal front end over a [`Session`].
pub struct CleanupApp {
    config: LibraryConfig,
    session: Session,
    term: Term,
    theme: ColorfulTheme,
}

impl CleanupApp {
    pub fn new(config: LibraryConfig) -> Self {
        let session = Session::new(config.library_root.clone());
        Self {
            config,
            session,
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
        }
    }

    pub fn run(&mut self) -> Result<(), dialoguer::Error> {
        self.term.write_line(&bold("Steam Library Cleanup"))?;
        self.prompt_library_path()?;

        loop {
            let actions = available_actions(self.session.stage());
            let labels: Vec<&str> = actions
                .iter()
                .map(|a| a.label(self.config.verbose))
                .collect();
            let choice = Select::with_theme(&self.theme)
                .with_prompt("What next?")
                .items(&labels)
                .default(0)
                .interact()?;

            match actions[choice] {
                Action::Refresh => self.refresh()?,
                Action::Detect => self.detect()?,
                Action::Delete => self.delete()?,
                Action::ChangePath => self.prompt_library_path()?,
                Action::ToggleVerbose => {
                    self.config.verbose = !self.config.verbose;
                    logging::set_verbose(self.config.verbose);
                }
                Action::Quit => break,
            }
        }
        Ok(())
    }

    fn prompt_library_path(&mut self) -> Result<(), dialoguer::Error> {
        let current = self.config.library_root.to_string_lossy().into_owned();
        let input = Input::<String>::with_theme(&self.theme)
            .with_prompt("Steam library path")
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;

        self.config.library_root = input.trim().into();
        self.session.set_library_root(self.config.library_root.clone());
        log::info!("Library path set to {}", self.config.library_root.display());

        if self.config.has_root() {
            self.refresh()
        } else {
            self.alert()
        }
    }

    fn refresh(&mut self) -> Result<(), dialoguer::Error> {
        if self.session.has_lists() && !self.config.refresh_delay.is_zero() {
            self.term.write_line(&dim("Refreshing..."))?;
            thread::sleep(self.config.refresh_delay);
        }

        let result = self.session.refresh();

        self.write_lines(&list_lines("Manifests", self.session.manifests()))?;
        self.write_lines(&list_lines("Game folders", self.session.game_folders()))?;

        if let Err(e) = result {
            log::warn!("{}", e);
            self.alert()?;
        }
        Ok(())
    }

    fn detect(&mut self) -> Result<(), dialoguer::Error> {
        let Some(detection) = self.session.detect() else {
            self.term.write_line(&dim("No manifests listed, refresh first."))?;
            return Ok(());
        };
        self.write_lines(&detection_lines(&detection, self.config.verbose))
    }

    fn delete(&mut self) -> Result<(), dialoguer::Error> {
        let count = self.session.orphans().len();
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt(format!("Delete {} orphaned manifest(s)?", count))
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }

        match self.session.delete() {
            Ok(outcomes) => self.write_lines(&delete_lines(&outcomes)),
            Err(e) => {
                self.term.write_line(&format!("{} {}", tag_error(), e))?;
                Ok(())
            }
        }
    }

    fn alert(&self) -> Result<(), dialoguer::Error> {
        let path = self.config.library_root.display();
        self.term.write_line(&format!(
            "{} Couldn't open the Steam library at {}. {}",
            tag_error(),
            code(&path.to_string()),
            color("Check the library path.", Color::Yellow)
        ))?;
        Ok(())
    }

    fn write_lines(&self, lines: &[String]) -> Result<(), dialoguer::Error> {
        for line in lines {
            self.term.write_line(line)?;
        }
        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn list_lines(title: &str, items: &[String]) -> Vec<String> {
    let mut lines = vec![bold(&format!("{} ({})", title, items.len()))];
    lines.extend(items.iter().map(|item| format!("  {}", item)));
    lines
}

/// Log panel for one detection run. Found and warning lines only show when verbose.
pub fn detection_lines(detection: &Detection, verbose: bool) -> Vec<String> {
    let mut lines = vec![bold("Detecting missing game folders...")];

    if verbose {
        for (acf, dir) in &detection.scan.install_dirs {
            lines.push(format!(
                "{} install dir: {} for acf: {}",
                tag_found(),
                install_dir(dir),
                manifest(acf)
            ));
        }
        for warning in &detection.scan.warnings {
            if let CleanupError::ParseFailure { manifest: acf, line } = warning {
                lines.push(format!(
                    "{} Couldn't parse installdir key on line {} in acf {}",
                    tag_warning(),
                    line,
                    manifest(acf)
                ));
            }
        }
    }

    for failure in &detection.scan.failures {
        let line = match failure {
            CleanupError::KeyNotFound { manifest: acf } => format!(
                "{} No {} keys found in {}.",
                tag_error(),
                bold(&code("installdir")),
                manifest(acf)
            ),
            CleanupError::Open { path, .. } => format!(
                "{} Couldn't open {}",
                tag_error(),
                manifest(&display_name(path))
            ),
            other => format!("{} {}", tag_error(), other),
        };
        lines.push(line);
    }

    for entry in &detection.missing {
        lines.push(format!(
            "{} Found missing install dir: {} for .acf: {}",
            tag_missing(),
            install_dir(&entry.install_dir),
            manifest(&entry.manifest)
        ));
    }

    if !detection.has_orphans() {
        lines.push("---------".to_string());
        lines.push("No missing install dirs found. Nothing to do!".to_string());
    }
    lines
}

pub fn delete_lines(outcomes: &[DeleteOutcome]) -> Vec<String> {
    outcomes
        .iter()
        .map(|outcome| {
            let acf = manifest(&outcome.manifest);
            match &outcome.result {
                Ok(_) => format!("{} deleted {}", tag_success(), acf),
                Err(CleanupError::NotManifest { .. }) => {
                    format!("{} {} is not a .acf file.", tag_error(), acf)
                }
                Err(CleanupError::Open { .. }) => {
                    format!("{} Couldn't open {} for deletion.", tag_error(), acf)
                }
                Err(_) => format!("{} couldn't delete file: {}", tag_error(), acf),
            }
        })
        .collect()
}
