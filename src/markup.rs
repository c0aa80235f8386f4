//! Styling for the detection log. Plain text comes out when the terminal
//! has no colour support.

use console::{Color, Style};

pub fn bold(text: &str) -> String {
    Style::new().bold().apply_to(text).to_string()
}

pub fn code(text: &str) -> String {
    Style::new().italic().apply_to(text).to_string()
}

pub fn dim(text: &str) -> String {
    Style::new().dim().apply_to(text).to_string()
}

pub fn color(text: &str, color: Color) -> String {
    Style::new().fg(color).apply_to(text).to_string()
}

fn tag(label: &str, fg: Color) -> String {
    Style::new()
        .fg(fg)
        .bold()
        .apply_to(format!("[{}]", label))
        .to_string()
}

pub fn tag_missing() -> String {
    tag("Missing", Color::Color256(244))
}

pub fn tag_warning() -> String {
    tag("Warning", Color::Yellow)
}

pub fn tag_found() -> String {
    tag("Found", Color::Green)
}

pub fn tag_error() -> String {
    tag("Error", Color::Red)
}

pub fn tag_success() -> String {
    tag("Success", Color::Green)
}

pub fn install_dir(name: &str) -> String {
    Style::new()
        .fg(Color::Color256(154))
        .bold()
        .italic()
        .apply_to(name)
        .to_string()
}

pub fn manifest(name: &str) -> String {
    Style::new()
        .fg(Color::Cyan)
        .bold()
        .italic()
        .apply_to(name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    #[test]
    fn tags_read_as_plain_text() {
        assert_eq!(strip_ansi_codes(&tag_missing()), "[Missing]");
        assert_eq!(strip_ansi_codes(&tag_warning()), "[Warning]");
        assert_eq!(strip_ansi_codes(&tag_found()), "[Found]");
        assert_eq!(strip_ansi_codes(&tag_error()), "[Error]");
        assert_eq!(strip_ansi_codes(&tag_success()), "[Success]");
    }

    #[test]
    fn names_keep_their_text() {
        assert_eq!(strip_ansi_codes(&install_dir("Team Fortress 2")), "Team Fortress 2");
        assert_eq!(strip_ansi_codes(&manifest("appmanifest_440.acf")), "appmanifest_440.acf");
        assert_eq!(strip_ansi_codes(&bold(&code("installdir"))), "installdir");
        assert_eq!(strip_ansi_codes(&color(&dim("x"), Color::Red)), "x");
    }
}
