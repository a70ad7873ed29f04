//! Placeholder substitution and fragment splicing
//!
//! Two passes run over every template, in this order:
//!
//! 1. [`splice`] fills `{@slot}` markers with fragments contributed by other
//!    providers (websocket routes, compose services, stylesheet links).
//! 2. [`render`] replaces the enumerated `{Name}` placeholders with values
//!    from the [`ProjectOptions`].
//!
//! Anything that does not look like a placeholder is copied through, so Go
//! struct literals, `${PORT}` shell expansions, templ `{ name }` expressions
//! and GitHub `${{ secrets.X }}` survive untouched.
//!
//! # Example
//!
//! ```rust
//! use blueprint::options::ProjectOptions;
//! use blueprint::render::{render, splice, Slot, Slots};
//!
//! # fn main() -> blueprint::Result<()> {
//! let options = ProjectOptions::builder("example.com/app").port(3000).build()?;
//!
//! let mut slots = Slots::default();
//! slots.push(Slot::Routes, "r.Get(\"/ws\", ws)");
//! let spliced = splice("routes.go", "func routes() {\n\t{@routes}\n}\n", &slots)?;
//! assert_eq!(spliced, "func routes() {\n\tr.Get(\"/ws\", ws)\n}\n");
//!
//! let env = render(".env", "PORT={Port}\nHOST=${HOST}\n", &options)?;
//! assert_eq!(env, "PORT=3000\nHOST=${HOST}\n");
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::options::ProjectOptions;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\$?)\{([A-Z][a-z][A-Za-z0-9]*)\}").expect("placeholder pattern is valid")
});

static SLOT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{@([^{}\s]*)\}").expect("slot pattern is valid"));

/// Named value a template may reference as `{Name}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `{ProjectName}`
    ProjectName,
    /// `{ModulePath}`
    ModulePath,
    /// `{Port}`
    Port,
    /// `{DatabaseHost}`
    DatabaseHost,
    /// `{DatabasePort}`, absent for drivers without a port
    DatabasePort,
    /// `{DatabaseName}`
    DatabaseName,
}

impl Placeholder {
    /// Every recognised placeholder
    pub const ALL: [Self; 6] = [
        Self::ProjectName,
        Self::ModulePath,
        Self::Port,
        Self::DatabaseHost,
        Self::DatabasePort,
        Self::DatabaseName,
    ];

    /// Name as written between the braces
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ProjectName => "ProjectName",
            Self::ModulePath => "ModulePath",
            Self::Port => "Port",
            Self::DatabaseHost => "DatabaseHost",
            Self::DatabasePort => "DatabasePort",
            Self::DatabaseName => "DatabaseName",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Value for this placeholder, `None` when the options do not define one
    #[must_use]
    pub fn value(self, options: &ProjectOptions) -> Option<String> {
        match self {
            Self::ProjectName => Some(options.project_name().to_string()),
            Self::ModulePath => Some(options.module_path().to_string()),
            Self::Port => Some(options.port().to_string()),
            Self::DatabaseHost => Some(options.database_host().to_string()),
            Self::DatabasePort => options.database_port().map(|port| port.to_string()),
            Self::DatabaseName => Some(options.database_name().to_string()),
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.name())
    }
}

/// Substitute every `{Name}` placeholder in `text`
///
/// The scan is a single pass over the original text, so substituted values
/// are never expanded again. `template_id` only appears in errors.
///
/// # Errors
///
/// [`Error::TemplateSubstitution`] for a placeholder-shaped name that is not
/// recognised, or a recognised one the options leave undefined.
pub fn render(template_id: &str, text: &str, options: &ProjectOptions) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        out.push_str(&text[last..whole.start()]);
        last = whole.end();

        if caps.get(1).is_some_and(|dollar| !dollar.is_empty()) {
            out.push_str(whole.as_str());
            continue;
        }

        let placeholder = Placeholder::from_name(name.as_str())
            .ok_or_else(|| substitution_error(template_id, whole.as_str(), "unknown placeholder"))?;
        let value = placeholder.value(options).ok_or_else(|| {
            substitution_error(template_id, whole.as_str(), "no value for placeholder")
        })?;
        out.push_str(&value);
    }

    out.push_str(&text[last..]);
    Ok(out)
}

/// Splice point inside a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    /// `{@imports}` inside a Go import block
    Imports,
    /// `{@routes}` inside the route registration function
    Routes,
    /// `{@handlers}` after the last handler
    Handlers,
    /// `{@head}` inside the HTML `<head>`
    Head,
    /// `{@services}` under the compose `services:` key
    Services,
}

impl Slot {
    /// Every slot
    pub const ALL: [Self; 5] = [
        Self::Imports,
        Self::Routes,
        Self::Handlers,
        Self::Head,
        Self::Services,
    ];

    /// Name as written in the marker
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Imports => "imports",
            Self::Routes => "routes",
            Self::Handlers => "handlers",
            Self::Head => "head",
            Self::Services => "services",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{@{}}}", self.name())
    }
}

/// Fragments collected per slot, kept in contribution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots {
    fragments: BTreeMap<Slot, Vec<String>>,
}

impl Slots {
    /// Append a fragment to a slot
    pub fn push(&mut self, slot: Slot, fragment: impl Into<String>) {
        self.fragments.entry(slot).or_default().push(fragment.into());
    }

    /// Fragments for a slot, empty when nothing was contributed
    #[must_use]
    pub fn fragments(&self, slot: Slot) -> &[String] {
        self.fragments.get(&slot).map_or(&[], Vec::as_slice)
    }
}

/// Fill every `{@slot}` marker in `text`
///
/// A marker must sit alone on its line. Each fragment line is prefixed with
/// the marker's indentation; blank fragment lines stay blank. A slot with no
/// fragments removes the marker line entirely.
///
/// # Errors
///
/// [`Error::TemplateSubstitution`] for an unknown slot name or a marker that
/// shares its line with other text.
pub fn splice(template_id: &str, text: &str, slots: &Slots) -> Result<String> {
    if !text.contains("{@") {
        return Ok(text.to_string());
    }

    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let Some(marker) = SLOT_MARKER.captures(line) else {
            out.push_str(line);
            continue;
        };
        let (Some(whole), Some(name)) = (marker.get(0), marker.get(1)) else {
            out.push_str(line);
            continue;
        };

        let slot = Slot::from_name(name.as_str())
            .ok_or_else(|| substitution_error(template_id, whole.as_str(), "unknown slot"))?;
        if line.trim() != whole.as_str() {
            return Err(substitution_error(
                template_id,
                whole.as_str(),
                "slot marker must be alone on its line",
            ));
        }

        let indent = &line[..line.len() - line.trim_start().len()];
        for fragment in slots.fragments(slot) {
            for fragment_line in fragment.trim_end_matches('\n').lines() {
                if !fragment_line.trim().is_empty() {
                    out.push_str(indent);
                    out.push_str(fragment_line);
                }
                out.push('\n');
            }
        }
    }

    Ok(out)
}

fn substitution_error(template_id: &str, placeholder: &str, reason: &'static str) -> Error {
    Error::TemplateSubstitution {
        template: template_id.to_string(),
        placeholder: placeholder.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Database;

    fn options() -> ProjectOptions {
        ProjectOptions::builder("github.com/me/shop")
            .database(Database::Postgres)
            .port(9000)
            .build()
            .unwrap()
    }

    #[test]
    fn test_renders_every_placeholder() {
        let text = "{ProjectName} {ModulePath} {Port} {DatabaseHost} {DatabasePort} {DatabaseName}";
        assert_eq!(
            render("t", text, &options()).unwrap(),
            "github.com/me/shop github.com/me/shop 9000 localhost 5432 shop"
        );
    }

    #[test]
    fn test_non_placeholder_braces_are_literal() {
        let text = "fiber.Map{\"k\": v}\n${PORT}\n${{ secrets.GITHUB_TOKEN }}\n{ name }\n{}\n{BLUEPRINT_DB}\n${Port}";
        assert_eq!(render("t", text, &options()).unwrap(), text);
    }

    #[test]
    fn test_unknown_placeholder_fails() {
        let err = render("cmd/api/main.go", "x {ProjectNmae} y", &options()).unwrap_err();
        match err {
            Error::TemplateSubstitution {
                template,
                placeholder,
                reason,
            } => {
                assert_eq!(template, "cmd/api/main.go");
                assert_eq!(placeholder, "{ProjectNmae}");
                assert_eq!(reason, "unknown placeholder");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_value_fails() {
        let options = ProjectOptions::builder("app")
            .database(Database::Sqlite)
            .build()
            .unwrap();
        assert!(matches!(
            render(".env", "P={DatabasePort}", &options),
            Err(Error::TemplateSubstitution { reason: "no value for placeholder", .. })
        ));
    }

    #[test]
    fn test_substituted_values_are_not_expanded_again() {
        let options = ProjectOptions::builder("app")
            .database(Database::Postgres)
            .database_name("{Port}")
            .build()
            .unwrap();
        assert_eq!(render("t", "{DatabaseName}", &options).unwrap(), "{Port}");
    }

    #[test]
    fn test_splice_indents_fragments() {
        let mut slots = Slots::default();
        slots.push(Slot::Imports, "\"fmt\"\n\n\"time\"");
        slots.push(Slot::Imports, "\"github.com/coder/websocket\"\n");
        let text = "import (\n\t\"log\"\n\t{@imports}\n)\n";
        assert_eq!(
            splice("t", text, &slots).unwrap(),
            "import (\n\t\"log\"\n\t\"fmt\"\n\n\t\"time\"\n\t\"github.com/coder/websocket\"\n)\n"
        );
    }

    #[test]
    fn test_empty_slot_removes_marker_line() {
        let text = "a\n  {@services}\nb\n";
        assert_eq!(splice("t", text, &Slots::default()).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_marker_without_trailing_newline() {
        let mut slots = Slots::default();
        slots.push(Slot::Handlers, "func h() {}");
        assert_eq!(splice("t", "x\n{@handlers}", &slots).unwrap(), "x\nfunc h() {}\n");
    }

    #[test]
    fn test_unknown_slot_fails() {
        assert!(matches!(
            splice("t", "{@footer}\n", &Slots::default()),
            Err(Error::TemplateSubstitution { reason: "unknown slot", .. })
        ));
    }

    #[test]
    fn test_inline_marker_fails() {
        assert!(splice("t", "x := 1 {@routes}\n", &Slots::default()).is_err());
    }

    #[test]
    fn test_text_without_markers_is_unchanged() {
        let text = "package main\n";
        assert_eq!(splice("t", text, &Slots::default()).unwrap(), text);
    }
}
