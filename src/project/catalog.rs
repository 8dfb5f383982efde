//! Owned project catalog: construction, TOML parsing, JSON export.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{projects, Project};

/// An ordered, read-only sequence of projects.
///
/// Built once at startup, either from the embedded table or from a TOML
/// file, then shared behind an `Arc`. Serializes as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    projects: Vec<Project>,
}

/// On-disk form of a catalog: a list of `[[projects]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<Project>,
}

impl Catalog {
    /// Catalog backed by the embedded table.
    pub fn embedded() -> Self {
        Self::from_projects(projects().to_vec())
    }

    pub fn from_projects(projects: Vec<Project>) -> Self {
        Catalog { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn into_projects(self) -> Vec<Project> {
        self.projects
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::embedded()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ── TOML Parsing ────────────────────────────────────────────────

/// Parse a catalog from a TOML string of `[[projects]]` tables.
///
/// Only structural errors are reported (malformed TOML, a missing `title` or
/// `description`, a non-string field). Entry order is preserved.
pub fn parse_toml(content: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(content)?;
    Ok(Catalog::from_projects(file.projects))
}

/// Parse a catalog from a TOML file path.
pub fn parse_toml_file(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    parse_toml(&content).with_context(|| format!("failed to parse catalog file {}", path.display()))
}
