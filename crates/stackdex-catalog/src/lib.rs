//! Catalog model and filter engine for the stackdex reference browser.
//!
//! The catalog is a fixed collection of [`StackRecord`]s describing build,
//! test and deployment templates for common technology stacks. It is loaded
//! once (from the embedded default document or a user-supplied JSON file)
//! and never mutated afterwards; everything downstream works on borrowed
//! views of it.
//!
//! The document format is a JSON object with a single top-level `stacks`
//! key holding the record array. Field names are camelCase; every field
//! beyond `id`, `name`, `type`, `buildTool` and `description` is optional
//! and an absent or empty value simply means "no such section".

pub mod filter;
pub mod markup;

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

pub use filter::{FilterCriteria, filter_records};

/// Default catalog document compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/stacks.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Category tag for a stack. The data source uses an open set of strings;
/// anything we do not recognize parses as [`StackKind::Other`] and renders
/// with the default badge style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackKind {
    Backend,
    Frontend,
    Ml,
    Mobile,
    Data,
    Infra,
    #[serde(other)]
    Other,
}

impl StackKind {
    /// Badge label shown next to the stack name.
    pub fn label(&self) -> &'static str {
        match self {
            StackKind::Backend => "backend",
            StackKind::Frontend => "frontend",
            StackKind::Ml => "ml",
            StackKind::Mobile => "mobile",
            StackKind::Data => "data",
            StackKind::Infra => "infra",
            StackKind::Other => "other",
        }
    }

    /// Header icon for the card view.
    pub fn icon(&self) -> &'static str {
        match self {
            StackKind::Backend => "⚙",
            StackKind::Frontend => "▣",
            StackKind::Ml => "∿",
            StackKind::Mobile => "▱",
            StackKind::Data => "≡",
            StackKind::Infra => "☁",
            StackKind::Other => "◇",
        }
    }
}

impl std::fmt::Display for StackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug)]
#[error("unknown stack type '{0}' (expected backend, frontend, ml, mobile, data, infra or other)")]
pub struct ParseKindError(String);

/// Strict parsing for user-typed filter values. Unlike deserialization,
/// which maps unknown tags to [`StackKind::Other`], a typo on the command
/// line is an error.
impl std::str::FromStr for StackKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "backend" => Ok(StackKind::Backend),
            "frontend" => Ok(StackKind::Frontend),
            "ml" => Ok(StackKind::Ml),
            "mobile" => Ok(StackKind::Mobile),
            "data" => Ok(StackKind::Data),
            "infra" => Ok(StackKind::Infra),
            "other" => Ok(StackKind::Other),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// One catalog entry: a technology stack's build/test/deploy templates and
/// known pitfalls. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackRecord {
    /// Unique by data-source convention; not enforced here.
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StackKind,
    /// Free-form tool tag, matched by exact equality in the tool filter.
    pub build_tool: String,
    pub description: String,
    #[serde(default)]
    pub build_commands: Vec<String>,
    #[serde(default)]
    pub test_commands: Vec<String>,
    #[serde(default)]
    pub dockerfile: Option<String>,
    #[serde(default)]
    pub jenkinsfile: Option<String>,
    #[serde(default)]
    pub argocd_manifest: Option<String>,
    #[serde(default)]
    pub gotchas: Vec<String>,
}

/// The loaded catalog. Construct once, then hand out borrowed views.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub stacks: Vec<StackRecord>,
}

impl Catalog {
    /// Parse the catalog document that ships embedded in the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog document from a JSON string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(doc: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(doc)?;
        log::debug!("loaded catalog with {} stacks", catalog.stacks.len());
        Ok(catalog)
    }

    /// Read and parse a catalog document from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Read and parse a catalog document from an arbitrary reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, CatalogError> {
        let mut doc = String::new();
        reader.read_to_string(&mut doc)?;
        Self::from_str(&doc)
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&StackRecord> {
        self.stacks.iter().find(|s| s.id == id)
    }

    /// Distinct kinds in first-appearance order, for the kind filter cycle.
    pub fn kinds(&self) -> Vec<StackKind> {
        let mut kinds = Vec::new();
        for stack in &self.stacks {
            if !kinds.contains(&stack.kind) {
                kinds.push(stack.kind);
            }
        }
        kinds
    }

    /// Distinct build tools in first-appearance order, for the tool filter cycle.
    pub fn tools(&self) -> Vec<String> {
        let mut tools: Vec<String> = Vec::new();
        for stack in &self.stacks {
            if !tools.iter().any(|t| t == &stack.build_tool) {
                tools.push(stack.build_tool.clone());
            }
        }
        tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_parses() {
        let json = r#"{
            "id": "zig",
            "name": "Zig",
            "type": "backend",
            "buildTool": "zig",
            "description": "A low-level language"
        }"#;

        let record: StackRecord = serde_json::from_str(json).expect("parse minimal record");
        assert_eq!(record.id, "zig");
        assert_eq!(record.kind, StackKind::Backend);
        assert!(record.build_commands.is_empty());
        assert!(record.test_commands.is_empty());
        assert!(record.dockerfile.is_none());
        assert!(record.jenkinsfile.is_none());
        assert!(record.argocd_manifest.is_none());
        assert!(record.gotchas.is_empty());
    }

    #[test]
    fn test_unknown_kind_falls_back_to_other() {
        let json = r#"{
            "id": "x",
            "name": "X",
            "type": "quantum",
            "buildTool": "qcc",
            "description": "unrecognized category tag"
        }"#;

        let record: StackRecord = serde_json::from_str(json).expect("parse record");
        assert_eq!(record.kind, StackKind::Other);
        assert_eq!(record.kind.label(), "other");
    }

    #[test]
    fn test_strict_parse_rejects_unknown_kind() {
        assert_eq!("Backend".parse::<StackKind>().ok(), Some(StackKind::Backend));
        assert!("quantum".parse::<StackKind>().is_err());
    }

    #[test]
    fn test_builtin_catalog_parses_with_unique_ids() {
        let catalog = Catalog::builtin().expect("builtin catalog must parse");
        assert!(!catalog.is_empty());

        let mut ids: Vec<&str> = catalog.stacks.iter().map(|s| s.id.as_str()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total, "builtin catalog ids must be unique");
    }

    #[test]
    fn test_document_requires_top_level_stacks_key() {
        let err = Catalog::from_str(r#"{"records": []}"#);
        assert!(matches!(err, Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_lookup_and_distinct_values() {
        let catalog = Catalog::from_str(
            r#"{"stacks": [
                {"id": "a", "name": "A", "type": "backend", "buildTool": "cargo", "description": ""},
                {"id": "b", "name": "B", "type": "frontend", "buildTool": "npm", "description": ""},
                {"id": "c", "name": "C", "type": "backend", "buildTool": "cargo", "description": ""}
            ]}"#,
        )
        .expect("parse catalog");

        assert_eq!(catalog.get("b").map(|s| s.name.as_str()), Some("B"));
        assert!(catalog.get("missing").is_none());
        assert_eq!(catalog.kinds(), vec![StackKind::Backend, StackKind::Frontend]);
        assert_eq!(catalog.tools(), vec!["cargo".to_string(), "npm".to_string()]);
    }
}
