//! Card renderer for stack records.
//!
//! A [`Card`] is the presentational projection of one `StackRecord`: header
//! (icon, name, kind badge), description, and zero or more named sections.
//! The projection is pure; backends (`html`, `text`, and the TUI detail
//! pane) consume the same structure. Optional record fields that are absent
//! or empty produce no section at all, never an empty one.
//!
//! Every section carries an identifier unique within a render pass
//! (`<record-id>-<section-slug>`), which copy affordances use to locate
//! their source text.

pub mod html;
pub mod text;

use stackdex_catalog::{StackKind, StackRecord};

/// Placeholder shown whenever the filtered view is empty.
pub const NO_RESULTS_MESSAGE: &str = "No stacks match the current filters";

/// One renderable section of a card.
#[derive(Debug, Clone)]
pub struct Section {
    /// Unique within a render pass; derived from the record id and slug.
    pub id: String,
    pub title: &'static str,
    pub body: SectionBody,
}

#[derive(Debug, Clone)]
pub enum SectionBody {
    /// A single multi-line blob with one copy affordance for the whole text.
    Block(String),
    /// Ordered short entries, each with its own copy affordance.
    /// `executable` distinguishes shell commands from advisory text.
    List { entries: Vec<String>, executable: bool },
}

/// Presentational projection of one record.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub kind: StackKind,
    pub build_tool: String,
    pub description: String,
    pub sections: Vec<Section>,
}

/// One copyable unit of a card: a whole block, or a single list entry.
#[derive(Debug, Clone)]
pub struct CopyTarget {
    pub section_id: String,
    pub label: String,
    pub text: String,
}

impl Card {
    /// Project a record into its card. Absent or empty optional fields are
    /// skipped entirely.
    pub fn from_record(record: &StackRecord) -> Self {
        let mut sections = Vec::new();

        push_list(&mut sections, &record.id, "commands-build", "Build", &record.build_commands, true);
        push_list(&mut sections, &record.id, "commands-test", "Test", &record.test_commands, true);
        push_block(&mut sections, &record.id, "dockerfile", "Dockerfile", record.dockerfile.as_deref());
        push_block(&mut sections, &record.id, "jenkinsfile", "Jenkinsfile", record.jenkinsfile.as_deref());
        push_block(&mut sections, &record.id, "argocd", "ArgoCD manifest", record.argocd_manifest.as_deref());
        push_list(&mut sections, &record.id, "gotchas", "Gotchas", &record.gotchas, false);

        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            kind: record.kind,
            build_tool: record.build_tool.clone(),
            description: record.description.clone(),
            sections,
        }
    }

    /// All copyable units in display order. Re-derived after every render
    /// pass; nothing holds on to targets from a previous frame.
    pub fn copy_targets(&self) -> Vec<CopyTarget> {
        let mut targets = Vec::new();
        for section in &self.sections {
            match &section.body {
                SectionBody::Block(text) => targets.push(CopyTarget {
                    section_id: section.id.clone(),
                    label: section.title.to_string(),
                    text: text.clone(),
                }),
                SectionBody::List { entries, .. } => {
                    for (i, entry) in entries.iter().enumerate() {
                        targets.push(CopyTarget {
                            section_id: section.id.clone(),
                            label: format!("{} #{}", section.title, i + 1),
                            text: entry.clone(),
                        });
                    }
                }
            }
        }
        targets
    }
}

fn push_list(
    sections: &mut Vec<Section>,
    record_id: &str,
    slug: &str,
    title: &'static str,
    entries: &[String],
    executable: bool,
) {
    if entries.is_empty() {
        return;
    }
    sections.push(Section {
        id: format!("{record_id}-{slug}"),
        title,
        body: SectionBody::List {
            entries: entries.to_vec(),
            executable,
        },
    });
}

fn push_block(
    sections: &mut Vec<Section>,
    record_id: &str,
    slug: &str,
    title: &'static str,
    text: Option<&str>,
) {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return;
    };
    sections.push(Section {
        id: format!("{record_id}-{slug}"),
        title,
        body: SectionBody::Block(text.to_string()),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_record() -> StackRecord {
        StackRecord {
            id: "zig".to_string(),
            name: "Zig".to_string(),
            kind: StackKind::Backend,
            build_tool: "zig".to_string(),
            description: "A low-level language".to_string(),
            build_commands: Vec::new(),
            test_commands: Vec::new(),
            dockerfile: None,
            jenkinsfile: None,
            argocd_manifest: None,
            gotchas: Vec::new(),
        }
    }

    #[test]
    fn test_bare_record_produces_no_sections() {
        let card = Card::from_record(&bare_record());
        assert!(card.sections.is_empty());
        assert!(card.copy_targets().is_empty());
    }

    #[test]
    fn test_empty_string_block_is_suppressed() {
        let mut record = bare_record();
        record.dockerfile = Some(String::new());
        let card = Card::from_record(&record);
        assert!(card.sections.is_empty());
    }

    #[test]
    fn test_gotchas_render_one_entry_each() {
        let mut record = bare_record();
        record.gotchas = vec!["first".to_string(), "second".to_string()];

        let card = Card::from_record(&record);
        assert_eq!(card.sections.len(), 1);
        let section = &card.sections[0];
        assert_eq!(section.title, "Gotchas");
        match &section.body {
            SectionBody::List { entries, executable } => {
                assert_eq!(entries.len(), 2);
                assert!(!executable);
            }
            SectionBody::Block(_) => panic!("gotchas must be a list section"),
        }

        let targets = card.copy_targets();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].text, "first");
        assert_eq!(targets[1].text, "second");
    }

    #[test]
    fn test_section_ids_unique_within_card() {
        let mut record = bare_record();
        record.build_commands = vec!["make".to_string()];
        record.test_commands = vec!["make test".to_string()];
        record.dockerfile = Some("FROM scratch".to_string());
        record.jenkinsfile = Some("pipeline {}".to_string());
        record.argocd_manifest = Some("kind: Application".to_string());
        record.gotchas = vec!["careful".to_string()];

        let card = Card::from_record(&record);
        let mut ids: Vec<&str> = card.sections.iter().map(|s| s.id.as_str()).collect();
        let total = ids.len();
        assert_eq!(total, 6);
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_block_copies_full_text() {
        let mut record = bare_record();
        let dockerfile = "FROM rust:1.85\nRUN cargo build --release";
        record.dockerfile = Some(dockerfile.to_string());

        let card = Card::from_record(&record);
        let targets = card.copy_targets();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].text, dockerfile);
        assert_eq!(targets[0].label, "Dockerfile");
    }

    #[test]
    fn test_copy_targets_follow_display_order() {
        let mut record = bare_record();
        record.build_commands = vec!["b1".to_string(), "b2".to_string()];
        record.dockerfile = Some("FROM scratch".to_string());
        record.gotchas = vec!["g1".to_string()];

        let card = Card::from_record(&record);
        let labels: Vec<String> = card.copy_targets().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["Build #1", "Build #2", "Dockerfile", "Gotchas #1"]);
    }
}
