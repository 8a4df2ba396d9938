use crate::identity::domain::SoftwareIdentity;
use crate::ports::outbound::TagFormatter;
use crate::shared::Result;

/// Markdown table header for identity attributes
const IDENTITY_TABLE_HEADER: &str = "| Attribute | Value |\n";

/// Markdown table separator line for identity attributes
const IDENTITY_TABLE_SEPARATOR: &str = "|-----------|-------|\n";

const ENTITY_TABLE_HEADER: &str = "| Name | Reg ID | Role | Thumbprint |\n";
const ENTITY_TABLE_SEPARATOR: &str = "|------|--------|------|------------|\n";

const LINK_TABLE_HEADER: &str = "| Href | Relationship | Media Type | Ownership | Use | Media | Artifact |\n";
const LINK_TABLE_SEPARATOR: &str =
    "|------|--------------|------------|-----------|-----|-------|----------|\n";

/// MarkdownFormatter adapter for a human-readable identity report
///
/// Render-only: the report is meant for people and cannot be parsed back.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Flattens text to a single paragraph line; a leading block marker is backslash-escaped
    fn escape_markdown_paragraph(text: &str) -> String {
        let flat = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        match flat.chars().next() {
            Some('#' | '>' | '-' | '*' | '+' | '=' | '|' | '`') => format!("\\{}", flat),
            _ => flat,
        }
    }

    fn cell(value: Option<&str>) -> String {
        value
            .map(Self::escape_markdown_table_cell)
            .unwrap_or_else(|| "-".to_string())
    }

    fn flag(value: Option<bool>) -> &'static str {
        match value {
            Some(true) => "yes",
            Some(false) => "no",
            None => "-",
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, identity: &SoftwareIdentity) {
        let title = identity.name().unwrap_or("Unnamed software");
        output.push_str(&format!("# {}\n\n", Self::escape_markdown_table_cell(title)));
        if let Some(summary) = identity.summary() {
            let summary = Self::escape_markdown_paragraph(summary);
            if !summary.is_empty() {
                output.push_str(&format!("{}\n\n", summary));
            }
        }
    }

    fn render_identity(&self, output: &mut String, identity: &SoftwareIdentity) {
        output.push_str("## Identity\n\n");
        output.push_str(IDENTITY_TABLE_HEADER);
        output.push_str(IDENTITY_TABLE_SEPARATOR);

        let rows = [
            ("Version", Self::cell(identity.version())),
            ("Version Scheme", Self::cell(identity.version_scheme())),
            ("Tag ID", Self::cell(identity.tag_id())),
            ("Tag Version", Self::cell(identity.tag_version())),
            ("Patch", Self::flag(identity.is_patch()).to_string()),
            ("Supplemental", Self::flag(identity.is_supplemental()).to_string()),
            ("Applies To Media", Self::cell(identity.applies_to_media())),
        ];
        for (attribute, value) in rows {
            output.push_str(&format!("| {} | {} |\n", attribute, value));
        }
        output.push('\n');
    }

    fn render_meta(&self, output: &mut String, identity: &SoftwareIdentity) {
        let entries: Vec<(String, String)> = identity
            .meta()
            .flat_map(|meta| {
                meta.iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect::<Vec<_>>()
            })
            .collect();
        if entries.is_empty() {
            return;
        }

        output.push_str("## Metadata\n\n");
        output.push_str("| Key | Value |\n|-----|-------|\n");
        for (key, value) in entries {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&key),
                Self::escape_markdown_table_cell(&value)
            ));
        }
        output.push('\n');
    }

    fn render_entities(&self, output: &mut String, identity: &SoftwareIdentity) {
        if identity.entities().next().is_none() {
            return;
        }

        output.push_str("## Entities\n\n");
        output.push_str(ENTITY_TABLE_HEADER);
        output.push_str(ENTITY_TABLE_SEPARATOR);
        for entity in identity.entities() {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::cell(entity.name()),
                Self::cell(entity.reg_id()),
                Self::cell(entity.role()),
                Self::cell(entity.thumbprint())
            ));
        }
        output.push('\n');
    }

    fn render_links(&self, output: &mut String, identity: &SoftwareIdentity) {
        if identity.links().next().is_none() {
            return;
        }

        output.push_str("## Links\n\n");
        output.push_str(LINK_TABLE_HEADER);
        output.push_str(LINK_TABLE_SEPARATOR);
        for link in identity.links() {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                Self::cell(link.href()),
                Self::cell(link.relationship()),
                Self::cell(link.media_type()),
                Self::cell(link.ownership()),
                Self::cell(link.use_()),
                Self::cell(link.applies_to_media()),
                Self::cell(link.artifact())
            ));
        }
        output.push('\n');
    }
}

impl TagFormatter for MarkdownFormatter {
    fn format(&self, identity: &SoftwareIdentity) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, identity);
        self.render_identity(&mut output, identity);
        self.render_meta(&mut output, identity);
        self.render_entities(&mut output, identity);
        self.render_links(&mut output, identity);
        Ok(output)
    }
}
