use crate::identity::domain::{iso19770_2, Element, SoftwareIdentity};
use crate::ports::outbound::{TagFormatter, TagParser};
use crate::shared::Result;
use anyhow::Context;

/// JsonTagFormatter adapter for the canonical JSON rendering of a tag
///
/// The document tree is written as nested `{ "name", "attributes", "children" }`
/// objects. Empty attribute maps and child lists are omitted. A record whose
/// tree was never materialized renders as an empty `SoftwareIdentity` root.
pub struct JsonTagFormatter;

impl JsonTagFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonTagFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TagFormatter for JsonTagFormatter {
    fn format(&self, identity: &SoftwareIdentity) -> Result<String> {
        let output = match identity.document() {
            Some(document) => serde_json::to_string_pretty(document)?,
            None => serde_json::to_string_pretty(&iso19770_2::new_document())?,
        };
        Ok(output)
    }
}

impl TagParser for JsonTagFormatter {
    fn parse(&self, content: &str) -> Result<SoftwareIdentity> {
        let document: Element =
            serde_json::from_str(content).context("Malformed JSON software identity document")?;
        SoftwareIdentity::from_document(document)
    }
}
