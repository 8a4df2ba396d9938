use super::iso19770_2 as iso;
use super::views::{Entity, Link, SoftwareMetadata};
use super::Element;
use crate::shared::error::SwidError;
use crate::shared::Result;

/// Attributes for a new `Link` element
///
/// `href` and `relationship` are always written; the optional fields are
/// only written when present.
#[derive(Debug, Clone, Default)]
pub struct LinkAttributes<'a> {
    pub href: &'a str,
    pub relationship: &'a str,
    pub media_type: Option<&'a str>,
    pub ownership: Option<&'a str>,
    pub use_: Option<&'a str>,
    pub applies_to_media: Option<&'a str>,
    pub artifact: Option<&'a str>,
}

/// SoftwareIdentity - aggregate record describing one software package
///
/// Identity attributes live on the root element of an owned document tree.
/// The tree is created on the first write; reads never create it and return
/// `None` while it does not exist.
///
/// The remaining fields (provider, source, status, ...) are process-local
/// bookkeeping of the discovery step that produced the record and are never
/// written to the tree.
#[derive(Debug, Clone, Default)]
pub struct SoftwareIdentity {
    fast_package_reference: Option<String>,
    provider_name: Option<String>,
    source: Option<String>,
    status: Option<String>,
    search_key: Option<String>,
    full_path: Option<String>,
    package_filename: Option<String>,
    from_trusted_source: bool,
    swid: Option<Element>,
}

impl SoftwareIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts an existing document tree, e.g. one produced by a tag parser
    ///
    /// # Errors
    /// Returns `SwidError::InvalidDocument` if the root element is not `SoftwareIdentity`
    pub fn from_document(document: Element) -> Result<Self> {
        if document.name() != iso::SOFTWARE_IDENTITY {
            return Err(SwidError::InvalidDocument {
                reason: format!(
                    "root element must be '{}', found '{}'",
                    iso::SOFTWARE_IDENTITY,
                    document.name()
                ),
            }
            .into());
        }

        Ok(Self {
            swid: Some(document),
            ..Self::default()
        })
    }

    /// The document tree, if it has been materialized
    pub fn document(&self) -> Option<&Element> {
        self.swid.as_ref()
    }

    pub fn is_materialized(&self) -> bool {
        self.swid.is_some()
    }

    fn root(&self) -> Option<&Element> {
        self.swid.as_ref()
    }

    fn root_mut(&mut self) -> &mut Element {
        self.swid.get_or_insert_with(iso::new_document)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.root().and_then(|root| root.get(name))
    }

    fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.root_mut().set(name, value);
    }

    // ---- ISO-19770-2 identity attributes ----

    pub fn name(&self) -> Option<&str> {
        self.attribute(iso::NAME)
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.set_attribute(iso::NAME, value);
    }

    pub fn version(&self) -> Option<&str> {
        self.attribute(iso::VERSION)
    }

    pub fn set_version(&mut self, value: impl Into<String>) {
        self.set_attribute(iso::VERSION, value);
    }

    pub fn version_scheme(&self) -> Option<&str> {
        self.attribute(iso::VERSION_SCHEME)
    }

    pub fn set_version_scheme(&mut self, value: impl Into<String>) {
        self.set_attribute(iso::VERSION_SCHEME, value);
    }

    pub fn tag_version(&self) -> Option<&str> {
        self.attribute(iso::TAG_VERSION)
    }

    pub fn set_tag_version(&mut self, value: impl Into<String>) {
        self.set_attribute(iso::TAG_VERSION, value);
    }

    pub fn tag_id(&self) -> Option<&str> {
        self.attribute(iso::TAG_ID)
    }

    pub fn set_tag_id(&mut self, value: impl Into<String>) {
        self.set_attribute(iso::TAG_ID, value);
    }

    pub fn is_patch(&self) -> Option<bool> {
        parse_tri_state(self.attribute(iso::PATCH))
    }

    pub fn set_is_patch(&mut self, value: Option<bool>) {
        self.set_tri_state(iso::PATCH, value);
    }

    pub fn is_supplemental(&self) -> Option<bool> {
        parse_tri_state(self.attribute(iso::SUPPLEMENTAL))
    }

    pub fn set_is_supplemental(&mut self, value: Option<bool>) {
        self.set_tri_state(iso::SUPPLEMENTAL, value);
    }

    pub fn applies_to_media(&self) -> Option<&str> {
        self.attribute(iso::MEDIA)
    }

    pub fn set_applies_to_media(&mut self, value: impl Into<String>) {
        self.set_attribute(iso::MEDIA, value);
    }

    fn set_tri_state(&mut self, name: &str, value: Option<bool>) {
        match value {
            Some(flag) => self.set_attribute(name, flag.to_string()),
            None => {
                if let Some(root) = self.swid.as_mut() {
                    root.remove(name);
                }
            }
        }
    }

    // ---- Meta ----

    /// Summary text from the first `Meta` element that carries one
    pub fn summary(&self) -> Option<&str> {
        self.meta_values(iso::SUMMARY).next()
    }

    /// Records the summary; follows the write-once rule of [`set_meta`](Self::set_meta)
    pub fn set_summary(&mut self, value: &str) -> Result<()> {
        self.set_meta(iso::SUMMARY, value)
    }

    /// All values recorded for `key` across every `Meta` element, in document order
    pub fn meta_values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.root()
            .into_iter()
            .flat_map(|root| root.children(iso::META))
            .filter_map(move |meta| meta.get(key))
    }

    /// Records a metadata value on the first `Meta` element
    ///
    /// A key that already has a non-empty value somewhere in the record can
    /// only be set again to one of its recorded values, which leaves the
    /// tree untouched.
    ///
    /// # Errors
    /// Returns `SwidError::InvalidMetadataMutation` if the key already holds a
    /// different value
    pub fn set_meta(&mut self, key: &str, value: &str) -> Result<()> {
        let recorded: Vec<&str> = self.meta_values(key).filter(|v| !v.is_empty()).collect();

        if recorded.contains(&value) {
            return Ok(());
        }
        if let Some(existing) = recorded.first() {
            return Err(SwidError::InvalidMetadataMutation {
                key: key.to_string(),
                existing: existing.to_string(),
                attempted: value.to_string(),
            }
            .into());
        }

        SoftwareMetadata::new(self.root_mut().first_child_or_insert(iso::META)).set(key, value);
        Ok(())
    }

    /// Live view over the `Meta` elements
    pub fn meta(&self) -> impl Iterator<Item = SoftwareMetadata<&Element>> {
        self.root()
            .into_iter()
            .flat_map(|root| root.children(iso::META))
            .map(SoftwareMetadata::new)
    }

    // ---- Entities ----

    pub fn entities(&self) -> impl Iterator<Item = Entity<&Element>> {
        self.root()
            .into_iter()
            .flat_map(|root| root.children(iso::ENTITY))
            .map(Entity::new)
    }

    pub fn entities_mut(&mut self) -> impl Iterator<Item = Entity<&mut Element>> {
        self.swid
            .as_mut()
            .into_iter()
            .flat_map(|root| root.children_mut(iso::ENTITY))
            .map(Entity::new)
    }

    /// Appends an `Entity` element; entities are an append-only log
    pub fn add_entity(
        &mut self,
        name: &str,
        reg_id: &str,
        role: &str,
        thumbprint: Option<&str>,
    ) -> Entity<&mut Element> {
        let element = Element::new(iso::ENTITY)
            .with(iso::NAME, Some(name))
            .with(iso::REG_ID, Some(reg_id))
            .with(iso::ROLE, Some(role))
            .with(iso::THUMBPRINT, thumbprint);
        Entity::new(self.root_mut().append(element))
    }

    // ---- Links ----

    pub fn links(&self) -> impl Iterator<Item = Link<&Element>> {
        self.root()
            .into_iter()
            .flat_map(|root| root.children(iso::LINK))
            .map(Link::new)
    }

    pub fn links_mut(&mut self) -> impl Iterator<Item = Link<&mut Element>> {
        self.swid
            .as_mut()
            .into_iter()
            .flat_map(|root| root.children_mut(iso::LINK))
            .map(Link::new)
    }

    /// Appends a `Link` element; links are an append-only log
    pub fn add_link(&mut self, attributes: LinkAttributes<'_>) -> Link<&mut Element> {
        let element = Element::new(iso::LINK)
            .with(iso::HREF, Some(attributes.href))
            .with(iso::RELATIONSHIP, Some(attributes.relationship))
            .with(iso::MEDIA_TYPE, attributes.media_type)
            .with(iso::OWNERSHIP, attributes.ownership)
            .with(iso::USE, attributes.use_)
            .with(iso::MEDIA, attributes.applies_to_media)
            .with(iso::ARTIFACT, attributes.artifact);
        Link::new(self.root_mut().append(element))
    }

    // ---- Process-local discovery data ----

    pub fn fast_package_reference(&self) -> Option<&str> {
        self.fast_package_reference.as_deref()
    }

    pub fn set_fast_package_reference(&mut self, value: impl Into<String>) {
        self.fast_package_reference = Some(value.into());
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider_name.as_deref()
    }

    pub fn set_provider_name(&mut self, value: impl Into<String>) {
        self.provider_name = Some(value.into());
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn set_source(&mut self, value: impl Into<String>) {
        self.source = Some(value.into());
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, value: impl Into<String>) {
        self.status = Some(value.into());
    }

    pub fn search_key(&self) -> Option<&str> {
        self.search_key.as_deref()
    }

    pub fn set_search_key(&mut self, value: impl Into<String>) {
        self.search_key = Some(value.into());
    }

    pub fn full_path(&self) -> Option<&str> {
        self.full_path.as_deref()
    }

    pub fn set_full_path(&mut self, value: impl Into<String>) {
        self.full_path = Some(value.into());
    }

    pub fn package_filename(&self) -> Option<&str> {
        self.package_filename.as_deref()
    }

    pub fn set_package_filename(&mut self, value: impl Into<String>) {
        self.package_filename = Some(value.into());
    }

    pub fn from_trusted_source(&self) -> bool {
        self.from_trusted_source
    }

    pub fn set_from_trusted_source(&mut self, value: bool) {
        self.from_trusted_source = value;
    }
}

/// Reads a tri-state flag: absent or blank is `None`, `true` (any case) is
/// `Some(true)`, anything else is `Some(false)`
fn parse_tri_state(value: Option<&str>) -> Option<bool> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    Some(value.eq_ignore_ascii_case("true"))
}
