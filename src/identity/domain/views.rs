//! Typed projections over `Meta`, `Entity` and `Link` elements.
//!
//! A view borrows its backing element instead of copying it, so a view
//! obtained from a `SoftwareIdentity` always reflects the current tree.
//! Read-only views wrap `&'a Element` and hand out `&'a str` values that
//! outlive the view itself. Mutable views wrap `&mut Element` (anything
//! implementing `BorrowMut<Element>`) and read through `as_view`.

use super::iso19770_2 as iso;
use super::Element;
use std::borrow::{Borrow, BorrowMut};

/// SoftwareMetadata - free-form key/value view over one `Meta` element
#[derive(Debug, Clone, Copy)]
pub struct SoftwareMetadata<E> {
    element: E,
}

impl<E> SoftwareMetadata<E> {
    pub(crate) fn new(element: E) -> Self {
        Self { element }
    }
}

impl<'a> SoftwareMetadata<&'a Element> {
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.element.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        let element: &'a Element = self.element;
        element.attributes()
    }

    pub fn len(&self) -> usize {
        self.element.attribute_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: BorrowMut<Element>> SoftwareMetadata<E> {
    pub fn as_view(&self) -> SoftwareMetadata<&Element> {
        SoftwareMetadata::new(self.element.borrow())
    }

    // Unchecked write; the set-once rule is enforced by SoftwareIdentity::set_meta.
    pub(crate) fn set(&mut self, key: &str, value: &str) {
        self.element.borrow_mut().set(key, value);
    }
}

/// Entity - a party (publisher, author, distributor) named by the tag
#[derive(Debug, Clone, Copy)]
pub struct Entity<E> {
    element: E,
}

impl<E> Entity<E> {
    pub(crate) fn new(element: E) -> Self {
        Self { element }
    }
}

impl<'a> Entity<&'a Element> {
    pub fn name(&self) -> Option<&'a str> {
        self.element.get(iso::NAME)
    }

    pub fn reg_id(&self) -> Option<&'a str> {
        self.element.get(iso::REG_ID)
    }

    pub fn role(&self) -> Option<&'a str> {
        self.element.get(iso::ROLE)
    }

    pub fn thumbprint(&self) -> Option<&'a str> {
        self.element.get(iso::THUMBPRINT)
    }
}

impl<E: BorrowMut<Element>> Entity<E> {
    pub fn as_view(&self) -> Entity<&Element> {
        Entity::new(self.element.borrow())
    }

    pub fn set_name(&mut self, value: &str) {
        self.element.borrow_mut().set(iso::NAME, value);
    }

    pub fn set_reg_id(&mut self, value: &str) {
        self.element.borrow_mut().set(iso::REG_ID, value);
    }

    pub fn set_role(&mut self, value: &str) {
        self.element.borrow_mut().set(iso::ROLE, value);
    }

    pub fn set_thumbprint(&mut self, value: &str) {
        self.element.borrow_mut().set(iso::THUMBPRINT, value);
    }
}

/// Link - a relationship between the tagged software and another artifact
#[derive(Debug, Clone, Copy)]
pub struct Link<E> {
    element: E,
}

impl<E> Link<E> {
    pub(crate) fn new(element: E) -> Self {
        Self { element }
    }
}

impl<'a> Link<&'a Element> {
    pub fn href(&self) -> Option<&'a str> {
        self.element.get(iso::HREF)
    }

    pub fn relationship(&self) -> Option<&'a str> {
        self.element.get(iso::RELATIONSHIP)
    }

    pub fn media_type(&self) -> Option<&'a str> {
        self.element.get(iso::MEDIA_TYPE)
    }

    pub fn ownership(&self) -> Option<&'a str> {
        self.element.get(iso::OWNERSHIP)
    }

    pub fn use_(&self) -> Option<&'a str> {
        self.element.get(iso::USE)
    }

    pub fn applies_to_media(&self) -> Option<&'a str> {
        self.element.get(iso::MEDIA)
    }

    pub fn artifact(&self) -> Option<&'a str> {
        self.element.get(iso::ARTIFACT)
    }
}

impl<E: BorrowMut<Element>> Link<E> {
    pub fn as_view(&self) -> Link<&Element> {
        Link::new(self.element.borrow())
    }

    pub fn set_href(&mut self, value: &str) {
        self.element.borrow_mut().set(iso::HREF, value);
    }

    pub fn set_relationship(&mut self, value: &str) {
        self.element.borrow_mut().set(iso::RELATIONSHIP, value);
    }

    pub fn set_media_type(&mut self, value: &str) {
        self.element.borrow_mut().set(iso::MEDIA_TYPE, value);
    }

    pub fn set_ownership(&mut self, value: &str) {
        self.element.borrow_mut().set(iso::OWNERSHIP, value);
    }

    pub fn set_use(&mut self, value: &str) {
        self.element.borrow_mut().set(iso::USE, value);
    }

    pub fn set_applies_to_media(&mut self, value: &str) {
        self.element.borrow_mut().set(iso::MEDIA, value);
    }

    pub fn set_artifact(&mut self, value: &str) {
        self.element.borrow_mut().set(iso::ARTIFACT, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_view_reads_attributes() {
        let mut element = Element::new(iso::META);
        element.set("summary", "HTTP library");
        element.set("description", "Long text");

        let meta = SoftwareMetadata::new(&element);
        assert_eq!(meta.get("summary"), Some("HTTP library"));
        assert!(meta.contains_key("description"));
        assert!(!meta.contains_key("license"));
        assert_eq!(meta.len(), 2);
        assert_eq!(meta.keys().collect::<Vec<_>>(), vec!["description", "summary"]);
    }

    #[test]
    fn test_empty_metadata_view() {
        let element = Element::new(iso::META);
        let meta = SoftwareMetadata::new(&element);
        assert!(meta.is_empty());
        assert_eq!(meta.iter().count(), 0);
    }

    #[test]
    fn test_entity_view_writes_through_to_element() {
        let mut element = Element::new(iso::ENTITY);
        {
            let mut entity = Entity::new(&mut element);
            entity.set_name("Contoso");
            entity.set_reg_id("contoso.com");
            entity.set_role("publisher");
        }
        assert_eq!(element.get(iso::NAME), Some("Contoso"));
        assert_eq!(element.get(iso::REG_ID), Some("contoso.com"));

        let entity = Entity::new(&element);
        assert_eq!(entity.role(), Some("publisher"));
        assert_eq!(entity.thumbprint(), None);
    }

    #[test]
    fn test_link_view_uses_media_attribute_for_applies_to_media() {
        let mut element = Element::new(iso::LINK);
        {
            let mut link = Link::new(&mut element);
            link.set_href("https://example.com/pkg.zip");
            link.set_applies_to_media("(OS:windows)");
            link.set_use("required");
        }
        let link = Link::new(&element);
        assert_eq!(link.href(), Some("https://example.com/pkg.zip"));
        assert_eq!(link.applies_to_media(), Some("(OS:windows)"));
        assert_eq!(element.get(iso::MEDIA), Some("(OS:windows)"));
        assert_eq!(link.use_(), Some("required"));
        assert_eq!(link.artifact(), None);
    }

    #[test]
    fn test_read_views_outlive_the_view_itself() {
        let mut root = Element::new(iso::SOFTWARE_IDENTITY);
        root.append(Element::new(iso::ENTITY).with(iso::ROLE, Some("publisher")));
        root.append(Element::new(iso::LINK).with(iso::HREF, Some("a")));
        root.append(Element::new(iso::META).with("summary", Some("text")));

        let roles: Vec<&str> = root
            .children(iso::ENTITY)
            .map(Entity::new)
            .filter_map(|e| e.role())
            .collect();
        let hrefs: Vec<&str> = root
            .children(iso::LINK)
            .map(Link::new)
            .filter_map(|l| l.href())
            .collect();
        let keys: Vec<&str> = root
            .children(iso::META)
            .map(SoftwareMetadata::new)
            .flat_map(|m| m.keys())
            .collect();

        assert_eq!(roles, vec!["publisher"]);
        assert_eq!(hrefs, vec!["a"]);
        assert_eq!(keys, vec!["summary"]);
    }

    #[test]
    fn test_mutable_view_reads_through_as_view() {
        let mut element = Element::new(iso::LINK);
        let mut link = Link::new(&mut element);
        link.set_relationship("requires");
        assert_eq!(link.as_view().relationship(), Some("requires"));
    }
}
