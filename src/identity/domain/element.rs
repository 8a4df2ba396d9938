use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Element - one node of an identity document tree
///
/// Each element carries a name, a set of string attributes and an ordered
/// list of child elements. This is the minimal structured-document model the
/// identity record needs; concrete text syntaxes live in the formatter adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute value, or `None` if the attribute is not present
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }

    pub fn set(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(attribute.into(), value.into());
    }

    pub fn remove(&mut self, attribute: &str) -> Option<String> {
        self.attributes.remove(attribute)
    }

    /// Builder-style setter; `None` leaves the attribute unset
    pub fn with(mut self, attribute: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.set(attribute, value);
        }
        self
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Child elements with the given name, in document order
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn children_mut<'a>(
        &'a mut self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a mut Element> + 'a {
        self.children.iter_mut().filter(move |c| c.name == name)
    }

    pub fn all_children(&self) -> &[Element] {
        &self.children
    }

    /// Returns the first child with the given name, appending an empty one if none exists
    pub fn first_child_or_insert(&mut self, name: &str) -> &mut Element {
        match self.children.iter().position(|c| c.name == name) {
            Some(index) => &mut self.children[index],
            None => self.append(Element::new(name)),
        }
    }

    /// Appends a child and returns a mutable reference to it
    pub fn append(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }
}
