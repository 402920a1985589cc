//! Selector-based field extraction
//!
//! Pages are queried with a table of named selectors and the matches are
//! copied out into owned [`NodeList`]s, so nothing downstream holds on to
//! the parsed `scraper::Html`.

use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};

use crate::error::{MyCimaError, Result};

/// A matched element: its attributes and its text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    attributes: HashMap<String, String>,
    text: String,
}

impl Node {
    fn from_element(element: ElementRef<'_>) -> Self {
        let attributes = element
            .value()
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self {
            attributes,
            text: element.text().collect(),
        }
    }

    /// Value of attribute `name`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Value of the `href` attribute; `None` when missing or blank.
    pub fn href(&self) -> Option<&str> {
        self.attr("href").filter(|href| !href.trim().is_empty())
    }

    /// Raw text content, whitespace untouched.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Every node a selector matched, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeList {
    nodes: Vec<Node>,
}

impl NodeList {
    /// Number of matched nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the selector matched nothing.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First match in document order.
    pub fn first(&self) -> Option<&Node> {
        self.nodes.first()
    }

    /// Match at `index`.
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Iterate matches in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Text of all nodes concatenated, trimmed.
    ///
    /// Returns `None` when the list is empty, so callers can tell
    /// "nothing matched" from "matched but blank".
    pub fn text(&self) -> Option<String> {
        if self.nodes.is_empty() {
            return None;
        }
        let joined: String = self.nodes.iter().map(Node::text).collect();
        Some(joined.trim().to_string())
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl FromIterator<Node> for NodeList {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

/// Result of querying a page: field name to matched nodes.
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    fields: HashMap<&'static str, NodeList>,
}

impl FieldMap {
    /// Nodes matched for `field`.
    ///
    /// # Errors
    /// `MyCimaError::ElementNotFound` if `field` was not part of the query.
    pub fn get(&self, field: &str) -> Result<&NodeList> {
        self.fields
            .get(field)
            .ok_or_else(|| MyCimaError::ElementNotFound(field.to_string()))
    }
}

/// Run every `(field, selector)` pair against `html`.
///
/// A selector matching nothing yields an empty list. A selector that does not
/// parse is a structural failure and aborts the whole extraction.
///
/// # Errors
/// `MyCimaError::InvalidSelector` for the first selector that fails to parse.
pub fn extract_fields(html: &str, selectors: &[(&'static str, &str)]) -> Result<FieldMap> {
    let compiled = selectors
        .iter()
        .map(|(field, selector)| {
            Selector::parse(selector)
                .map(|parsed| (*field, parsed))
                .map_err(|_| MyCimaError::InvalidSelector {
                    field: field.to_string(),
                    selector: selector.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let document = Html::parse_document(html);
    let fields: HashMap<&'static str, NodeList> = compiled
        .into_iter()
        .map(|(field, selector)| {
            let nodes: NodeList = document.select(&selector).map(Node::from_element).collect();
            (field, nodes)
        })
        .collect();

    Ok(FieldMap { fields })
}
