//! Namespace context for element lookups.
//!
//! Prism documents come in two equivalent forms: bare tag names, or every
//! tag qualified under the single Prism namespace URI (declared either as
//! the default `xmlns` or through one prefix on the root). The context is
//! derived once at document-validation time and applied uniformly to all
//! child lookups, so the extraction code never deals with prefixes itself.

use crate::xml::element::XmlElement;

/// Namespace context: empty, or one namespace applied to every lookup.
#[derive(Debug, Clone, Default)]
pub struct NsContext {
    prefix: Option<String>,
    uri: Option<String>,
}

impl NsContext {
    /// Context for documents without a namespace (and for documents using a
    /// default `xmlns` declaration, where tag names stay unprefixed).
    pub fn none() -> Self {
        Self::default()
    }

    /// Context for a document whose tags carry `prefix:` bound to `uri`.
    pub fn prefixed(prefix: &str, uri: &str) -> Self {
        Self {
            prefix: Some(prefix.to_string()),
            uri: Some(uri.to_string()),
        }
    }

    /// Context for a default-namespace document (unprefixed tags bound to
    /// `uri` via `xmlns`).
    pub fn default_namespace(uri: &str) -> Self {
        Self {
            prefix: None,
            uri: Some(uri.to_string()),
        }
    }

    /// The namespace URI in effect, if any.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Whether `element` matches `local` under this context.
    fn matches(&self, element: &XmlElement, local: &str) -> bool {
        element.prefix() == self.prefix.as_deref() && element.local_name() == local
    }

    /// Child elements of `parent` named `local`, in document order.
    pub fn children<'a>(
        &'a self,
        parent: &'a XmlElement,
        local: &'a str,
    ) -> impl Iterator<Item = &'a XmlElement> + 'a {
        parent
            .child_elements()
            .filter(move |child| self.matches(child, local))
    }

    /// First child element of `parent` named `local`.
    pub fn find_child<'a>(&self, parent: &'a XmlElement, local: &str) -> Option<&'a XmlElement> {
        parent
            .child_elements()
            .find(|child| self.matches(child, local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_lookup() {
        let root = XmlElement::parse("<Root><A>1</A><B/><A>2</A></Root>").unwrap();
        let ns = NsContext::none();
        let found: Vec<String> = ns.children(&root, "A").map(|e| e.flat_text()).collect();
        assert_eq!(found, vec!["1", "2"]);
        assert!(ns.find_child(&root, "B").is_some());
        assert!(ns.find_child(&root, "C").is_none());
    }

    #[test]
    fn test_prefixed_lookup_ignores_bare_children() {
        let root =
            XmlElement::parse(r#"<p:Root xmlns:p="urn:x"><p:A>1</p:A><A>bare</A></p:Root>"#)
                .unwrap();
        let ns = NsContext::prefixed("p", "urn:x");
        let found: Vec<String> = ns.children(&root, "A").map(|e| e.flat_text()).collect();
        assert_eq!(found, vec!["1"]);
    }

    #[test]
    fn test_default_namespace_lookup() {
        let root = XmlElement::parse(r#"<Root xmlns="urn:x"><A>1</A></Root>"#).unwrap();
        let ns = NsContext::default_namespace("urn:x");
        assert_eq!(ns.uri(), Some("urn:x"));
        assert_eq!(ns.find_child(&root, "A").unwrap().flat_text(), "1");
    }
}
