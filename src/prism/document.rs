//! Document-level validation and table enumeration.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::prism::extract::extract_table;
use crate::prism::table::DataTable;
use crate::xml::{NsContext, XmlElement};

/// Namespace URI used by namespaced Prism documents.
pub const PRISM_NAMESPACE: &str = "http://graphpad.com/prism/Prism.htm";

/// Expected root tag (bare, or qualified under [`PRISM_NAMESPACE`]).
pub const ROOT_TAG: &str = "GraphPadPrismFile";

/// The only supported `PrismXMLVersion` value.
pub const SUPPORTED_VERSION: &str = "5.00";

/// A parsed Prism file: data tables keyed by their title.
///
/// Tables whose titles collide keep only the last one in document order;
/// the mapping itself is unordered. This mirrors the source format's
/// behavior and is documented rather than corrected.
#[derive(Debug, Clone, Default)]
pub struct PrismFile {
    tables: HashMap<String, DataTable>,
}

impl PrismFile {
    /// Open and parse a `.pzfx` file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a Prism document from its XML text.
    ///
    /// Validates the root tag (bare or namespaced form) and the
    /// `PrismXMLVersion` attribute, then extracts every top-level `Table`
    /// in document order.
    pub fn parse(xml: &str) -> Result<Self> {
        let root = XmlElement::parse(xml)?;

        if root.local_name() != ROOT_TAG {
            return Err(Error::NotPrismFile(format!(
                "unexpected root tag {:?}",
                root.name()
            )));
        }
        let ns = namespace_context(&root)?;

        let version = root.attribute("PrismXMLVersion").ok_or_else(|| {
            Error::NotPrismFile("missing PrismXMLVersion attribute".to_string())
        })?;
        if version != SUPPORTED_VERSION {
            return Err(Error::UnsupportedVersion(version.to_string()));
        }

        let mut tables = HashMap::new();
        for table in ns.children(&root, "Table") {
            let title = ns
                .find_child(table, "Title")
                .ok_or_else(|| {
                    Error::InvalidFormat("Table is missing a Title element".to_string())
                })?
                .flat_text();
            tables.insert(title, extract_table(table, &ns)?);
        }

        Ok(PrismFile { tables })
    }

    /// All tables, keyed by title.
    pub fn tables(&self) -> &HashMap<String, DataTable> {
        &self.tables
    }

    /// Look up one table by its title.
    pub fn table(&self, title: &str) -> Option<&DataTable> {
        self.tables.get(title)
    }

    /// Table titles in sorted order.
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        titles.sort_unstable();
        titles
    }

    /// Number of tables in the file.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the file contains no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Derive the namespace context from the root element.
///
/// Accepted forms: no namespace at all, the Prism URI as the default
/// `xmlns`, or the Prism URI bound to the root's own prefix. Any other
/// namespace means this is not a Prism file.
fn namespace_context(root: &XmlElement) -> Result<NsContext> {
    match root.prefix() {
        Some(prefix) => match root.namespace_declaration(Some(prefix)) {
            Some(PRISM_NAMESPACE) => Ok(NsContext::prefixed(prefix, PRISM_NAMESPACE)),
            Some(uri) => Err(Error::NotPrismFile(format!(
                "unexpected namespace {uri:?}"
            ))),
            None => Err(Error::NotPrismFile(format!(
                "undeclared namespace prefix {prefix:?}"
            ))),
        },
        None => match root.namespace_declaration(None) {
            Some(PRISM_NAMESPACE) => Ok(NsContext::default_namespace(PRISM_NAMESPACE)),
            Some(uri) => Err(Error::NotPrismFile(format!(
                "unexpected namespace {uri:?}"
            ))),
            None => Ok(NsContext::none()),
        },
    }
}
