//! Lightweight XML element tree.
//!
//! The Prism format is small enough that the whole document is materialized
//! as an owned element tree before extraction begins; the table extractor
//! then navigates the tree instead of re-tokenizing. The tree is built from
//! quick-xml events and keeps mixed content (text interleaved with child
//! elements) in document order, which is what makes flattening titles and
//! data points split across nested formatting markup straightforward.

pub mod element;
pub mod escape;
pub mod namespace;

// Re-exports
pub use element::{XmlElement, XmlNode};
pub use escape::unescape_xml;
pub use namespace::NsContext;
