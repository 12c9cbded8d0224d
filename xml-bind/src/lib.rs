#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/xml-bind/0.1.0")]
//! This library maps XML documents onto trees of typed nodes and back, driven by a static
//! descriptor per type: which properties a type has, whether each one is an attribute or a child
//! element, how often it may occur and how its text is converted.
//!
//! Unlike generic serialization frameworks the mapping is XML specific and keeps what XML
//! documents in the wild need for a lossless round trip:
//! - polymorphic elements selected by `xsi:type` (`Polymorphic` families with a fallback)
//! - namespace prefixes of vendor extensions, re-declared on the output root
//! - unknown extension elements, retained as opaque subtrees (`extensions::ExtensionMap`)
//!
//! Documents are read completely into an `XmlElement` tree (using
//! [`quick-xml`](https://crates.io/crates/quick-xml)) before mapping.
//!
//! If the `derive` feature is enabled (default) `Node` can be derived; see `xml-bind-derive` for
//! the supported attributes.
//!
//! ```
//! use xml_bind::{Document, Node, Root};
//!
//! #[derive(Node, Clone, PartialEq, Debug)]
//! pub struct Playlist {
//! 	#[xml_bind(attr)]
//! 	pub name: Option<String>,
//! 	#[xml_bind(tag = "Track")]
//! 	pub tracks: Vec<String>,
//! }
//!
//! impl Root for Playlist {
//! 	const TAG: &'static str = "Playlist";
//! 	const NAMESPACE: &'static str = "urn:example:playlist";
//! }
//!
//! let doc = Document::<Playlist>::from_str(
//! 	r#"<Playlist xmlns="urn:example:playlist" Name="mix"><Track>one</Track></Playlist>"#,
//! )
//! .unwrap();
//! assert_eq!(doc.root.name.as_deref(), Some("mix"));
//! assert_eq!(doc.root.tracks, ["one"]);
//! assert!(doc.to_xml_string().unwrap().contains("<Track>one</Track>"));
//! ```

pub mod diagnostic;
pub mod document;
pub mod dom;
pub mod errors;
pub mod extensions;
pub mod namespace;
pub mod parser;
pub mod quick_xml;
pub mod schema;
pub mod serializer;
mod traits;
mod value;

#[cfg(test)]
mod test_struct;

pub use self::{
	diagnostic::Diagnostic,
	document::Document,
	errors::Error,
	traits::{
		Node,
		Polymorphic,
		Root,
	},
	value::{
		Field,
		TextValue,
		Value,
		TIMESTAMP_FORMAT,
	},
};

/// Result alias with our error type included
pub type Result<T> = std::result::Result<T, Error>;

#[cfg_attr(doc_cfg, doc(cfg(feature = "derive")))]
#[cfg(feature = "derive")]
pub use xml_bind_derive::Node;
