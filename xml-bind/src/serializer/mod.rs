//! Emitting typed nodes as XML elements
//!
//! `ElementBuilder` wraps the element being built; `Node::build_node` adds attributes and
//! children to it.  Nested nodes get their own builder, with the prefix derived from the
//! namespace of their descriptor through the `BuildContext`'s namespace table.
//!
//! The result is an `XmlElement` tree; the `quick_xml` adaptor writes it out.

mod builder;

pub use self::builder::{
	BuildContext,
	ElementBuilder,
};

/// Output configuration
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WriteOptions {
	/// Indent nested elements by two spaces per level
	pub indent: bool,
}

impl WriteOptions {
	/// Default options (indented)
	pub fn new() -> Self {
		Self::default()
	}

	/// Set `indent`
	pub fn indent(mut self, indent: bool) -> Self {
		self.indent = indent;
		self
	}
}

impl Default for WriteOptions {
	fn default() -> Self {
		Self { indent: true }
	}
}
