use crate::{
	dom::XmlElement,
	parser::ParseContext,
	schema::TypeDescriptor,
	serializer::ElementBuilder,
	Result,
};

/// A typed node mapped to an XML element
///
/// The element's own tag is chosen by whoever contains the node (property tag or document root);
/// the node itself handles attributes and children.
///
/// Usually derived with `#[derive(Node)]`.
pub trait Node: Sized {
	/// Descriptor of the type (for enums: the base of the family)
	const DESCRIPTOR: &'static TypeDescriptor;

	/// Descriptor of this value; enums return the descriptor of the active alternative.
	fn descriptor(&self) -> &'static TypeDescriptor {
		Self::DESCRIPTOR
	}

	/// Map an element onto a new node
	fn parse_node(element: &XmlElement, ctx: &mut ParseContext) -> Result<Self>;

	/// Emit attributes and children into the current element
	fn build_node(&self, out: &mut ElementBuilder<'_>) -> Result<()>;
}

/// A family of node types selected by `xsi:type`
pub trait Polymorphic: Node {
	/// Registry of alternatives, including the base type
	const VARIANTS: &'static [&'static TypeDescriptor];
}

/// Node used as document root
pub trait Root: Node {
	/// Local name of the root element
	const TAG: &'static str;
	/// Default namespace of the format
	const NAMESPACE: &'static str;
	/// `xsi:schemaLocation` emitted when the document didn't have one
	const SCHEMA_LOCATION: Option<&'static str> = None;
	/// Prefixes registered for vendor namespaces unless the document binds them itself
	const NAMESPACES: &'static [(&'static str, &'static str)] = &[];
}
