//! Mapping XML elements onto typed nodes
//!
//! Parsing happens on a complete `XmlElement` tree: `Fields::decompose` splits an element into
//! its attributes and child elements (keyed by local name), and each declared property of the
//! target type then takes its entry through the `Field` implementation of its Rust type.
//!
//! Polymorphic families look at the `xsi:type` discriminator first (`ParseContext::dispatch`).
//!
//! Anything that isn't fatal (unregistered discriminators, duplicated single-valued properties,
//! unknown extensions) is collected as `Diagnostic` in the `ParseContext`.

mod context;
mod fields;

pub use self::{
	context::{
		ParseContext,
		ParseOptions,
	},
	fields::{
		Fields,
		Raw,
		Site,
	},
};

use crate::{
	errors,
	traits::Node,
	Result,
};

/// Parse a nested typed node from a raw property occurrence
///
/// Used by the `Value` implementation of derived types.  Attribute values can't hold nested
/// nodes.
pub fn parse_nested<N: Node>(raw: &Raw<'_>, site: &Site, ctx: &mut ParseContext) -> Result<N> {
	match raw.element() {
		Some(element) => N::parse_node(element, ctx),
		None => Err(errors::value_coercion(site, &raw.text(), "expected element")),
	}
}
