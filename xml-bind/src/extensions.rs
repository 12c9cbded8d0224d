//! Open extension containers
//!
//! An `<Extensions>` element may contain anything.  Children whose tag is registered (through an
//! `Extension` implementation) are parsed into typed values; everything else is retained as opaque
//! `XmlElement` and emitted again unchanged, so no vendor data gets lost in a round trip.

use crate::{
	diagnostic::Diagnostic,
	dom::XmlElement,
	namespace::NamespaceBinding,
	parser::{
		self,
		ParseContext,
		Raw,
		Site,
	},
	schema::{
		PropertyDescriptor,
		TypeDescriptor,
		ValueKind,
	},
	serializer::ElementBuilder,
	traits::Node,
	value::Value,
	Result,
};

/// Registry of typed extension elements, usually an enum with one variant per known tag
pub trait Extension: Sized {
	/// Descriptor of the container type
	const DESCRIPTOR: &'static TypeDescriptor;

	/// Parse `element` if its local tag is registered; `None` if it is unknown.
	fn parse_extension(element: &XmlElement, ctx: &mut ParseContext) -> Result<Option<Self>>;

	/// Tag the value is emitted as
	fn tag(&self) -> &'static str;

	/// Emit as child of the container
	fn build_extension(&self, out: &mut ElementBuilder<'_>) -> Result<()>;
}

/// Entry of an extension container
#[derive(Clone, PartialEq, Debug)]
pub enum ExtensionEntry<E> {
	/// Registered extension
	Known(E),
	/// Unregistered extension, kept as is
	Opaque(XmlElement),
}

impl<E: Extension> ExtensionEntry<E> {
	/// Local tag of the entry
	pub fn tag(&self) -> &str {
		match self {
			ExtensionEntry::Known(e) => e.tag(),
			ExtensionEntry::Opaque(element) => &element.name,
		}
	}

	/// Typed value, if registered
	pub fn known(&self) -> Option<&E> {
		match self {
			ExtensionEntry::Known(e) => Some(e),
			ExtensionEntry::Opaque(_) => None,
		}
	}

	/// Retained element, if not registered
	pub fn opaque(&self) -> Option<&XmlElement> {
		match self {
			ExtensionEntry::Known(_) => None,
			ExtensionEntry::Opaque(element) => Some(element),
		}
	}
}

/// Ordered extension entries; repeated tags are all kept
#[derive(Clone, PartialEq, Debug)]
pub struct ExtensionMap<E> {
	entries: Vec<ExtensionEntry<E>>,
}

impl<E> Default for ExtensionMap<E> {
	fn default() -> Self {
		Self { entries: Vec::new() }
	}
}

impl<E: Extension> ExtensionMap<E> {
	/// Empty container
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of entries
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether there are no entries
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entries in document order
	pub fn iter(&self) -> std::slice::Iter<'_, ExtensionEntry<E>> {
		self.entries.iter()
	}

	/// Registered entries
	pub fn known(&self) -> impl Iterator<Item = &E> {
		self.entries.iter().filter_map(ExtensionEntry::known)
	}

	/// Retained entries
	pub fn opaque(&self) -> impl Iterator<Item = &XmlElement> {
		self.entries.iter().filter_map(ExtensionEntry::opaque)
	}

	/// First entry with local tag `tag`
	pub fn get(&self, tag: &str) -> Option<&ExtensionEntry<E>> {
		self.entries.iter().find(|e| e.tag() == tag)
	}

	/// Append typed entry
	pub fn push(&mut self, extension: E) {
		self.entries.push(ExtensionEntry::Known(extension));
	}

	/// Append retained element
	pub fn push_opaque(&mut self, element: XmlElement) {
		self.entries.push(ExtensionEntry::Opaque(element));
	}

	/// Parse all children of an extension container element
	pub fn parse_extensions(element: &XmlElement, ctx: &mut ParseContext) -> Result<Self> {
		let mut map = Self::new();
		for child in element.elements() {
			match E::parse_extension(child, ctx)? {
				Some(extension) => map.push(extension),
				None => {
					log::debug!("unknown extension <{}>, keeping it as is", child.qualified_name());
					ctx.report(Diagnostic::UnknownExtension {
						tag: child.qualified_name().into_owned(),
					});
					map.push_opaque(self_contained(child, ctx));
				},
			}
		}
		Ok(map)
	}

	/// Emit all entries in order
	pub fn build_extensions(&self, out: &mut ElementBuilder<'_>) -> Result<()> {
		for entry in &self.entries {
			match entry {
				ExtensionEntry::Known(extension) => extension.build_extension(out)?,
				ExtensionEntry::Opaque(element) => out.opaque(element),
			}
		}
		Ok(())
	}
}

impl<'a, E> IntoIterator for &'a ExtensionMap<E> {
	type IntoIter = std::slice::Iter<'a, ExtensionEntry<E>>;
	type Item = &'a ExtensionEntry<E>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl<E: Extension> Node for ExtensionMap<E> {
	const DESCRIPTOR: &'static TypeDescriptor = E::DESCRIPTOR;

	fn parse_node(element: &XmlElement, ctx: &mut ParseContext) -> Result<Self> {
		Self::parse_extensions(element, ctx)
	}

	fn build_node(&self, out: &mut ElementBuilder<'_>) -> Result<()> {
		self.build_extensions(out)
	}
}

impl<E: Extension> Value for ExtensionMap<E> {
	const KIND: ValueKind = ValueKind::Extensions;

	fn parse_value(raw: &Raw<'_>, site: &Site, ctx: &mut ParseContext) -> Result<Self> {
		parser::parse_nested(raw, site, ctx)
	}

	fn build_value(&self, property: &'static PropertyDescriptor, out: &mut ElementBuilder<'_>) -> Result<()> {
		out.node(property.tag, self)
	}
}

/// Copy `element`, declaring every prefix it uses that the document root doesn't bind the same way
fn self_contained(element: &XmlElement, ctx: &ParseContext) -> XmlElement {
	let mut used: Vec<(Option<String>, String)> = Vec::new();
	element.walk(&mut |e| {
		if let Some(namespace) = &e.namespace {
			used.push((e.prefix.clone(), namespace.clone()));
		}
		for attr in &e.attributes {
			if let (Some(prefix), Some(namespace)) = (&attr.prefix, &attr.namespace) {
				used.push((Some(prefix.clone()), namespace.clone()));
			}
		}
	});

	let mut retained = element.clone();
	for (prefix, namespace) in used {
		if ctx.namespaces().uri_for(prefix.as_deref()) == Some(namespace.as_str()) {
			continue;
		}
		let declared = |bindings: &[NamespaceBinding]| bindings.iter().any(|b| b.prefix == prefix);
		if declared(&retained.namespaces) {
			continue;
		}
		let binding = NamespaceBinding {
			prefix,
			uri: namespace,
		};
		retained.namespaces.push(binding);
	}
	retained
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		namespace::NamespaceTable,
		test_struct::{
			sample_extensions,
			Extensions,
			SampleExtension,
		},
	};

	#[test]
	fn unknown_tags_are_retained() {
		let mut ctx = ParseContext::default();
		let map = Extensions::parse_extensions(&sample_extensions(), &mut ctx).unwrap();
		assert_eq!(map.len(), 3);
		assert_eq!(map.known().count(), 1);
		assert!(matches!(map.get("Speed"), Some(ExtensionEntry::Known(SampleExtension::Speed(_)))));
		assert_eq!(map.get("Vendor").and_then(ExtensionEntry::opaque).map(|e| e.text_content()), Some("42".into()));
		assert_eq!(
			ctx.diagnostics(),
			[
				Diagnostic::UnknownExtension { tag: "v:Vendor".into() },
				Diagnostic::UnknownExtension { tag: "Plain".into() },
			]
		);
	}

	#[test]
	fn opaque_subtrees_become_self_contained() {
		let mut table = NamespaceTable::new();
		table.bind(None, "urn:root");
		let mut ctx = ParseContext::new(Default::default(), table);
		let map = Extensions::parse_extensions(&sample_extensions(), &mut ctx).unwrap();
		let vendor = map.get("Vendor").and_then(ExtensionEntry::opaque).unwrap();
		assert_eq!(vendor.namespaces, [NamespaceBinding::new(Some("v"), "urn:vendor")]);

		// bound the same way at the root: nothing to declare
		let mut table = NamespaceTable::new();
		table.bind(Some("v"), "urn:vendor");
		let mut ctx = ParseContext::new(Default::default(), table);
		let map = Extensions::parse_extensions(&sample_extensions(), &mut ctx).unwrap();
		let vendor = map.get("Vendor").and_then(ExtensionEntry::opaque).unwrap();
		assert!(vendor.namespaces.is_empty());
	}
}
