use crate::{
	diagnostic::Diagnostic,
	dom::{
		XmlAttribute,
		XmlElement,
	},
	namespace::{
		NamespaceTable,
		XSI_NAMESPACE,
		XSI_PREFIX,
	},
	schema::{
		PropertyDescriptor,
		TypeDescriptor,
	},
	traits::Node,
	value::Field,
	Result,
};
use std::collections::BTreeSet;

/// State shared by all elements of a single build
#[derive(Clone, Debug, Default)]
pub struct BuildContext {
	namespaces: NamespaceTable,
	used: BTreeSet<String>,
	diagnostics: Vec<Diagnostic>,
}

impl BuildContext {
	/// New context resolving prefixes through `namespaces`
	pub fn new(namespaces: NamespaceTable) -> Self {
		Self {
			namespaces,
			used: BTreeSet::new(),
			diagnostics: Vec::new(),
		}
	}

	/// Bindings available for output
	pub fn namespaces(&self) -> &NamespaceTable {
		&self.namespaces
	}

	/// Whether an element or attribute used `prefix`
	pub fn is_used(&self, prefix: &str) -> bool {
		self.used.contains(prefix)
	}

	/// Record that `prefix` needs a declaration on the root
	pub fn mark_used(&mut self, prefix: &str) {
		if !self.used.contains(prefix) {
			self.used.insert(prefix.into());
		}
	}

	/// Diagnostics collected so far
	pub fn diagnostics(&self) -> &[Diagnostic] {
		&self.diagnostics
	}

	/// Take the collected diagnostics
	pub fn into_diagnostics(self) -> Vec<Diagnostic> {
		self.diagnostics
	}

	/// Record a diagnostic
	pub fn report(&mut self, diagnostic: Diagnostic) {
		self.diagnostics.push(diagnostic);
	}

	/// Prefix for elements of type `descriptor` nested in an element with `parent` prefix
	fn prefix_for(&mut self, descriptor: &'static TypeDescriptor, parent: Option<&str>) -> Option<String> {
		let namespace = descriptor.namespace?;
		match self.namespaces.prefix_for(namespace) {
			Some(None) => None,
			Some(Some(prefix)) => {
				let prefix = prefix.to_owned();
				self.mark_used(&prefix);
				Some(prefix)
			},
			None => {
				log::warn!("{}: no prefix bound for namespace {}", descriptor.name, namespace);
				self.report(Diagnostic::MissingNamespacePrefix {
					type_name: descriptor.name,
					namespace,
				});
				parent.map(String::from)
			},
		}
	}

	fn xsi_prefix(&mut self) -> String {
		let prefix = match self.namespaces.prefix_for(XSI_NAMESPACE) {
			Some(Some(prefix)) => prefix.to_owned(),
			_ => String::from(XSI_PREFIX),
		};
		self.mark_used(&prefix);
		prefix
	}

	/// Mark root-bound prefixes used inside a retained subtree
	fn mark_subtree(&mut self, element: &XmlElement) {
		let mut found = Vec::new();
		element.walk(&mut |e| {
			let names = std::iter::once((e.prefix.as_deref(), e.namespace.as_deref()))
				.chain(e.attributes.iter().map(|a| (a.prefix.as_deref(), a.namespace.as_deref())));
			for (prefix, namespace) in names {
				if let (Some(prefix), Some(namespace)) = (prefix, namespace) {
					found.push((prefix.to_owned(), namespace.to_owned()));
				}
			}
		});
		for (prefix, namespace) in found {
			if self.namespaces.uri_for(Some(&prefix)) == Some(namespace.as_str()) {
				self.mark_used(&prefix);
			}
		}
	}
}

/// The element currently being built
#[derive(Debug)]
pub struct ElementBuilder<'a> {
	element: XmlElement,
	ctx: &'a mut BuildContext,
}

impl<'a> ElementBuilder<'a> {
	/// Start building `element`
	pub fn new(element: XmlElement, ctx: &'a mut BuildContext) -> Self {
		Self { element, ctx }
	}

	/// Element built so far
	pub fn element(&self) -> &XmlElement {
		&self.element
	}

	/// Shared build state
	pub fn context(&mut self) -> &mut BuildContext {
		self.ctx
	}

	/// Add unprefixed attribute
	pub fn attribute(&mut self, key: &str, value: impl Into<String>) {
		self.element.attributes.push(XmlAttribute::new(key, value));
	}

	/// Add `xsi:type` attribute
	pub fn discriminator(&mut self, value: &str) {
		let prefix = self.ctx.xsi_prefix();
		self.element.attributes.push(XmlAttribute {
			prefix: Some(prefix),
			name: "type".into(),
			namespace: Some(XSI_NAMESPACE.into()),
			value: value.into(),
		});
	}

	/// Add child element with text, in the namespace (and with the prefix) of this element
	pub fn text_element(&mut self, tag: &str, text: impl Into<String>) {
		let mut child = XmlElement::new(self.element.prefix.clone(), tag);
		child.namespace = self.element.namespace.clone();
		child.push_text(text);
		self.element.push_element(child);
	}

	/// Add nested node as child element `tag`
	pub fn node<N: Node>(&mut self, tag: &str, node: &N) -> Result<()> {
		let descriptor = node.descriptor();
		// nodes without a namespace of their own stay in the parent's namespace
		let (prefix, namespace) = match descriptor.namespace {
			Some(namespace) => (
				self.ctx.prefix_for(descriptor, self.element.prefix.as_deref()),
				Some(namespace.into()),
			),
			None => (self.element.prefix.clone(), self.element.namespace.clone()),
		};
		let mut child = XmlElement::new(prefix, tag);
		child.namespace = namespace;
		let mut nested = ElementBuilder::new(child, &mut *self.ctx);
		node.build_node(&mut nested)?;
		let child = nested.finish();
		self.element.push_element(child);
		Ok(())
	}

	/// Emit a declared property
	pub fn property<F: Field>(&mut self, property: &'static PropertyDescriptor, value: &F) -> Result<()> {
		value.build_field(property, self)
	}

	/// Add retained element literally
	pub fn opaque(&mut self, element: &XmlElement) {
		self.ctx.mark_subtree(element);
		self.element.push_element(element.clone());
	}

	/// Done; return the element
	pub fn finish(self) -> XmlElement {
		self.element
	}
}

#[cfg(test)]
mod test {
	use super::*;

	static SPEED: TypeDescriptor = TypeDescriptor {
		name: "ActivityTrackpointExtension_t",
		properties: &[],
		namespace: Some("http://www.garmin.com/xmlschemas/ActivityExtension/v2"),
		discriminator: None,
	};

	static ORPHAN: TypeDescriptor = TypeDescriptor {
		name: "Orphan_t",
		properties: &[],
		namespace: Some("urn:nowhere"),
		discriminator: None,
	};

	fn table() -> NamespaceTable {
		let mut table = NamespaceTable::new();
		table.bind(None, "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2");
		table.bind(Some("ns3"), "http://www.garmin.com/xmlschemas/ActivityExtension/v2");
		table.bind(Some(XSI_PREFIX), XSI_NAMESPACE);
		table
	}

	#[test]
	fn prefix_from_namespace() {
		let mut ctx = BuildContext::new(table());
		assert_eq!(ctx.prefix_for(&SPEED, None), Some("ns3".into()));
		assert!(ctx.is_used("ns3"));
		assert!(ctx.diagnostics().is_empty());
	}

	#[test]
	fn unbound_namespace_keeps_parent_prefix() {
		let mut ctx = BuildContext::new(table());
		assert_eq!(ctx.prefix_for(&ORPHAN, Some("ns3")), Some("ns3".into()));
		assert_eq!(
			ctx.diagnostics(),
			[Diagnostic::MissingNamespacePrefix {
				type_name: "Orphan_t",
				namespace: "urn:nowhere",
			}]
		);
	}

	#[test]
	fn text_children_take_parent_prefix() {
		let mut ctx = BuildContext::new(table());
		let mut out = ElementBuilder::new(XmlElement::new(Some("ns3".into()), "TPX"), &mut ctx);
		out.text_element("Speed", "1.5");
		out.attribute("CadenceSensor", "Footpod");
		out.discriminator("Foo_t");
		let tpx = out.finish();
		assert_eq!(tpx.elements().next().map(|e| e.qualified_name().into_owned()), Some("ns3:Speed".into()));
		assert_eq!(tpx.attributes[1].qualified_name(), "xsi:type");
		assert!(ctx.is_used(XSI_PREFIX));
	}

	#[test]
	fn nested_node_without_namespace_stays_in_parent_namespace() {
		let mut ctx = BuildContext::new(table());
		let mut tpx = XmlElement::new(Some("ns3".into()), "TPX");
		tpx.namespace = Some("http://www.garmin.com/xmlschemas/ActivityExtension/v2".into());
		let mut nested = crate::test_struct::Extensions::new();
		nested.push_opaque(XmlElement::new(None, "Vendor"));

		let mut out = ElementBuilder::new(tpx, &mut ctx);
		out.node("Extensions", &nested).unwrap();
		let tpx = out.finish();
		let extensions = tpx.elements().next().unwrap();
		assert_eq!(extensions.qualified_name(), "ns3:Extensions");
		assert_eq!(extensions.namespace, tpx.namespace);
		assert_eq!(extensions.elements().next().map(|e| e.name.as_str()), Some("Vendor"));
	}
}
