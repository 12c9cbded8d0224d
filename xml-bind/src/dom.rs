//! In-memory element tree
//!
//! The parser reads typed values out of an `XmlElement` and the builder emits into one; the
//! `quick_xml` adaptor converts between this tree and actual XML text.
//!
//! Names are stored split into (optional) prefix and local name, together with the namespace URI
//! the prefix resolved to when the document was read.  Only elements and text are kept: comments
//! and processing instructions are not part of the model.

use crate::namespace::{
	NamespaceBinding,
	XSI_NAMESPACE,
};
use std::borrow::Cow;

/// A single attribute
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct XmlAttribute {
	/// Prefix as written (`xsi` in `xsi:type`)
	pub prefix: Option<String>,
	/// Local name
	pub name: String,
	/// Resolved namespace (unprefixed attributes have none)
	pub namespace: Option<String>,
	/// Unescaped value
	pub value: String,
}

impl XmlAttribute {
	/// Unprefixed attribute
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			prefix: None,
			name: name.into(),
			namespace: None,
			value: value.into(),
		}
	}

	/// Qualified name as written in a document
	pub fn qualified_name(&self) -> Cow<'_, str> {
		qualified(self.prefix.as_deref(), &self.name)
	}
}

/// Child of an element
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum XmlNode {
	/// Nested element
	Element(XmlElement),
	/// Text (or CDATA) content; whitespace-only text between elements is not kept
	Text(String),
}

/// An element with its attributes, namespace declarations and children
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct XmlElement {
	/// Prefix as written
	pub prefix: Option<String>,
	/// Local name
	pub name: String,
	/// Resolved namespace
	pub namespace: Option<String>,
	/// `xmlns` / `xmlns:prefix` declarations made on this element
	pub namespaces: Vec<NamespaceBinding>,
	/// Attributes (without namespace declarations)
	pub attributes: Vec<XmlAttribute>,
	/// Children in document order
	pub children: Vec<XmlNode>,
}

impl XmlElement {
	/// New empty element
	pub fn new(prefix: Option<String>, name: impl Into<String>) -> Self {
		Self {
			prefix,
			name: name.into(),
			..Self::default()
		}
	}

	/// Qualified name as written in a document
	pub fn qualified_name(&self) -> Cow<'_, str> {
		qualified(self.prefix.as_deref(), &self.name)
	}

	/// Child elements (skipping text)
	pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
		self.children.iter().filter_map(|child| match child {
			XmlNode::Element(e) => Some(e),
			XmlNode::Text(_) => None,
		})
	}

	/// Text of a simple-content element: exactly one child which is text.
	pub fn simple_text(&self) -> Option<&str> {
		match self.children.as_slice() {
			[XmlNode::Text(text)] => Some(text),
			_ => None,
		}
	}

	/// Concatenated text of all descendants
	pub fn text_content(&self) -> String {
		let mut result = String::new();
		self.collect_text(&mut result);
		result
	}

	fn collect_text(&self, result: &mut String) {
		for child in &self.children {
			match child {
				XmlNode::Text(t) => result.push_str(t),
				XmlNode::Element(e) => e.collect_text(result),
			}
		}
	}

	/// Find attribute by namespace and local name
	pub fn attribute(&self, namespace: Option<&str>, name: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|a| a.name == name && a.namespace.as_deref() == namespace)
			.map(|a| a.value.as_str())
	}

	/// Value of the `xsi:type` attribute
	///
	/// Documents sometimes use the `xsi` prefix without declaring it; the literal prefix is
	/// accepted then too.
	pub fn discriminator(&self) -> Option<&str> {
		self.attributes
			.iter()
			.find(|a| {
				a.name == "type"
					&& (a.namespace.as_deref() == Some(XSI_NAMESPACE)
						|| (a.namespace.is_none() && a.prefix.as_deref() == Some("xsi")))
			})
			.map(|a| a.value.as_str())
	}

	/// Append a text child
	pub fn push_text(&mut self, text: impl Into<String>) {
		self.children.push(XmlNode::Text(text.into()));
	}

	/// Append an element child
	pub fn push_element(&mut self, element: XmlElement) {
		self.children.push(XmlNode::Element(element));
	}

	/// Walk this element and all descendants (depth first, pre-order)
	pub fn walk(&self, f: &mut dyn FnMut(&XmlElement)) {
		f(self);
		for child in self.elements() {
			child.walk(f);
		}
	}
}

fn qualified<'a>(prefix: Option<&str>, name: &'a str) -> Cow<'a, str> {
	match prefix {
		Some(prefix) => Cow::Owned(format!("{}:{}", prefix, name)),
		None => Cow::Borrowed(name),
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn leaf(name: &str, text: &str) -> XmlElement {
		let mut e = XmlElement::new(None, name);
		e.push_text(text);
		e
	}

	#[test]
	fn simple_text_needs_single_text_child() {
		assert_eq!(leaf("Value", "113").simple_text(), Some("113"));

		let mut nested = XmlElement::new(None, "HeartRateBpm");
		nested.push_element(leaf("Value", "113"));
		assert_eq!(nested.simple_text(), None);
		assert_eq!(nested.text_content(), "113");
		assert_eq!(XmlElement::new(None, "Notes").simple_text(), None);
	}

	#[test]
	fn discriminator_accepts_undeclared_xsi_prefix() {
		let mut e = XmlElement::new(None, "Creator");
		e.attributes.push(XmlAttribute {
			prefix: Some("xsi".into()),
			name: "type".into(),
			namespace: None,
			value: "Device_t".into(),
		});
		assert_eq!(e.discriminator(), Some("Device_t"));

		e.attributes[0].prefix = Some("other".into());
		e.attributes[0].namespace = Some("urn:other".into());
		assert_eq!(e.discriminator(), None);
	}

	#[test]
	fn qualified_names() {
		let e = XmlElement::new(Some("ns3".into()), "TPX");
		assert_eq!(e.qualified_name(), "ns3:TPX");
		assert_eq!(XmlAttribute::new("Foo", "1").qualified_name(), "Foo");
	}
}
