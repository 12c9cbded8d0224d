use crate::{
	dom::{
		XmlAttribute,
		XmlElement,
		XmlNode,
	},
	errors,
	namespace::NamespaceBinding,
	Result,
};
use quick_xml::{
	events::{
		BytesStart,
		Event,
	},
	name::{
		PrefixDeclaration,
		QName,
	},
	Reader,
};

const XML_PREFIX: &str = "xml";
const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Read a complete document into its root element
pub fn parse_document(xml: &str) -> Result<XmlElement> {
	Parser::new(xml).parse_document()
}

/// Parser adaptor building an `XmlElement` tree from `quick_xml::Reader` events
pub struct Parser<'i> {
	reader: Reader<&'i [u8]>,
	// namespace declarations of all open elements
	scopes: Vec<Vec<NamespaceBinding>>,
	// open elements; the last one receives new children
	open: Vec<XmlElement>,
}

impl<'i> Parser<'i> {
	/// Create a new adaptor reading from `xml`
	pub fn new(xml: &'i str) -> Self {
		Self {
			reader: Reader::from_str(xml),
			scopes: Vec::new(),
			open: Vec::new(),
		}
	}

	/// Parse the single root element of a document
	///
	/// Comments, processing instructions, the XML declaration and doctype are skipped.
	pub fn parse_document(&mut self) -> Result<XmlElement> {
		let mut root = None;
		loop {
			let event = self.reader.read_event().map_err(|e| self.malformed(e))?;
			match event {
				Event::Eof => {
					if !self.open.is_empty() {
						return Err(self.malformed("unclosed element at end of document"));
					}
					return root.ok_or_else(|| errors::malformed("document has no root element"));
				},
				Event::Start(s) => {
					if self.open.is_empty() && root.is_some() {
						return Err(self.malformed("more than one root element"));
					}
					let element = self.start(&s)?;
					self.open.push(element);
				},
				Event::Empty(s) => {
					if self.open.is_empty() && root.is_some() {
						return Err(self.malformed("more than one root element"));
					}
					let element = self.start(&s)?;
					self.scopes.pop();
					if let Some(element) = self.close(element) {
						root = Some(element);
					}
				},
				Event::End(_) => {
					// end names are checked by the reader
					let element = self.open.pop().ok_or_else(|| self.malformed("unexpected end tag"))?;
					self.scopes.pop();
					if let Some(element) = self.close(element) {
						root = Some(element);
					}
				},
				Event::Text(t) => {
					let text = t.unescape().map_err(|e| self.malformed(e))?;
					self.text(&text)?;
				},
				Event::CData(t) => {
					let text = std::str::from_utf8(&t).map_err(|e| self.malformed(e))?.to_owned();
					self.text(&text)?;
				},
				// not part of the model
				Event::Comment(_) | Event::PI(_) | Event::Decl(_) | Event::DocType(_) => (),
			}
		}
	}

	fn malformed(&self, reason: impl std::fmt::Display) -> crate::Error {
		errors::malformed(format_args!("{} (at byte {})", reason, self.reader.buffer_position()))
	}

	fn text(&mut self, text: &str) -> Result<()> {
		match self.open.last_mut() {
			Some(parent) => {
				if let Some(XmlNode::Text(previous)) = parent.children.last_mut() {
					previous.push_str(text);
				} else {
					parent.push_text(text);
				}
				Ok(())
			},
			None if text.trim().is_empty() => Ok(()),
			None => Err(self.malformed("text outside of root element")),
		}
	}

	/// Finish `element`: attach to its parent, or return it if it is the root
	fn close(&mut self, mut element: XmlElement) -> Option<XmlElement> {
		// formatting whitespace between child elements
		if element.elements().next().is_some() {
			element.children.retain(|child| match child {
				XmlNode::Text(t) => !t.trim().is_empty(),
				XmlNode::Element(_) => true,
			});
		}
		match self.open.last_mut() {
			Some(parent) => {
				parent.push_element(element);
				None
			},
			None => Some(element),
		}
	}

	fn start(&mut self, start: &BytesStart<'_>) -> Result<XmlElement> {
		let mut declarations = Vec::new();
		let mut attributes = Vec::new();
		for attr in start.attributes() {
			let attr = attr.map_err(|e| self.malformed(e))?;
			let value = attr.unescape_value().map_err(|e| self.malformed(e))?.into_owned();
			match attr.key.as_namespace_binding() {
				Some(PrefixDeclaration::Default) => declarations.push(NamespaceBinding::new(None, &value)),
				Some(PrefixDeclaration::Named(prefix)) => {
					let prefix = self.decode(prefix)?;
					declarations.push(NamespaceBinding::new(Some(prefix), &value));
				},
				None => {
					let (prefix, name) = self.split(attr.key)?;
					attributes.push(XmlAttribute {
						prefix: prefix.map(String::from),
						name: name.into(),
						namespace: None,
						value,
					});
				},
			}
		}
		self.scopes.push(declarations.clone());

		// unprefixed attributes are in no namespace
		for attr in &mut attributes {
			if let Some(prefix) = attr.prefix.as_deref() {
				attr.namespace = self.resolve(Some(prefix));
			}
		}

		let (prefix, name) = self.split(start.name())?;
		let mut element = XmlElement::new(prefix.map(String::from), name);
		element.namespace = self.resolve(prefix);
		element.namespaces = declarations;
		element.attributes = attributes;
		Ok(element)
	}

	fn resolve(&self, prefix: Option<&str>) -> Option<String> {
		if prefix == Some(XML_PREFIX) {
			return Some(XML_NAMESPACE.into());
		}
		self.scopes
			.iter()
			.rev()
			.flat_map(|scope| scope.iter())
			.find(|binding| binding.prefix.as_deref() == prefix)
			.map(|binding| binding.uri.clone())
			.filter(|uri| !uri.is_empty())
	}

	fn split<'n>(&self, name: QName<'n>) -> Result<(Option<&'n str>, &'n str)> {
		let QName(raw) = name;
		let raw = self.decode(raw)?;
		Ok(match raw.split_once(':') {
			Some((prefix, local)) => (Some(prefix), local),
			None => (None, raw),
		})
	}

	fn decode<'n>(&self, raw: &'n [u8]) -> Result<&'n str> {
		std::str::from_utf8(raw).map_err(|e| self.malformed(e))
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::namespace::XSI_NAMESPACE;

	const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- exported -->
<Root xmlns="urn:root" xmlns:ns3="urn:ext" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <Creator xsi:type="Device_t">
    <Name>Forerunner &amp; co</Name>
  </Creator>
  <ns3:TPX><ns3:Speed>1.5</ns3:Speed></ns3:TPX>
  <Notes><![CDATA[a < b]]></Notes>
  <Empty/>
</Root>
"#;

	#[test]
	fn builds_tree() {
		let root = parse_document(DOCUMENT).unwrap();
		assert_eq!(root.name, "Root");
		assert_eq!(root.namespace.as_deref(), Some("urn:root"));
		assert_eq!(root.namespaces.len(), 3);
		assert_eq!(root.elements().count(), 4);

		let creator = root.elements().next().unwrap();
		assert_eq!(creator.discriminator(), Some("Device_t"));
		assert_eq!(creator.attributes[0].namespace.as_deref(), Some(XSI_NAMESPACE));
		assert_eq!(creator.elements().next().and_then(XmlElement::simple_text), Some("Forerunner & co"));

		let tpx = root.elements().nth(1).unwrap();
		assert_eq!(tpx.qualified_name(), "ns3:TPX");
		assert_eq!(tpx.namespace.as_deref(), Some("urn:ext"));
		assert_eq!(tpx.elements().next().and_then(|e| e.namespace.as_deref()), Some("urn:ext"));

		let notes = root.elements().nth(2).unwrap();
		assert_eq!(notes.simple_text(), Some("a < b"));
		assert!(root.elements().nth(3).unwrap().children.is_empty());
	}

	#[test]
	fn rejects_malformed() {
		for input in [
			"",
			"<!-- nothing -->",
			"<Root><Lap></Root>",
			"<Root>",
			"<Root/><Root/>",
			"text<Root/>",
			"<Root a=1/>",
		] {
			let err = parse_document(input).unwrap_err();
			assert!(matches!(err, crate::Error::MalformedDocument(_)), "{:?}: {}", input, err);
		}
	}
}
