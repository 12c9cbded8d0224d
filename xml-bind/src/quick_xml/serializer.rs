use crate::{
	dom::{
		XmlElement,
		XmlNode,
	},
	errors,
	serializer::WriteOptions,
	Result,
};
use quick_xml::events::{
	BytesDecl,
	BytesEnd,
	BytesStart,
	BytesText,
	Event,
};
use std::io;

/// Serialize root element into full document in memory
pub fn serialize_document(element: &XmlElement, options: WriteOptions) -> Result<String> {
	let mut buf = Vec::new();
	write_document(&mut buf, element, options)?;
	String::from_utf8(buf).map_err(errors::malformed)
}

/// Write root element as full document
pub fn write_document<W: io::Write>(output: W, element: &XmlElement, options: WriteOptions) -> Result<()> {
	let mut writer = if options.indent {
		quick_xml::Writer::new_with_indent(output, b' ', 2)
	} else {
		quick_xml::Writer::new(output)
	};
	Serializer::new(&mut writer).serialize_document(element)
}

/// Serializer adaptor for `quick_xml::Writer`
pub struct Serializer<'w, W: io::Write> {
	writer: &'w mut quick_xml::Writer<W>,
}

impl<'w, W: io::Write> Serializer<'w, W> {
	/// New adaptor using the writer
	pub fn new(writer: &'w mut quick_xml::Writer<W>) -> Self {
		Self { writer }
	}

	/// Serialize XML declaration and root element
	pub fn serialize_document(&mut self, element: &XmlElement) -> Result<()> {
		self.writer
			.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
		self.serialize_element(element)?;
		self.writer.get_mut().write_all(b"\n")?;
		Ok(())
	}

	/// Serialize single element with its subtree
	pub fn serialize_element(&mut self, element: &XmlElement) -> Result<()> {
		let name = element.qualified_name();
		let mut start = BytesStart::new(name.as_ref());
		for binding in &element.namespaces {
			start.push_attribute((binding.declaration().as_str(), binding.uri.as_str()));
		}
		for attr in &element.attributes {
			start.push_attribute((attr.qualified_name().as_ref(), attr.value.as_str()));
		}

		if element.children.is_empty() {
			self.writer.write_event(Event::Empty(start))?;
			return Ok(());
		}

		self.writer.write_event(Event::Start(start))?;
		for child in &element.children {
			match child {
				XmlNode::Element(e) => self.serialize_element(e)?,
				XmlNode::Text(t) => self.writer.write_event(Event::Text(BytesText::new(t)))?,
			}
		}
		self.writer.write_event(Event::End(BytesEnd::new(name.as_ref())))?;
		Ok(())
	}
}
