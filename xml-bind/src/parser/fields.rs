use crate::{
	dom::XmlElement,
	namespace::XSI_NAMESPACE,
	parser::ParseContext,
	schema::{
		PropertyDescriptor,
		TypeDescriptor,
	},
	value::Field,
	Result,
};
use std::{
	borrow::Cow,
	collections::BTreeMap,
};

/// A single occurrence of a property in XML
#[derive(Clone, Copy, Debug)]
pub enum Raw<'a> {
	/// Attribute value
	Attribute(&'a str),
	/// Child element with simple (text only) content
	Text {
		/// The child element itself
		element: &'a XmlElement,
		/// Its text
		text: &'a str,
	},
	/// Any other child element
	Element(&'a XmlElement),
}

impl<'a> Raw<'a> {
	/// Text of the occurrence; for complex elements the concatenated descendant text
	pub fn text(&self) -> Cow<'a, str> {
		match *self {
			Raw::Attribute(text) => Cow::Borrowed(text),
			Raw::Text { text, .. } => Cow::Borrowed(text),
			Raw::Element(element) => Cow::Owned(element.text_content()),
		}
	}

	/// Element of the occurrence (`None` for attributes)
	pub fn element(&self) -> Option<&'a XmlElement> {
		match *self {
			Raw::Attribute(_) => None,
			Raw::Text { element, .. } => Some(element),
			Raw::Element(element) => Some(element),
		}
	}
}

/// Where in the schema a value is being converted (for error messages)
#[derive(Clone, Copy, Debug)]
pub struct Site {
	/// Type owning the property
	pub owner: &'static TypeDescriptor,
	/// The property
	pub property: &'static PropertyDescriptor,
}

/// Decomposed element: attributes and child elements by local name
///
/// Declared properties remove their entries with `take`; whatever is left over when `finish` is
/// called was not declared and gets ignored.
#[derive(Debug)]
pub struct Fields<'a> {
	element: &'a XmlElement,
	entries: BTreeMap<&'a str, Vec<Raw<'a>>>,
}

impl<'a> Fields<'a> {
	/// Split element into attributes and children
	///
	/// `xsi:*` attributes are left out: `xsi:type` is handled by dispatch and
	/// `xsi:schemaLocation` by the document.
	pub fn decompose(element: &'a XmlElement) -> Self {
		let mut entries: BTreeMap<&'a str, Vec<Raw<'a>>> = BTreeMap::new();
		for attr in &element.attributes {
			if attr.namespace.as_deref() == Some(XSI_NAMESPACE) {
				continue;
			}
			entries.entry(attr.name.as_str()).or_default().push(Raw::Attribute(&attr.value));
		}
		for child in element.elements() {
			let raw = match child.simple_text() {
				Some(text) => Raw::Text { element: child, text },
				None => Raw::Element(child),
			};
			entries.entry(child.name.as_str()).or_default().push(raw);
		}
		Self { element, entries }
	}

	/// The decomposed element
	pub fn element(&self) -> &'a XmlElement {
		self.element
	}

	/// Whether an entry for `tag` is (still) present
	pub fn contains(&self, tag: &str) -> bool {
		self.entries.contains_key(tag)
	}

	/// Convert the entry of property `index` of `owner`
	pub fn take<F: Field>(&mut self, owner: &'static TypeDescriptor, index: usize, ctx: &mut ParseContext) -> Result<F> {
		let property = &owner.properties[index];
		let raws = self.entries.remove(property.tag).unwrap_or_default();
		F::parse_field(raws, &Site { owner, property }, ctx)
	}

	/// Drop everything not taken
	pub fn finish(self, owner: &'static TypeDescriptor) {
		for tag in self.entries.keys() {
			log::trace!("{}: ignoring undeclared {:?} in <{}>", owner.name, tag, self.element.qualified_name());
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::dom::XmlAttribute;

	fn sample() -> XmlElement {
		let mut lap = XmlElement::new(None, "Lap");
		lap.attributes.push(XmlAttribute::new("StartTime", "2014-12-26T10:00:39Z"));
		lap.attributes.push(XmlAttribute {
			prefix: Some("xsi".into()),
			name: "type".into(),
			namespace: Some(XSI_NAMESPACE.into()),
			value: "Lap_t".into(),
		});
		let mut time = XmlElement::new(None, "TotalTimeSeconds");
		time.push_text("368.0");
		lap.push_element(time);
		for _ in 0..2 {
			lap.push_element(XmlElement::new(None, "Track"));
		}
		lap
	}

	#[test]
	fn decompose_classifies_entries() {
		let lap = sample();
		let fields = Fields::decompose(&lap);
		assert!(fields.contains("StartTime"));
		assert!(!fields.contains("type"));
		assert!(matches!(fields.entries["StartTime"][..], [Raw::Attribute("2014-12-26T10:00:39Z")]));
		assert!(matches!(fields.entries["TotalTimeSeconds"][..], [Raw::Text { text: "368.0", .. }]));
		assert_eq!(fields.entries["Track"].len(), 2);
		assert!(fields.entries["Track"].iter().all(|raw| matches!(raw, Raw::Element(_))));
	}

	#[test]
	fn raw_text() {
		let mut hr = XmlElement::new(None, "HeartRateBpm");
		let mut value = XmlElement::new(None, "Value");
		value.push_text("113");
		hr.push_element(value);

		assert_eq!(Raw::Element(&hr).text(), "113");
		assert!(Raw::Element(&hr).element().is_some());
		assert_eq!(Raw::Attribute("Active").text(), "Active");
		assert!(Raw::Attribute("Active").element().is_none());
	}
}
