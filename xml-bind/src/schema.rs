//! Static descriptor tables
//!
//! Every bound type carries a `TypeDescriptor` (usually generated by `#[derive(Node)]`): the
//! ordered list of its properties and how each one maps to an XML attribute or child element.

use crate::{
	errors,
	Result,
};

/// Suffix of schema type names used as discriminator values (`Device` -> `Device_t`)
pub const DISCRIMINATOR_SUFFIX: &str = "_t";

/// Where a property lives in XML
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Kind {
	/// Attribute on the element of the owning type
	Attribute,
	/// Child element
	Element,
}

/// How often a property may occur
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cardinality {
	/// Exactly once
	One,
	/// At most once
	Optional,
	/// Any number of times; repeated tags collapse into a sequence
	Many,
}

/// Category of the transform converting raw XML into the field value
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValueKind {
	/// Text kept as is
	Text,
	/// Integer or floating point number
	Number,
	/// Literal `true` / `false`
	Boolean,
	/// Date and time
	Timestamp,
	/// Calendar date
	Date,
	/// One of a fixed set of tokens
	Enumeration,
	/// Nested typed element
	Node,
	/// Open extension container
	Extensions,
}

/// A declared property of a type
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PropertyDescriptor {
	/// Tag (or attribute key) in XML
	pub tag: &'static str,
	/// Field name in the typed node
	pub field: &'static str,
	/// Attribute or element
	pub kind: Kind,
	/// Occurrences
	pub cardinality: Cardinality,
	/// Transform category
	pub value: ValueKind,
}

impl PropertyDescriptor {
	/// Whether this property is rendered as attribute
	pub fn is_attribute(&self) -> bool {
		self.kind == Kind::Attribute
	}
}

/// Descriptor of a bound type
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TypeDescriptor {
	/// Type name (as in the XML schema)
	pub name: &'static str,
	/// Declared properties in output order
	pub properties: &'static [PropertyDescriptor],
	/// Namespace of elements of this type; `None` is the document's default namespace
	pub namespace: Option<&'static str>,
	/// Value of `xsi:type` when this type is emitted as alternative of a polymorphic family
	pub discriminator: Option<&'static str>,
}

impl TypeDescriptor {
	/// Properties rendered as attributes
	pub fn attributes(&self) -> impl Iterator<Item = &'static PropertyDescriptor> {
		self.properties.iter().filter(|p| p.kind == Kind::Attribute)
	}

	/// Properties rendered as child elements
	pub fn elements(&self) -> impl Iterator<Item = &'static PropertyDescriptor> {
		self.properties.iter().filter(|p| p.kind == Kind::Element)
	}

	/// Look up property by field name
	pub fn property(&self, field: &str) -> Option<&'static PropertyDescriptor> {
		self.properties.iter().find(|p| p.field == field)
	}

	/// Look up property by XML tag
	pub fn property_by_tag(&self, tag: &str) -> Option<&'static PropertyDescriptor> {
		self.properties.iter().find(|p| p.tag == tag)
	}

	/// Whether the field named `field` is rendered as attribute
	pub fn is_attribute(&self, field: &str) -> bool {
		self.property(field).map_or(false, PropertyDescriptor::is_attribute)
	}

	/// Check the table for properties that can't be mapped consistently
	///
	/// - tags must be unique unless the property is `Many`
	/// - attributes must be single text-like values
	pub fn validate(&'static self) -> Result<()> {
		for (index, property) in self.properties.iter().enumerate() {
			let clash = self.properties[..index].iter().any(|earlier| {
				earlier.tag == property.tag
					&& (earlier.cardinality != Cardinality::Many || property.cardinality != Cardinality::Many)
			});
			if clash {
				return Err(errors::invalid_schema(self, property, "tag declared twice"));
			}
			if property.kind == Kind::Attribute {
				if property.cardinality == Cardinality::Many {
					return Err(errors::invalid_schema(self, property, "attributes can't repeat"));
				}
				if matches!(property.value, ValueKind::Node | ValueKind::Extensions) {
					return Err(errors::invalid_schema(self, property, "nested values can't be attributes"));
				}
			}
		}
		Ok(())
	}
}

/// Find the registered alternative for a discriminator value
///
/// A prefix on the value (`tc:Device_t`) is ignored, and the `_t` suffix is optional (`Device`
/// finds `Device_t`).
pub fn resolve(registry: &[&'static TypeDescriptor], discriminator: &str) -> Option<usize> {
	let local = match discriminator.trim().rsplit_once(':') {
		Some((_, local)) => local,
		None => discriminator.trim(),
	};
	let bare = |value: &'static str| value.strip_suffix(DISCRIMINATOR_SUFFIX).unwrap_or(value);
	let wanted = local.strip_suffix(DISCRIMINATOR_SUFFIX).unwrap_or(local);
	registry
		.iter()
		.position(|d| d.discriminator == Some(local))
		.or_else(|| registry.iter().position(|d| d.discriminator.map(bare) == Some(wanted)))
}

#[cfg(test)]
mod test {
	use super::*;

	const fn prop(tag: &'static str, kind: Kind, cardinality: Cardinality, value: ValueKind) -> PropertyDescriptor {
		PropertyDescriptor {
			tag,
			field: tag,
			kind,
			cardinality,
			value,
		}
	}

	static LAP: TypeDescriptor = TypeDescriptor {
		name: "Lap_t",
		properties: &[
			prop("StartTime", Kind::Attribute, Cardinality::Optional, ValueKind::Timestamp),
			prop("TotalTimeSeconds", Kind::Element, Cardinality::Optional, ValueKind::Number),
			prop("Track", Kind::Element, Cardinality::Many, ValueKind::Node),
		],
		namespace: None,
		discriminator: None,
	};

	static DUPLICATE: TypeDescriptor = TypeDescriptor {
		name: "Broken_t",
		properties: &[
			prop("Name", Kind::Element, Cardinality::Optional, ValueKind::Text),
			prop("Name", Kind::Attribute, Cardinality::Optional, ValueKind::Text),
		],
		namespace: None,
		discriminator: None,
	};

	static NODE_ATTRIBUTE: TypeDescriptor = TypeDescriptor {
		name: "Broken_t",
		properties: &[prop("Position", Kind::Attribute, Cardinality::Optional, ValueKind::Node)],
		namespace: None,
		discriminator: None,
	};

	static DEVICE: TypeDescriptor = TypeDescriptor {
		name: "Device",
		properties: &[],
		namespace: None,
		discriminator: Some("Device_t"),
	};

	#[test]
	fn attribute_split() {
		let attrs: Vec<_> = LAP.attributes().map(|p| p.tag).collect();
		let elements: Vec<_> = LAP.elements().map(|p| p.tag).collect();
		assert_eq!(attrs, ["StartTime"]);
		assert_eq!(elements, ["TotalTimeSeconds", "Track"]);
		assert!(LAP.is_attribute("StartTime"));
		assert!(!LAP.is_attribute("Track"));
		assert_eq!(LAP.property_by_tag("Track").map(|p| p.cardinality), Some(Cardinality::Many));
	}

	#[test]
	fn validate() {
		assert!(LAP.validate().is_ok());
		assert!(DUPLICATE.validate().is_err());
		assert!(NODE_ATTRIBUTE.validate().is_err());
	}

	#[test]
	fn resolve_ignores_prefix() {
		let registry = [&LAP, &DEVICE];
		assert_eq!(resolve(&registry, "Device_t"), Some(1));
		assert_eq!(resolve(&registry, "tc:Device_t"), Some(1));
		assert_eq!(resolve(&registry, "Device"), Some(1));
		assert_eq!(resolve(&registry, "Application_t"), None);
	}
}
