#![allow(missing_docs)] // helper names should be good enough
//! Error type and helper functions to generate common errors

use crate::{
	parser::Site,
	schema::{
		PropertyDescriptor,
		TypeDescriptor,
	},
};

/// Everything that can abort a parse or build
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Input is not well-formed XML
	#[error("malformed document: {0}")]
	MalformedDocument(String),
	/// Root element isn't the expected one
	#[error("unexpected root element <{found}>, expected <{expected}>")]
	UnexpectedRoot {
		/// Expected root tag
		expected: &'static str,
		/// Root tag found in the document
		found: String,
	},
	/// Raw text of a property couldn't be converted
	#[error("{type_name}: can't convert {property} value {value:?}: {reason}")]
	ValueCoercion {
		/// Type owning the property
		type_name: &'static str,
		/// Tag of the property
		property: &'static str,
		/// Offending raw value
		value: String,
		/// What went wrong
		reason: String,
	},
	/// A property with cardinality `One` is missing
	#[error("{type_name}: missing {property}")]
	MissingProperty {
		/// Type owning the property
		type_name: &'static str,
		/// Tag of the property
		property: &'static str,
	},
	/// Discriminator not in the registry (only raised in strict mode)
	#[error("<{element}>: unregistered discriminator {value:?} for {type_name}")]
	UnregisteredDiscriminator {
		/// Element carrying the discriminator
		element: String,
		/// Requested base type
		type_name: &'static str,
		/// The discriminator value
		value: String,
	},
	/// Descriptor table that can't be mapped
	#[error("{type_name}: invalid property {property}: {reason}")]
	InvalidSchema {
		/// Type owning the property
		type_name: &'static str,
		/// Tag of the property
		property: &'static str,
		/// What is wrong
		reason: &'static str,
	},
	/// Writing XML failed
	#[error("xml: {0}")]
	Xml(#[from] quick_xml::Error),
	/// Reading or writing a file failed
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
}

pub fn malformed(reason: impl std::fmt::Display) -> Error {
	Error::MalformedDocument(reason.to_string())
}

pub fn unexpected_root(expected: &'static str, found: &str) -> Error {
	Error::UnexpectedRoot {
		expected,
		found: found.into(),
	}
}

pub fn value_coercion(site: &Site, value: &str, reason: impl std::fmt::Display) -> Error {
	Error::ValueCoercion {
		type_name: site.owner.name,
		property: site.property.tag,
		value: value.into(),
		reason: reason.to_string(),
	}
}

pub fn missing_property(site: &Site) -> Error {
	Error::MissingProperty {
		type_name: site.owner.name,
		property: site.property.tag,
	}
}

pub fn unregistered_discriminator(element: &str, base: &TypeDescriptor, value: &str) -> Error {
	Error::UnregisteredDiscriminator {
		element: element.into(),
		type_name: base.name,
		value: value.into(),
	}
}

pub fn invalid_schema(
	owner: &'static TypeDescriptor,
	property: &'static PropertyDescriptor,
	reason: &'static str,
) -> Error {
	Error::InvalidSchema {
		type_name: owner.name,
		property: property.tag,
		reason,
	}
}
