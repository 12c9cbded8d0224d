//! Non-fatal findings of a parse or build

use std::fmt;

/// Something that didn't abort processing but might lose or change data
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Diagnostic {
	/// `xsi:type` value not in the registry; the base type was used
	UnregisteredDiscriminator {
		/// Element carrying the discriminator
		element: String,
		/// Base type of the family
		type_name: &'static str,
		/// The discriminator value
		value: String,
	},
	/// Extension element without registered type; retained opaque
	UnknownExtension {
		/// Qualified tag of the extension element
		tag: String,
	},
	/// Single-valued property present more than once; the first occurrence was used
	DuplicateProperty {
		/// Type owning the property
		type_name: &'static str,
		/// Tag of the property
		property: &'static str,
	},
	/// Namespace of a nested node isn't bound to any prefix; the parent's prefix was used
	MissingNamespacePrefix {
		/// Type of the nested node
		type_name: &'static str,
		/// Its namespace URI
		namespace: &'static str,
	},
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Diagnostic::UnregisteredDiscriminator { element, type_name, value } => {
				write!(f, "<{}>: unregistered discriminator {:?}, using {}", element, value, type_name)
			},
			Diagnostic::UnknownExtension { tag } => write!(f, "unknown extension <{}> kept as is", tag),
			Diagnostic::DuplicateProperty { type_name, property } => {
				write!(f, "{}: {} given more than once, using the first", type_name, property)
			},
			Diagnostic::MissingNamespacePrefix { type_name, namespace } => {
				write!(f, "{}: no prefix bound for namespace {}", type_name, namespace)
			},
		}
	}
}
