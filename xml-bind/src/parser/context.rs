use crate::{
	diagnostic::Diagnostic,
	dom::XmlElement,
	errors,
	namespace::NamespaceTable,
	parser::Site,
	schema::{
		self,
		TypeDescriptor,
	},
	Result,
};

/// Runtime parse configuration
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ParseOptions {
	/// Fail on unregistered `xsi:type` values instead of falling back to the base type
	pub strict_discriminators: bool,
}

impl ParseOptions {
	/// Default options (lenient)
	pub fn new() -> Self {
		Self::default()
	}

	/// Set `strict_discriminators`
	pub fn strict_discriminators(mut self, strict: bool) -> Self {
		self.strict_discriminators = strict;
		self
	}
}

/// State shared by all nodes of a single parse
#[derive(Clone, Debug, Default)]
pub struct ParseContext {
	options: ParseOptions,
	namespaces: NamespaceTable,
	diagnostics: Vec<Diagnostic>,
}

impl ParseContext {
	/// New context for a document with the given root bindings
	pub fn new(options: ParseOptions, namespaces: NamespaceTable) -> Self {
		Self {
			options,
			namespaces,
			diagnostics: Vec::new(),
		}
	}

	/// Options in effect
	pub fn options(&self) -> &ParseOptions {
		&self.options
	}

	/// Bindings of the document root
	pub fn namespaces(&self) -> &NamespaceTable {
		&self.namespaces
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

	/// Record that a single-valued property occurred more than once
	pub fn duplicate_property(&mut self, site: &Site) {
		log::debug!("{}: {} given more than once, ignoring all but the first", site.owner.name, site.property.tag);
		self.report(Diagnostic::DuplicateProperty {
			type_name: site.owner.name,
			property: site.property.tag,
		});
	}

	/// Resolve the `xsi:type` discriminator of `element` for the family of `base`
	///
	/// Returns the index into `registry` of the alternative to parse, or `None` to stay with the
	/// base type: no discriminator, the discriminator names the base itself, or it isn't
	/// registered (lenient mode only; logged and recorded).
	pub fn dispatch(
		&mut self,
		element: &XmlElement,
		base: &'static TypeDescriptor,
		registry: &[&'static TypeDescriptor],
	) -> Result<Option<usize>> {
		let value = match element.discriminator() {
			Some(value) => value,
			None => return Ok(None),
		};
		match schema::resolve(registry, value) {
			Some(index) if registry[index].name == base.name => Ok(None),
			Some(index) => Ok(Some(index)),
			None => {
				if self.options.strict_discriminators {
					return Err(errors::unregistered_discriminator(&element.qualified_name(), base, value));
				}
				log::warn!(
					"<{}>: unregistered discriminator {:?}, using {}",
					element.qualified_name(),
					value,
					base.name
				);
				self.report(Diagnostic::UnregisteredDiscriminator {
					element: element.qualified_name().into_owned(),
					type_name: base.name,
					value: value.into(),
				});
				Ok(None)
			},
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		dom::XmlAttribute,
		namespace::XSI_NAMESPACE,
	};

	static SOURCE: TypeDescriptor = TypeDescriptor {
		name: "AbstractSource_t",
		properties: &[],
		namespace: None,
		discriminator: None,
	};

	static DEVICE: TypeDescriptor = TypeDescriptor {
		name: "Device_t",
		properties: &[],
		namespace: None,
		discriminator: Some("Device_t"),
	};

	static REGISTRY: [&TypeDescriptor; 2] = [&SOURCE, &DEVICE];

	fn creator(discriminator: Option<&str>) -> XmlElement {
		let mut e = XmlElement::new(None, "Creator");
		if let Some(value) = discriminator {
			e.attributes.push(XmlAttribute {
				prefix: Some("xsi".into()),
				name: "type".into(),
				namespace: Some(XSI_NAMESPACE.into()),
				value: value.into(),
			});
		}
		e
	}

	#[test]
	fn dispatch_states() {
		let mut ctx = ParseContext::default();
		assert_eq!(ctx.dispatch(&creator(None), &SOURCE, &REGISTRY).unwrap(), None);
		assert_eq!(ctx.dispatch(&creator(Some("Device_t")), &SOURCE, &REGISTRY).unwrap(), Some(1));
		// self reference stays with the base
		assert_eq!(ctx.dispatch(&creator(Some("Device_t")), &DEVICE, &REGISTRY).unwrap(), None);
		assert!(ctx.diagnostics().is_empty());
	}

	#[test]
	fn unregistered_is_lenient_by_default() {
		let mut ctx = ParseContext::default();
		assert_eq!(ctx.dispatch(&creator(Some("Watch_t")), &SOURCE, &REGISTRY).unwrap(), None);
		assert_eq!(
			ctx.diagnostics(),
			[Diagnostic::UnregisteredDiscriminator {
				element: "Creator".into(),
				type_name: "AbstractSource_t",
				value: "Watch_t".into(),
			}]
		);
	}

	#[test]
	fn unregistered_fails_when_strict() {
		let mut ctx = ParseContext::new(ParseOptions::new().strict_discriminators(true), NamespaceTable::new());
		let err = ctx.dispatch(&creator(Some("Watch_t")), &SOURCE, &REGISTRY).unwrap_err();
		assert!(matches!(err, crate::Error::UnregisteredDiscriminator { .. }));
	}
}
