//! Whole documents: root element, namespace bindings and diagnostics

use crate::{
	diagnostic::Diagnostic,
	dom::{
		XmlAttribute,
		XmlElement,
	},
	errors,
	namespace::{
		NamespaceBinding,
		NamespaceTable,
		XSI_NAMESPACE,
		XSI_PREFIX,
	},
	parser::{
		ParseContext,
		ParseOptions,
	},
	quick_xml,
	serializer::{
		BuildContext,
		ElementBuilder,
		WriteOptions,
	},
	traits::Root,
	Result,
};
use std::{
	fs,
	io,
	path::Path,
};

/// A parsed (or newly created) document with root node `R`
#[derive(Clone, PartialEq, Debug)]
pub struct Document<R> {
	/// The typed root node
	pub root: R,
	/// Bindings declared on the root plus registered defaults
	pub namespaces: NamespaceTable,
	/// `xsi:schemaLocation` of the input document
	pub schema_location: Option<String>,
	/// Findings of the parse
	pub diagnostics: Vec<Diagnostic>,
}

impl<R: Root> Document<R> {
	/// New document with the format's default bindings
	pub fn new(root: R) -> Self {
		let mut namespaces = NamespaceTable::new();
		namespaces.bind(None, R::NAMESPACE);
		register_defaults::<R>(&mut namespaces);
		Self {
			root,
			namespaces,
			schema_location: None,
			diagnostics: Vec::new(),
		}
	}

	/// Parse document from a string
	pub fn from_str(xml: &str) -> Result<Self> {
		Self::from_str_with(xml, ParseOptions::default())
	}

	/// Parse document from a string with custom options
	pub fn from_str_with(xml: &str, options: ParseOptions) -> Result<Self> {
		let element = quick_xml::parse_document(xml)?;
		Self::from_element(&element, options)
	}

	/// Read and parse document
	pub fn from_reader<Rd: io::Read>(mut reader: Rd, options: ParseOptions) -> Result<Self> {
		let mut xml = String::new();
		reader.read_to_string(&mut xml)?;
		Self::from_str_with(&xml, options)
	}

	/// Load document from a file
	pub fn load(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self> {
		let xml = fs::read_to_string(path)?;
		Self::from_str_with(&xml, options)
	}

	/// Map root element onto the typed tree
	pub fn from_element(element: &XmlElement, options: ParseOptions) -> Result<Self> {
		if element.name != R::TAG {
			return Err(errors::unexpected_root(R::TAG, &element.qualified_name()));
		}

		let mut namespaces = NamespaceTable::new();
		namespaces.extend(&element.namespaces);
		if namespaces.default_namespace().is_none() {
			namespaces.bind(None, R::NAMESPACE);
		}
		register_defaults::<R>(&mut namespaces);

		let schema_location = element.attribute(Some(XSI_NAMESPACE), "schemaLocation").map(String::from);

		let mut ctx = ParseContext::new(options, namespaces.clone());
		let root = R::parse_node(element, &mut ctx)?;
		Ok(Self {
			root,
			namespaces,
			schema_location,
			diagnostics: ctx.into_diagnostics(),
		})
	}

	/// Build root element
	pub fn build(&self) -> Result<XmlElement> {
		Ok(self.build_with_diagnostics()?.0)
	}

	/// Build root element, returning the findings of the build too
	pub fn build_with_diagnostics(&self) -> Result<(XmlElement, Vec<Diagnostic>)> {
		let default = self.namespaces.default_namespace().unwrap_or(R::NAMESPACE);
		let mut ctx = BuildContext::new(self.namespaces.clone());

		let mut root = XmlElement::new(None, R::TAG);
		root.namespace = Some(default.into());
		let mut out = ElementBuilder::new(root, &mut ctx);
		self.root.build_node(&mut out)?;
		let mut root = out.finish();

		let xsi_prefix = match self.namespaces.prefix_for(XSI_NAMESPACE) {
			Some(Some(prefix)) => prefix,
			_ => XSI_PREFIX,
		};
		let schema_location = self.schema_location.as_deref().or(R::SCHEMA_LOCATION);
		if let Some(location) = schema_location {
			let attr = XmlAttribute {
				prefix: Some(xsi_prefix.into()),
				name: "schemaLocation".into(),
				namespace: Some(XSI_NAMESPACE.into()),
				value: location.into(),
			};
			root.attributes.insert(0, attr);
		}

		root.namespaces.push(NamespaceBinding::new(None, default));
		root.namespaces.push(NamespaceBinding::new(Some(xsi_prefix), XSI_NAMESPACE));
		for binding in self.namespaces.iter() {
			if let Some(prefix) = binding.prefix.as_deref() {
				if prefix != xsi_prefix && ctx.is_used(prefix) {
					root.namespaces.push(binding.clone());
				}
			}
		}

		Ok((root, ctx.into_diagnostics()))
	}

	/// Serialize as indented XML document
	pub fn to_xml_string(&self) -> Result<String> {
		self.to_xml_string_with(WriteOptions::default())
	}

	/// Serialize as XML document with custom options
	pub fn to_xml_string_with(&self, options: WriteOptions) -> Result<String> {
		quick_xml::serialize_document(&self.build()?, options)
	}

	/// Write XML document
	pub fn write_to<W: io::Write>(&self, writer: W, options: WriteOptions) -> Result<()> {
		quick_xml::write_document(writer, &self.build()?, options)
	}

	/// Write XML document to a file
	pub fn dump(&self, path: impl AsRef<Path>) -> Result<()> {
		let mut file = io::BufWriter::new(fs::File::create(path)?);
		self.write_to(&mut file, WriteOptions::default())?;
		io::Write::flush(&mut file)?;
		Ok(())
	}
}

fn register_defaults<R: Root>(namespaces: &mut NamespaceTable) {
	namespaces.register(XSI_PREFIX, XSI_NAMESPACE);
	for (prefix, uri) in R::NAMESPACES {
		namespaces.register(prefix, uri);
	}
}
