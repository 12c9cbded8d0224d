//! Namespace prefix bindings
//!
//! A `NamespaceTable` maps prefixes to URIs and back.  Documents keep the bindings declared on
//! their root element (plus the registered defaults of the format) so the builder can put the
//! same prefixes back on output.

/// XML Schema instance namespace (`xsi:type`, `xsi:schemaLocation`)
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Conventional prefix for `XSI_NAMESPACE`
pub const XSI_PREFIX: &str = "xsi";

/// A single `xmlns` (prefix `None`) or `xmlns:prefix` binding
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NamespaceBinding {
	/// Prefix; `None` for the default namespace
	pub prefix: Option<String>,
	/// Namespace URI
	pub uri: String,
}

impl NamespaceBinding {
	/// New binding
	pub fn new(prefix: Option<&str>, uri: &str) -> Self {
		Self {
			prefix: prefix.map(String::from),
			uri: uri.into(),
		}
	}

	/// Attribute key used to declare this binding
	pub fn declaration(&self) -> String {
		match &self.prefix {
			Some(prefix) => format!("xmlns:{}", prefix),
			None => String::from("xmlns"),
		}
	}
}

/// Ordered set of bindings; a prefix is bound at most once
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NamespaceTable {
	bindings: Vec<NamespaceBinding>,
}

impl NamespaceTable {
	/// Empty table
	pub fn new() -> Self {
		Self::default()
	}

	/// Bind `prefix` to `uri`, replacing an existing binding of the same prefix.
	pub fn bind(&mut self, prefix: Option<&str>, uri: &str) {
		match self.bindings.iter_mut().find(|b| b.prefix.as_deref() == prefix) {
			Some(existing) => existing.uri = uri.into(),
			None => self.bindings.push(NamespaceBinding::new(prefix, uri)),
		}
	}

	/// Bind `prefix` to `uri` unless the URI is already bound or the prefix is taken.
	///
	/// Returns whether the binding was added.
	pub fn register(&mut self, prefix: &str, uri: &str) -> bool {
		if self.prefix_for(uri).is_some() || self.uri_for(Some(prefix)).is_some() {
			return false;
		}
		self.bindings.push(NamespaceBinding::new(Some(prefix), uri));
		true
	}

	/// URI bound to `prefix` (`None` asks for the default namespace)
	pub fn uri_for(&self, prefix: Option<&str>) -> Option<&str> {
		self.bindings
			.iter()
			.find(|b| b.prefix.as_deref() == prefix)
			.map(|b| b.uri.as_str())
	}

	/// Prefix bound to `uri`
	///
	/// `Some(None)` means the URI is the default namespace; the default binding wins over named
	/// ones.
	pub fn prefix_for(&self, uri: &str) -> Option<Option<&str>> {
		if self.default_namespace() == Some(uri) {
			return Some(None);
		}
		self.bindings
			.iter()
			.find(|b| b.uri == uri)
			.map(|b| b.prefix.as_deref())
	}

	/// The default namespace
	pub fn default_namespace(&self) -> Option<&str> {
		self.uri_for(None)
	}

	/// All bindings in registration order
	pub fn iter(&self) -> impl Iterator<Item = &NamespaceBinding> {
		self.bindings.iter()
	}

	/// Number of bindings
	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	/// Whether the table is empty
	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}
}

impl<'a> Extend<&'a NamespaceBinding> for NamespaceTable {
	fn extend<I: IntoIterator<Item = &'a NamespaceBinding>>(&mut self, iter: I) {
		for binding in iter {
			self.bind(binding.prefix.as_deref(), &binding.uri);
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	const TCX: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";
	const AX: &str = "http://www.garmin.com/xmlschemas/ActivityExtension/v2";

	#[test]
	fn lookups_both_ways() {
		let mut table = NamespaceTable::new();
		table.bind(None, TCX);
		table.bind(Some("ns3"), AX);

		assert_eq!(table.uri_for(Some("ns3")), Some(AX));
		assert_eq!(table.prefix_for(AX), Some(Some("ns3")));
		assert_eq!(table.prefix_for(TCX), Some(None));
		assert_eq!(table.prefix_for("urn:unknown"), None);
		assert_eq!(table.default_namespace(), Some(TCX));
	}

	#[test]
	fn register_keeps_document_prefixes() {
		let mut table = NamespaceTable::new();
		table.bind(Some("ax"), AX);

		// URI already bound under another prefix
		assert!(!table.register("ns3", AX));
		assert_eq!(table.prefix_for(AX), Some(Some("ax")));

		// prefix taken by another URI
		table.bind(Some("ns5"), "urn:other");
		assert!(!table.register("ns5", "urn:goals"));

		assert!(table.register(XSI_PREFIX, XSI_NAMESPACE));
		assert_eq!(table.len(), 3);
	}

	#[test]
	fn bind_replaces_prefix() {
		let mut table = NamespaceTable::new();
		table.bind(Some("a"), "urn:one");
		table.bind(Some("a"), "urn:two");
		assert_eq!(table.len(), 1);
		assert_eq!(table.uri_for(Some("a")), Some("urn:two"));
		assert_eq!(NamespaceBinding::new(Some("a"), "urn:two").declaration(), "xmlns:a");
		assert_eq!(NamespaceBinding::new(None, "urn:two").declaration(), "xmlns");
	}
}
