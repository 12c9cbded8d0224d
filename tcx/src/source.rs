//! Creators and authors: devices and applications

use crate::enums::BuildType;
use xml_bind::Node;

/// Source of a recording or file; the concrete type is selected with `xsi:type`
#[derive(Node)]
#[derive(Clone, PartialEq, Debug)]
pub enum AbstractSource {
	/// Source without (or with an unregistered) `xsi:type`
	#[xml_bind(fallback)]
	Source(Source),
	/// `Device_t`
	Device(Device),
	/// `Application_t`
	Application(Application),
}

impl AbstractSource {
	/// Name common to all alternatives
	pub fn name(&self) -> Option<&str> {
		match self {
			AbstractSource::Source(s) => s.name.as_deref(),
			AbstractSource::Device(d) => d.name.as_deref(),
			AbstractSource::Application(a) => a.name.as_deref(),
		}
	}

	/// The device, if this is one
	pub fn device(&self) -> Option<&Device> {
		match self {
			AbstractSource::Device(d) => Some(d),
			_ => None,
		}
	}

	/// The application, if this is one
	pub fn application(&self) -> Option<&Application> {
		match self {
			AbstractSource::Application(a) => Some(a),
			_ => None,
		}
	}
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(name = "AbstractSource_t")]
pub struct Source {
	pub name: Option<String>,
}

/// Recording device (watch, bike computer)
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(discriminator)]
pub struct Device {
	pub name: Option<String>,
	pub unit_id: Option<u32>,
	#[xml_bind(tag = "ProductID")]
	pub product_id: Option<u16>,
	pub version: Option<Version>,
}

/// Software that wrote the file
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(discriminator)]
pub struct Application {
	pub name: Option<String>,
	pub build: Option<Build>,
	#[xml_bind(tag = "LangID")]
	pub lang_id: Option<String>,
	pub part_number: Option<String>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Version {
	pub version_major: u16,
	pub version_minor: u16,
	pub build_major: Option<u16>,
	pub build_minor: Option<u16>,
}

impl std::fmt::Display for Version {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}.{}.{}.{}",
			self.version_major,
			self.version_minor,
			self.build_major.unwrap_or(0),
			self.build_minor.unwrap_or(0)
		)
	}
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Build {
	pub version: Option<Version>,
	#[xml_bind(tag = "Type")]
	pub build_type: Option<BuildType>,
	pub time: Option<String>,
	pub builder: Option<String>,
}
