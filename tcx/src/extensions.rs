//! `ActivityExtension` v2 (`TPX` on trackpoints, `LX` on laps)
//!
//! Any other child of `<Extensions>` is kept as opaque element.

use crate::{
	enums::CadenceSensorType,
	ACTIVITY_EXTENSION_NS,
};
use xml_bind::{
	dom::XmlElement,
	extensions::{
		Extension,
		ExtensionMap,
	},
	parser::ParseContext,
	schema::TypeDescriptor,
	serializer::ElementBuilder,
	Node,
	Result,
};

/// Extension container of all TCX types
pub type Extensions = ExtensionMap<ActivityExtension>;

/// Descriptor of `Extensions_t`
pub const EXTENSIONS: TypeDescriptor = TypeDescriptor {
	name: "Extensions_t",
	properties: &[],
	namespace: None,
	discriminator: None,
};

/// Trackpoint extension (`TPX`)
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(namespace = ACTIVITY_EXTENSION_NS)]
pub struct ActivityTrackpointExtension {
	#[xml_bind(attr)]
	pub cadence_sensor: Option<CadenceSensorType>,
	pub speed: Option<f64>,
	pub run_cadence: Option<u8>,
	pub watts: Option<u16>,
	pub extensions: Option<Extensions>,
}

/// Lap extension (`LX`)
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(namespace = ACTIVITY_EXTENSION_NS)]
pub struct ActivityLapExtension {
	pub avg_speed: Option<f64>,
	pub max_bike_cadence: Option<u8>,
	pub avg_run_cadence: Option<u8>,
	pub max_run_cadence: Option<u8>,
	pub steps: Option<u16>,
	pub avg_watts: Option<u16>,
	pub max_watts: Option<u16>,
	pub extensions: Option<Extensions>,
}

/// Registered extension elements
#[derive(Clone, PartialEq, Debug)]
pub enum ActivityExtension {
	/// `<TPX>`
	Tpx(ActivityTrackpointExtension),
	/// `<LX>`
	Lx(ActivityLapExtension),
}

impl Extension for ActivityExtension {
	const DESCRIPTOR: &'static TypeDescriptor = &EXTENSIONS;

	fn parse_extension(element: &XmlElement, ctx: &mut ParseContext) -> Result<Option<Self>> {
		Ok(match element.name.as_str() {
			"TPX" => Some(ActivityExtension::Tpx(ActivityTrackpointExtension::parse_node(element, ctx)?)),
			"LX" => Some(ActivityExtension::Lx(ActivityLapExtension::parse_node(element, ctx)?)),
			_ => None,
		})
	}

	fn tag(&self) -> &'static str {
		match self {
			ActivityExtension::Tpx(_) => "TPX",
			ActivityExtension::Lx(_) => "LX",
		}
	}

	fn build_extension(&self, out: &mut ElementBuilder<'_>) -> Result<()> {
		match self {
			ActivityExtension::Tpx(tpx) => out.node(self.tag(), tpx),
			ActivityExtension::Lx(lx) => out.node(self.tag(), lx),
		}
	}
}

/// Typed access to the registered extensions
pub trait ActivityExtensions {
	/// First `TPX` entry
	fn tpx(&self) -> Option<&ActivityTrackpointExtension>;
	/// First `LX` entry
	fn lx(&self) -> Option<&ActivityLapExtension>;
}

impl ActivityExtensions for Extensions {
	fn tpx(&self) -> Option<&ActivityTrackpointExtension> {
		self.known().find_map(|e| match e {
			ActivityExtension::Tpx(tpx) => Some(tpx),
			_ => None,
		})
	}

	fn lx(&self) -> Option<&ActivityLapExtension> {
		self.known().find_map(|e| match e {
			ActivityExtension::Lx(lx) => Some(lx),
			_ => None,
		})
	}
}

impl ActivityExtensions for Option<Extensions> {
	fn tpx(&self) -> Option<&ActivityTrackpointExtension> {
		self.as_ref().and_then(|e| e.tpx())
	}

	fn lx(&self) -> Option<&ActivityLapExtension> {
		self.as_ref().and_then(|e| e.lx())
	}
}
