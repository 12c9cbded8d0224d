use crate::{
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
	Root,
};
use chrono::{
	DateTime,
	Utc,
};

pub const SESSION_NS: &str = "urn:example:session";
pub const EXT_NS: &str = "urn:example:ext";

crate::text_enum! {
	pub enum Intensity {
		Active = "Active",
		Resting = "Resting",
	}
}

#[derive(crate::Node)]
#[derive(Clone, PartialEq, Debug)]
#[xml_bind(crate = crate)]
pub struct Session {
	#[xml_bind(attr)]
	pub sport: Option<String>,
	pub id: DateTime<Utc>,
	#[xml_bind(tag = "Lap")]
	pub laps: Vec<Lap>,
	pub creator: Option<AbstractSource>,
	pub extensions: Option<Extensions>,
}

impl Root for Session {
	const TAG: &'static str = "Session";
	const NAMESPACE: &'static str = SESSION_NS;
	const SCHEMA_LOCATION: Option<&'static str> = Some("urn:example:session session.xsd");
	const NAMESPACES: &'static [(&'static str, &'static str)] = &[("ns3", EXT_NS)];
}

#[derive(crate::Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(crate = crate)]
pub struct Lap {
	#[xml_bind(attr)]
	pub start_time: Option<DateTime<Utc>>,
	pub total_time_seconds: Option<f64>,
	pub intensity: Option<Intensity>,
	pub notes: Option<String>,
}

#[derive(crate::Node)]
#[derive(Clone, PartialEq, Debug)]
#[xml_bind(crate = crate)]
pub enum AbstractSource {
	#[xml_bind(fallback)]
	Source(Source),
	Device(Device),
	Application(Application),
}

#[derive(crate::Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(crate = crate, name = "AbstractSource_t")]
pub struct Source {
	pub name: Option<String>,
}

#[derive(crate::Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(crate = crate, discriminator)]
pub struct Device {
	pub name: Option<String>,
	pub unit_id: Option<u32>,
	#[xml_bind(tag = "ProductID")]
	pub product_id: Option<u16>,
}

#[derive(crate::Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(crate = crate, discriminator)]
pub struct Application {
	pub name: Option<String>,
	pub lang_id: Option<String>,
}

#[derive(crate::Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(crate = crate, namespace = EXT_NS)]
pub struct SpeedExtension {
	#[xml_bind(attr)]
	pub sensor: Option<String>,
	pub value: Option<f64>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum SampleExtension {
	Speed(SpeedExtension),
}

pub const EXTENSIONS: TypeDescriptor = TypeDescriptor {
	name: "Extensions_t",
	properties: &[],
	namespace: None,
	discriminator: None,
};

impl Extension for SampleExtension {
	const DESCRIPTOR: &'static TypeDescriptor = &EXTENSIONS;

	fn parse_extension(element: &XmlElement, ctx: &mut ParseContext) -> Result<Option<Self>> {
		match element.name.as_str() {
			"Speed" => Ok(Some(SampleExtension::Speed(SpeedExtension::parse_node(element, ctx)?))),
			_ => Ok(None),
		}
	}

	fn tag(&self) -> &'static str {
		match self {
			SampleExtension::Speed(_) => "Speed",
		}
	}

	fn build_extension(&self, out: &mut ElementBuilder<'_>) -> Result<()> {
		match self {
			SampleExtension::Speed(speed) => out.node(self.tag(), speed),
		}
	}
}

pub type Extensions = ExtensionMap<SampleExtension>;

fn element(prefix: Option<&str>, name: &str, namespace: Option<&str>) -> XmlElement {
	let mut e = XmlElement::new(prefix.map(String::from), name);
	e.namespace = namespace.map(String::from);
	e
}

/// `<Extensions>` with one registered and two unknown children
pub fn sample_extensions() -> XmlElement {
	let mut speed = element(Some("x"), "Speed", Some(EXT_NS));
	speed.attributes.push(crate::dom::XmlAttribute::new("Sensor", "Footpod"));
	let mut value = element(Some("x"), "Value", Some(EXT_NS));
	value.push_text("1.5");
	speed.push_element(value);

	let mut vendor = element(Some("v"), "Vendor", Some("urn:vendor"));
	vendor.push_text("42");

	let mut extensions = element(None, "Extensions", None);
	extensions.push_element(speed);
	extensions.push_element(vendor);
	extensions.push_element(element(None, "Plain", None));
	extensions
}

pub const SESSION_DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Session xmlns="urn:example:session" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:x="urn:example:ext" xsi:schemaLocation="urn:example:session session.xsd" Sport="Running">
  <Id>2014-12-26T10:00:39Z</Id>
  <Lap StartTime="2014-12-26T10:00:39Z">
    <TotalTimeSeconds>368.0</TotalTimeSeconds>
    <Intensity>Active</Intensity>
  </Lap>
  <Lap StartTime="2014-12-26T10:06:47Z">
    <TotalTimeSeconds>201</TotalTimeSeconds>
    <Unknown>ignored</Unknown>
  </Lap>
  <Creator xsi:type="Device_t">
    <Name>Forerunner 920XT</Name>
    <UnitId>3890304567</UnitId>
    <ProductID>1765</ProductID>
  </Creator>
  <Extensions>
    <x:Speed Sensor="Footpod"><x:Value>1.5</x:Value></x:Speed>
    <v:Vendor xmlns:v="urn:vendor"><v:Score>42</v:Score></v:Vendor>
  </Extensions>
</Session>
"#;
