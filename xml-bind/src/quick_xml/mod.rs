//! Reading and writing `XmlElement` trees using `quick-xml`

mod parser;
mod serializer;

/// Re-export `quick-xml` crate
pub use quick_xml;

pub use self::{
	parser::{
		parse_document,
		Parser,
	},
	serializer::{
		serialize_document,
		write_document,
		Serializer,
	},
};
