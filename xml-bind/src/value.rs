//! Property transforms
//!
//! `Value` converts a single raw occurrence (attribute value, simple-content element or nested
//! element) into a field value and back.  `Field` adds the cardinality on top: `Option<T>`,
//! `Vec<T>`, and plain scalar types for properties that must be present.
//!
//! Scalars implement `TextValue`; every `TextValue` automatically is a `Value`.  Nested types get
//! their `Value` implementation from `#[derive(Node)]`.

use crate::{
	errors,
	parser::{
		ParseContext,
		Raw,
		Site,
	},
	schema::{
		Cardinality,
		Kind,
		PropertyDescriptor,
		ValueKind,
	},
	serializer::ElementBuilder,
	Result,
};
use chrono::{
	DateTime,
	NaiveDate,
	NaiveDateTime,
	TimeZone,
	Utc,
};
use std::borrow::Cow;

/// Scalar that is represented as text (attribute value or simple element content)
pub trait TextValue: Sized {
	/// Transform category
	const KIND: ValueKind;

	/// Parse from text; the error is a short reason.
	fn parse_text(text: &str) -> std::result::Result<Self, String>;

	/// Canonical text representation
	fn format_text(&self) -> Cow<'_, str>;
}

/// A single occurrence of a property value
pub trait Value: Sized {
	/// Transform category
	const KIND: ValueKind;

	/// Convert a raw occurrence
	fn parse_value(raw: &Raw<'_>, site: &Site, ctx: &mut ParseContext) -> Result<Self>;

	/// Emit as attribute or child element of `out`
	fn build_value(&self, property: &'static PropertyDescriptor, out: &mut ElementBuilder<'_>) -> Result<()>;
}

impl<T: TextValue> Value for T {
	const KIND: ValueKind = <T as TextValue>::KIND;

	fn parse_value(raw: &Raw<'_>, site: &Site, _ctx: &mut ParseContext) -> Result<Self> {
		let text = raw.text();
		T::parse_text(&text).map_err(|reason| errors::value_coercion(site, &text, reason))
	}

	fn build_value(&self, property: &'static PropertyDescriptor, out: &mut ElementBuilder<'_>) -> Result<()> {
		let text = self.format_text();
		match property.kind {
			Kind::Attribute => out.attribute(property.tag, text),
			Kind::Element => out.text_element(property.tag, text),
		}
		Ok(())
	}
}

/// A typed field: value plus cardinality
pub trait Field: Sized {
	/// Occurrences
	const CARDINALITY: Cardinality;
	/// Transform category of a single occurrence
	const KIND: ValueKind;

	/// Convert all occurrences of the property (empty if absent)
	fn parse_field(raws: Vec<Raw<'_>>, site: &Site, ctx: &mut ParseContext) -> Result<Self>;

	/// Emit all occurrences; unset values emit nothing
	fn build_field(&self, property: &'static PropertyDescriptor, out: &mut ElementBuilder<'_>) -> Result<()>;
}

impl<T: Value> Field for Option<T> {
	const CARDINALITY: Cardinality = Cardinality::Optional;
	const KIND: ValueKind = <T as Value>::KIND;

	fn parse_field(raws: Vec<Raw<'_>>, site: &Site, ctx: &mut ParseContext) -> Result<Self> {
		match raws.first() {
			Some(raw) => {
				if raws.len() > 1 {
					ctx.duplicate_property(site);
				}
				Ok(Some(T::parse_value(raw, site, ctx)?))
			},
			None => Ok(None),
		}
	}

	fn build_field(&self, property: &'static PropertyDescriptor, out: &mut ElementBuilder<'_>) -> Result<()> {
		if let Some(value) = self {
			value.build_value(property, out)?;
		}
		Ok(())
	}
}

impl<T: Value> Field for Vec<T> {
	const CARDINALITY: Cardinality = Cardinality::Many;
	const KIND: ValueKind = <T as Value>::KIND;

	fn parse_field(raws: Vec<Raw<'_>>, site: &Site, ctx: &mut ParseContext) -> Result<Self> {
		raws.iter().map(|raw| T::parse_value(raw, site, ctx)).collect()
	}

	fn build_field(&self, property: &'static PropertyDescriptor, out: &mut ElementBuilder<'_>) -> Result<()> {
		for value in self {
			value.build_value(property, out)?;
		}
		Ok(())
	}
}

macro_rules! required_field {
	($($ty:ty),* $(,)?) => {$(
		impl Field for $ty {
			const CARDINALITY: Cardinality = Cardinality::One;
			const KIND: ValueKind = <$ty as TextValue>::KIND;

			fn parse_field(raws: Vec<Raw<'_>>, site: &Site, ctx: &mut ParseContext) -> Result<Self> {
				match raws.first() {
					Some(raw) => {
						if raws.len() > 1 {
							ctx.duplicate_property(site);
						}
						<$ty as Value>::parse_value(raw, site, ctx)
					},
					None => Err(errors::missing_property(site)),
				}
			}

			fn build_field(&self, property: &'static PropertyDescriptor, out: &mut ElementBuilder<'_>) -> Result<()> {
				self.build_value(property, out)
			}
		}
	)*};
}

required_field!(String, bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, DateTime<Utc>, NaiveDate);

impl TextValue for String {
	const KIND: ValueKind = ValueKind::Text;

	fn parse_text(text: &str) -> std::result::Result<Self, String> {
		Ok(text.into())
	}

	fn format_text(&self) -> Cow<'_, str> {
		Cow::Borrowed(self)
	}
}

/// Only the literal tokens `true` and `false` are accepted
impl TextValue for bool {
	const KIND: ValueKind = ValueKind::Boolean;

	fn parse_text(text: &str) -> std::result::Result<Self, String> {
		match text.trim() {
			"true" => Ok(true),
			"false" => Ok(false),
			_ => Err(String::from("expected `true` or `false`")),
		}
	}

	fn format_text(&self) -> Cow<'_, str> {
		Cow::Borrowed(if *self { "true" } else { "false" })
	}
}

macro_rules! integer_text_value {
	($($ty:ty),*) => {$(
		impl TextValue for $ty {
			const KIND: ValueKind = ValueKind::Number;

			fn parse_text(text: &str) -> std::result::Result<Self, String> {
				text.trim().parse::<$ty>().map_err(|e| e.to_string())
			}

			fn format_text(&self) -> Cow<'_, str> {
				Cow::Owned(self.to_string())
			}
		}
	)*};
}

integer_text_value!(i8, i16, i32, i64, u8, u16, u32, u64);

// `Debug` keeps the decimal point (`201.0`) and is the shortest round-trip representation.
macro_rules! float_text_value {
	($($ty:ty),*) => {$(
		impl TextValue for $ty {
			const KIND: ValueKind = ValueKind::Number;

			fn parse_text(text: &str) -> std::result::Result<Self, String> {
				text.trim().parse::<$ty>().map_err(|e| e.to_string())
			}

			fn format_text(&self) -> Cow<'_, str> {
				Cow::Owned(if self.is_nan() {
					String::from("NaN")
				} else if self.is_infinite() {
					String::from(if *self > 0.0 { "INF" } else { "-INF" })
				} else {
					format!("{:?}", self)
				})
			}
		}
	)*};
}

float_text_value!(f32, f64);

/// Format used for all emitted timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Accepts RFC 3339 and, as fallback, date-times without offset (taken as UTC); always emitted
/// with milliseconds and `Z`.
impl TextValue for DateTime<Utc> {
	const KIND: ValueKind = ValueKind::Timestamp;

	fn parse_text(text: &str) -> std::result::Result<Self, String> {
		let text = text.trim();
		if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
			return Ok(ts.with_timezone(&Utc));
		}
		NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
			.map(|naive| Utc.from_utc_datetime(&naive))
			.map_err(|e| e.to_string())
	}

	fn format_text(&self) -> Cow<'_, str> {
		Cow::Owned(self.format(TIMESTAMP_FORMAT).to_string())
	}
}

impl TextValue for NaiveDate {
	const KIND: ValueKind = ValueKind::Date;

	fn parse_text(text: &str) -> std::result::Result<Self, String> {
		NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|e| e.to_string())
	}

	fn format_text(&self) -> Cow<'_, str> {
		Cow::Owned(self.format("%Y-%m-%d").to_string())
	}
}

/// Declare an enumeration of fixed text tokens implementing `TextValue`
///
/// ```
/// xml_bind::text_enum! {
/// 	/// Sport of an activity
/// 	pub enum Sport {
/// 		Running = "Running",
/// 		Biking = "Biking",
/// 		Other = "Other",
/// 	}
/// }
///
/// use xml_bind::TextValue;
/// assert_eq!(Sport::parse_text("Biking"), Ok(Sport::Biking));
/// assert_eq!(Sport::Other.as_str(), "Other");
/// ```
#[macro_export]
macro_rules! text_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$($(#[$vmeta:meta])* $variant:ident = $text:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
		$vis enum $name {
			$($(#[$vmeta])* $variant,)+
		}

		impl $name {
			/// All values in declaration order
			pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

			/// Text token of this value
			pub fn as_str(&self) -> &'static str {
				match self {
					$(Self::$variant => $text,)+
				}
			}
		}

		impl $crate::TextValue for $name {
			const KIND: $crate::schema::ValueKind = $crate::schema::ValueKind::Enumeration;

			fn parse_text(text: &str) -> ::std::result::Result<Self, ::std::string::String> {
				match text.trim() {
					$($text => Ok(Self::$variant),)+
					other => Err(::std::format!("unknown {} {:?}", ::std::stringify!($name), other)),
				}
			}

			fn format_text(&self) -> ::std::borrow::Cow<'_, str> {
				::std::borrow::Cow::Borrowed(self.as_str())
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str(self.as_str())
			}
		}
	};
}

#[cfg(test)]
mod test {
	use super::*;
	use chrono::{
		Datelike,
		Timelike,
	};

	#[test]
	fn floats_keep_decimal_point() {
		assert_eq!(201.0f64.format_text(), "201.0");
		assert_eq!(6.105999946594238f64.format_text(), "6.105999946594238");
		assert_eq!(f64::INFINITY.format_text(), "INF");
		assert_eq!(f64::parse_text(" 1000.0 "), Ok(1000.0));
		assert!(f64::parse_text("fast").is_err());
	}

	#[test]
	fn booleans_use_literal_tokens() {
		assert_eq!(bool::parse_text("true"), Ok(true));
		assert_eq!(bool::parse_text("false"), Ok(false));
		assert!(bool::parse_text("1").is_err());
		assert!(bool::parse_text("True").is_err());
		assert_eq!(false.format_text(), "false");
	}

	#[test]
	fn timestamps_are_normalized() {
		let ts = DateTime::<Utc>::parse_text("2014-12-26T10:00:39Z").unwrap();
		assert_eq!((ts.year(), ts.hour(), ts.second()), (2014, 10, 39));
		assert_eq!(ts.format_text(), "2014-12-26T10:00:39.000Z");

		let offset = DateTime::<Utc>::parse_text("2014-12-26T11:00:39.250+01:00").unwrap();
		assert_eq!(offset.format_text(), "2014-12-26T10:00:39.250Z");

		let naive = DateTime::<Utc>::parse_text("2014-12-26T10:00:39").unwrap();
		assert_eq!(naive, ts);

		assert!(DateTime::<Utc>::parse_text("yesterday").is_err());
	}

	#[test]
	fn dates() {
		let day = NaiveDate::parse_text("2015-01-05").unwrap();
		assert_eq!(day.format_text(), "2015-01-05");
	}

	crate::text_enum! {
		enum Intensity {
			Active = "Active",
			Resting = "Resting",
		}
	}

	#[test]
	fn enums() {
		assert_eq!(Intensity::parse_text("Resting"), Ok(Intensity::Resting));
		assert!(Intensity::parse_text("Sleeping").is_err());
		assert_eq!(Intensity::ALL.len(), 2);
		assert_eq!(Intensity::Active.to_string(), "Active");
		assert_eq!(<Intensity as Value>::KIND, ValueKind::Enumeration);
	}
}
