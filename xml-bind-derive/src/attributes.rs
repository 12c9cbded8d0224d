use syn::{
	Attribute,
	Expr,
	LitStr,
	Path,
	Result,
};

/// `#[xml_bind(...)]` on the type
#[derive(Default)]
pub struct ContainerAttributes {
	pub name: Option<String>,
	pub namespace: Option<Expr>,
	pub discriminator: Option<Discriminator>,
	pub crate_path: Option<Path>,
}

pub enum Discriminator {
	/// same as the type name
	Name,
	Custom(String),
}

/// `#[xml_bind(...)]` on a field or variant
#[derive(Default)]
pub struct FieldAttributes {
	pub attr: bool,
	pub tag: Option<String>,
	pub fallback: bool,
}

fn xml_bind_attributes(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
	attrs.iter().filter(|attr| attr.path().is_ident("xml_bind"))
}

impl ContainerAttributes {
	pub fn parse(attrs: &[Attribute]) -> Result<Self> {
		let mut result = Self::default();
		for attr in xml_bind_attributes(attrs) {
			attr.parse_nested_meta(|meta| {
				if meta.path.is_ident("name") {
					result.name = Some(meta.value()?.parse::<LitStr>()?.value());
				} else if meta.path.is_ident("namespace") {
					result.namespace = Some(meta.value()?.parse::<Expr>()?);
				} else if meta.path.is_ident("discriminator") {
					result.discriminator = Some(if meta.input.peek(syn::Token![=]) {
						Discriminator::Custom(meta.value()?.parse::<LitStr>()?.value())
					} else {
						Discriminator::Name
					});
				} else if meta.path.is_ident("crate") {
					result.crate_path = Some(meta.value()?.parse::<Path>()?);
				} else {
					return Err(meta.error("unknown xml_bind container attribute"));
				}
				Ok(())
			})?;
		}
		Ok(result)
	}
}

impl FieldAttributes {
	pub fn parse(attrs: &[Attribute]) -> Result<Self> {
		let mut result = Self::default();
		for attr in xml_bind_attributes(attrs) {
			attr.parse_nested_meta(|meta| {
				if meta.path.is_ident("attr") {
					result.attr = true;
				} else if meta.path.is_ident("tag") {
					result.tag = Some(meta.value()?.parse::<LitStr>()?.value());
				} else if meta.path.is_ident("fallback") {
					result.fallback = true;
				} else {
					return Err(meta.error("unknown xml_bind field attribute"));
				}
				Ok(())
			})?;
		}
		Ok(result)
	}
}

/// `start_time` -> `StartTime`
pub fn pascal_case(ident: &str) -> String {
	ident
		.trim_start_matches("r#")
		.split('_')
		.filter(|part| !part.is_empty())
		.map(|part| {
			let mut chars = part.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
				None => String::new(),
			}
		})
		.collect()
}
