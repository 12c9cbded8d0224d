use crate::attributes::{
	pascal_case,
	ContainerAttributes,
	Discriminator,
	FieldAttributes,
};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{
	parse_quote,
	spanned::Spanned,
	Data,
	DeriveInput,
	Error,
	Fields,
	Ident,
	Path,
	Result,
	Type,
};

/// Struct field mapped to a property
pub struct Property {
	pub ident: Ident,
	pub ty: Type,
	pub tag: String,
	pub attribute: bool,
}

/// Alternative of a polymorphic family
pub struct Variant {
	pub ident: Ident,
	pub ty: Type,
}

pub enum Shape {
	Struct(Vec<Property>),
	Family {
		variants: Vec<Variant>,
		fallback: usize,
	},
}

pub struct NodeInput {
	pub ident: Ident,
	pub name: String,
	pub namespace: TokenStream,
	pub discriminator: Option<String>,
	pub krate: Path,
	pub shape: Shape,
}

impl NodeInput {
	pub fn from_derive_input(input: &DeriveInput) -> Result<Self> {
		if !input.generics.params.is_empty() {
			return Err(Error::new(input.generics.span(), "generic types can't derive Node"));
		}
		let attrs = ContainerAttributes::parse(&input.attrs)?;
		let name = attrs.name.unwrap_or_else(|| format!("{}_t", input.ident));
		let discriminator = attrs.discriminator.map(|d| match d {
			Discriminator::Name => name.clone(),
			Discriminator::Custom(value) => value,
		});
		let namespace = match attrs.namespace {
			Some(expr) => quote!(::std::option::Option::Some(#expr)),
			None => quote!(::std::option::Option::None),
		};
		let shape = match &input.data {
			Data::Struct(data) => Shape::Struct(properties(&data.fields)?),
			Data::Enum(data) => {
				let mut variants = Vec::new();
				let mut fallback = None;
				for variant in &data.variants {
					let ty = match &variant.fields {
						Fields::Unnamed(fields) if fields.unnamed.len() == 1 => fields.unnamed[0].ty.clone(),
						_ => {
							return Err(Error::new(variant.span(), "variants need exactly one unnamed field"));
						},
					};
					if FieldAttributes::parse(&variant.attrs)?.fallback {
						if fallback.is_some() {
							return Err(Error::new(variant.span(), "only one variant can be the fallback"));
						}
						fallback = Some(variants.len());
					}
					variants.push(Variant {
						ident: variant.ident.clone(),
						ty,
					});
				}
				let fallback = fallback.ok_or_else(|| {
					Error::new(input.ident.span(), "mark the base variant with #[xml_bind(fallback)]")
				})?;
				Shape::Family { variants, fallback }
			},
			Data::Union(_) => return Err(Error::new(input.ident.span(), "unions can't derive Node")),
		};
		Ok(Self {
			ident: input.ident.clone(),
			name,
			namespace,
			discriminator,
			krate: attrs.crate_path.unwrap_or_else(|| parse_quote!(::xml_bind)),
			shape,
		})
	}

	/// `const DESCRIPTOR` item
	pub fn descriptor(&self) -> TokenStream {
		let krate = &self.krate;
		match &self.shape {
			Shape::Struct(properties) => {
				let name = &self.name;
				let namespace = &self.namespace;
				let discriminator = match &self.discriminator {
					Some(d) => quote!(::std::option::Option::Some(#d)),
					None => quote!(::std::option::Option::None),
				};
				let properties = properties.iter().map(|p| {
					let tag = &p.tag;
					let field = p.ident.to_string();
					let ty = &p.ty;
					let kind = if p.attribute { quote!(Attribute) } else { quote!(Element) };
					quote! {
						#krate::schema::PropertyDescriptor {
							tag: #tag,
							field: #field,
							kind: #krate::schema::Kind::#kind,
							cardinality: <#ty as #krate::Field>::CARDINALITY,
							value: <#ty as #krate::Field>::KIND,
						}
					}
				});
				quote! {
					const DESCRIPTOR: &'static #krate::schema::TypeDescriptor = &#krate::schema::TypeDescriptor {
						name: #name,
						properties: &[#(#properties),*],
						namespace: #namespace,
						discriminator: #discriminator,
					};
				}
			},
			Shape::Family { variants, fallback } => {
				let base = &variants[*fallback].ty;
				quote! {
					const DESCRIPTOR: &'static #krate::schema::TypeDescriptor = <#base as #krate::Node>::DESCRIPTOR;
				}
			},
		}
	}

	/// `impl Value`: nested nodes are child elements
	pub fn value_impl(&self) -> TokenStream {
		let krate = &self.krate;
		let ident = &self.ident;
		quote! {
			impl #krate::Value for #ident {
				const KIND: #krate::schema::ValueKind = #krate::schema::ValueKind::Node;

				fn parse_value(
					raw: &#krate::parser::Raw<'_>,
					site: &#krate::parser::Site,
					ctx: &mut #krate::parser::ParseContext,
				) -> #krate::Result<Self> {
					#krate::parser::parse_nested(raw, site, ctx)
				}

				fn build_value(
					&self,
					property: &'static #krate::schema::PropertyDescriptor,
					out: &mut #krate::serializer::ElementBuilder<'_>,
				) -> #krate::Result<()> {
					out.node(property.tag, self)
				}
			}
		}
	}

	/// `impl Polymorphic` for families
	pub fn polymorphic_impl(&self) -> TokenStream {
		let krate = &self.krate;
		let ident = &self.ident;
		match &self.shape {
			Shape::Struct(_) => TokenStream::new(),
			Shape::Family { variants, .. } => {
				let types = variants.iter().map(|v| &v.ty);
				quote! {
					impl #krate::Polymorphic for #ident {
						const VARIANTS: &'static [&'static #krate::schema::TypeDescriptor] = &[
							#(<#types as #krate::Node>::DESCRIPTOR),*
						];
					}
				}
			},
		}
	}
}

fn properties(fields: &Fields) -> Result<Vec<Property>> {
	let named = match fields {
		Fields::Named(named) => &named.named,
		Fields::Unit => return Ok(Vec::new()),
		Fields::Unnamed(_) => return Err(Error::new(fields.span(), "tuple structs can't derive Node")),
	};
	named
		.iter()
		.map(|field| {
			let attrs = FieldAttributes::parse(&field.attrs)?;
			if attrs.fallback {
				return Err(Error::new(field.span(), "fallback is only allowed on enum variants"));
			}
			let ident = field.ident.clone().ok_or_else(|| Error::new(field.span(), "expected named field"))?;
			let tag = attrs.tag.unwrap_or_else(|| pascal_case(&ident.to_string()));
			Ok(Property {
				ident,
				ty: field.ty.clone(),
				tag,
				attribute: attrs.attr,
			})
		})
		.collect()
}
