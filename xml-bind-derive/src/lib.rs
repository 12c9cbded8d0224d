//! Derive `xml-bind` trait implementations
//!
//! `#[derive(Node)]` on a struct with named fields (or a unit struct) generates the descriptor
//! table and the `Node` and `Value` implementations.  Supported attributes on the struct:
//! - `#[xml_bind(name = "...")]`: type name in the descriptor; defaults to the struct name with
//!   `_t` appended
//! - `#[xml_bind(discriminator)]`: this type is an alternative of a polymorphic family, selected
//!   by `xsi:type` equal to its name; `#[xml_bind(discriminator = "...")]` uses another value
//! - `#[xml_bind(namespace = EXPR)]`: namespace URI (`&'static str` expression) of elements of
//!   this type; defaults to the document's default namespace
//! - `#[xml_bind(crate = path)]`: path of the `xml-bind` crate; defaults to `::xml_bind`
//!
//! And on struct fields:
//! - `#[xml_bind(attr)]`: the field is an attribute (otherwise a child element)
//! - `#[xml_bind(tag = "...")]`: attribute key or child tag; defaults to the field name in
//!   `PascalCase`
//!
//! The field type decides the cardinality: `Option<T>` is optional, `Vec<T>` repeated, plain
//! scalars are required.
//!
//! On an enum where each variant wraps a single node type, `#[derive(Node)]` generates a
//! polymorphic family (`Polymorphic`): the variant marked `#[xml_bind(fallback)]` is the base type,
//! used when there is no (or an unregistered) discriminator.
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/xml-bind-derive/0.1.0")]

extern crate proc_macro;

mod attributes;
mod element;
mod parser;
mod serialize;

use proc_macro::TokenStream;
use quote::quote;
use syn::{
	parse_macro_input,
	DeriveInput,
};

use crate::element::NodeInput;

/// Derive `xml_bind::Node` (and `xml_bind::Value`, plus `xml_bind::Polymorphic` for enums)
#[proc_macro_derive(Node, attributes(xml_bind))]
pub fn derive_node(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	TokenStream::from(match NodeInput::from_derive_input(&input) {
		Ok(input) => derive(&input),
		Err(e) => e.to_compile_error(),
	})
}

fn derive(input: &NodeInput) -> proc_macro2::TokenStream {
	let krate = &input.krate;
	let ident = &input.ident;
	let descriptor = input.descriptor();
	let descriptor_fn = serialize::descriptor_fn(input);
	let parse = parser::parse_node(input);
	let build = serialize::build_node(input);
	let value = input.value_impl();
	let polymorphic = input.polymorphic_impl();

	quote! {
		impl #krate::Node for #ident {
			#descriptor

			#descriptor_fn

			fn parse_node(
				element: &#krate::dom::XmlElement,
				ctx: &mut #krate::parser::ParseContext,
			) -> #krate::Result<Self> {
				#parse
			}

			fn build_node(&self, out: &mut #krate::serializer::ElementBuilder<'_>) -> #krate::Result<()> {
				#build
			}
		}

		#value

		#polymorphic
	}
}
