use crate::element::{
	NodeInput,
	Shape,
};
use proc_macro2::TokenStream;
use quote::quote;

/// Body of `Node::parse_node`
pub fn parse_node(input: &NodeInput) -> TokenStream {
	let krate = &input.krate;
	match &input.shape {
		Shape::Struct(properties) => {
			let fields = properties.iter().enumerate().map(|(index, p)| {
				let ident = &p.ident;
				quote!(#ident: fields.take(<Self as #krate::Node>::DESCRIPTOR, #index, ctx)?)
			});
			let unused_ctx = if properties.is_empty() { quote!(let _ = ctx;) } else { TokenStream::new() };
			quote! {
				#[allow(unused_mut)]
				let mut fields = #krate::parser::Fields::decompose(element);
				let result = Self {
					#(#fields,)*
				};
				fields.finish(<Self as #krate::Node>::DESCRIPTOR);
				#unused_ctx
				::std::result::Result::Ok(result)
			}
		},
		Shape::Family { variants, fallback } => {
			let arms = variants.iter().enumerate().filter(|(index, _)| index != fallback).map(|(index, v)| {
				let ident = &v.ident;
				let ty = &v.ty;
				quote! {
					::std::option::Option::Some(#index) => Self::#ident(<#ty as #krate::Node>::parse_node(element, ctx)?),
				}
			});
			let base_ident = &variants[*fallback].ident;
			let base_ty = &variants[*fallback].ty;
			quote! {
				::std::result::Result::Ok(
					match ctx.dispatch(element, <Self as #krate::Node>::DESCRIPTOR, <Self as #krate::Polymorphic>::VARIANTS)? {
						#(#arms)*
						_ => Self::#base_ident(<#base_ty as #krate::Node>::parse_node(element, ctx)?),
					}
				)
			}
		},
	}
}
