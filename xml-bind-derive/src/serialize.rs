use crate::element::{
	NodeInput,
	Shape,
};
use proc_macro2::TokenStream;
use quote::quote;

/// Body of `Node::build_node`
pub fn build_node(input: &NodeInput) -> TokenStream {
	let krate = &input.krate;
	match &input.shape {
		Shape::Struct(properties) if properties.is_empty() => quote! {
			let _ = out;
			::std::result::Result::Ok(())
		},
		Shape::Struct(properties) => {
			let emit = properties.iter().enumerate().map(|(index, p)| {
				let ident = &p.ident;
				quote!(out.property(&properties[#index], &self.#ident)?;)
			});
			quote! {
				let properties = <Self as #krate::Node>::DESCRIPTOR.properties;
				#(#emit)*
				::std::result::Result::Ok(())
			}
		},
		Shape::Family { variants, .. } => {
			// alternatives re-emit their discriminator
			let arms = variants.iter().map(|v| {
				let ident = &v.ident;
				quote! {
					Self::#ident(inner) => {
						if let ::std::option::Option::Some(discriminator) = #krate::Node::descriptor(inner).discriminator {
							out.discriminator(discriminator);
						}
						#krate::Node::build_node(inner, out)
					},
				}
			});
			quote! {
				match self {
					#(#arms)*
				}
			}
		},
	}
}

/// `Node::descriptor` for families: the one of the active alternative
pub fn descriptor_fn(input: &NodeInput) -> TokenStream {
	let krate = &input.krate;
	match &input.shape {
		Shape::Struct(_) => TokenStream::new(),
		Shape::Family { variants, .. } => {
			let arms = variants.iter().map(|v| {
				let ident = &v.ident;
				quote!(Self::#ident(inner) => #krate::Node::descriptor(inner),)
			});
			quote! {
				fn descriptor(&self) -> &'static #krate::schema::TypeDescriptor {
					match self {
						#(#arms)*
					}
				}
			}
		},
	}
}
