use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::spanned::Spanned;
use syn::{parse2, Data, DeriveInput, Error, Fields, LitInt, Result};

use crate::{add_trait_bounds, pair_variants_with_discriminants};

pub(super) fn derive_encode(item: TokenStream) -> Result<TokenStream> {
    let mut input = parse2::<DeriveInput>(item)?;

    let input_name = input.ident;

    add_trait_bounds(
        &mut input.generics,
        quote!(::classic_protocol::__private::Encode),
    );

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    match input.data {
        Data::Struct(struct_) => {
            let (encode_fields, field_lens): (TokenStream, TokenStream) = match &struct_.fields {
                Fields::Named(fields) => fields
                    .named
                    .iter()
                    .map(|f| {
                        let name = f.ident.as_ref();
                        let ty = &f.ty;
                        (
                            quote! {
                                self.#name.encode(_buf);
                            },
                            quote! {
                                + <#ty as ::classic_protocol::__private::Encode>::ENCODED_LEN
                            },
                        )
                    })
                    .unzip(),
                Fields::Unnamed(fields) => fields
                    .unnamed
                    .iter()
                    .enumerate()
                    .map(|(i, f)| {
                        let lit = LitInt::new(&i.to_string(), Span::call_site());
                        let ty = &f.ty;
                        (
                            quote! {
                                self.#lit.encode(_buf);
                            },
                            quote! {
                                + <#ty as ::classic_protocol::__private::Encode>::ENCODED_LEN
                            },
                        )
                    })
                    .unzip(),
                Fields::Unit => (TokenStream::new(), TokenStream::new()),
            };

            Ok(quote! {
                #[allow(unused_imports)]
                impl #impl_generics ::classic_protocol::__private::Encode for #input_name #ty_generics
                #where_clause
                {
                    const ENCODED_LEN: usize = 0 #field_lens;

                    fn encode(&self, _buf: &mut impl ::classic_protocol::__private::BufMut) {
                        use ::classic_protocol::__private::Encode;

                        #encode_fields
                    }
                }
            })
        }
        Data::Enum(enum_) => {
            let variants = pair_variants_with_discriminants(enum_.variants)?;

            let encode_arms = variants
                .iter()
                .map(|(disc, variant)| {
                    let variant_name = &variant.ident;

                    match &variant.fields {
                        Fields::Unit => Ok(quote! {
                            Self::#variant_name => #disc.encode(_buf),
                        }),
                        fields => Err(Error::new(
                            fields.span(),
                            "only fieldless enum variants can derive `Encode`",
                        )),
                    }
                })
                .collect::<Result<TokenStream>>()?;

            Ok(quote! {
                #[allow(unused_imports)]
                impl #impl_generics ::classic_protocol::__private::Encode for #input_name #ty_generics
                #where_clause
                {
                    const ENCODED_LEN: usize = 1;

                    fn encode(&self, _buf: &mut impl ::classic_protocol::__private::BufMut) {
                        use ::classic_protocol::__private::Encode;

                        match *self {
                            #encode_arms
                        }
                    }
                }
            })
        }
        Data::Union(u) => Err(Error::new(
            u.union_token.span(),
            "cannot derive `Encode` on unions",
        )),
    }
}
