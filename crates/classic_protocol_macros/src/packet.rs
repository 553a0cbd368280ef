use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{parse2, parse_quote, DeriveInput, Error, Expr, Result};

use crate::{add_trait_bounds, parse_packet_helper_attr};

pub(super) fn derive_packet(item: TokenStream) -> Result<TokenStream> {
    let mut input = parse2::<DeriveInput>(item)?;

    let Some(packet_attr) = parse_packet_helper_attr(&input.attrs)? else {
        return Err(Error::new(input.span(), "missing `packet` attribute"));
    };

    let Some(packet_id) = packet_attr.id else {
        return Err(Error::new(
            packet_attr.span,
            "missing `id = ...` value from packet attribute",
        ));
    };

    // Everything a Classic client sends is serverbound, so that is the default.
    let side: Expr = packet_attr
        .side
        .unwrap_or_else(|| parse_quote!(::classic_protocol::__private::PacketSide::Serverbound));

    add_trait_bounds(&mut input.generics, quote!(::std::fmt::Debug));

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let name_str = input.ident.to_string();
    let name = input.ident;

    Ok(quote! {
        impl #impl_generics ::classic_protocol::__private::Packet for #name #ty_generics
        #where_clause
        {
            const ID: u8 = #packet_id;
            const NAME: &'static str = #name_str;
            const SIDE: ::classic_protocol::__private::PacketSide = #side;
        }
    })
}
