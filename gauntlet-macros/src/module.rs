//! Macros for dependency injection modules

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{ImplItem, ItemImpl, LitStr};

use self::attr::{PROVIDES, ProviderFn, ProvidesKind};

pub(super) mod attr;

/// Implements `Module` for the type of an inherent impl block,
/// registering every method tagged with `#[provides]`
pub(super) fn expand_module(mut input: ItemImpl) -> syn::Result<TokenStream> {
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(path, "`#[module]` must be placed on an inherent impl block"));
    }
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(&input.generics, "generic modules are not supported"));
    }

    let mut providers = Vec::new();
    for item in &mut input.items {
        let ImplItem::Fn(method) = item else {
            continue;
        };
        let Some(position) = method.attrs.iter().position(|attr| attr.path().is_ident(PROVIDES)) else {
            continue;
        };
        let attr = method.attrs.remove(position);
        if let Some(extra) = method.attrs.iter().find(|attr| attr.path().is_ident(PROVIDES)) {
            return Err(syn::Error::new_spanned(extra, "duplicate `#[provides]` attribute"));
        }
        let kind = ProvidesKind::from_attr(&attr)?;
        providers.push(ProviderFn::from_method(method, kind)?);
    }

    let self_ty = &input.self_ty;
    let registrations = providers.iter().map(expand_registration);

    Ok(quote! {
        #input

        impl ::gauntlet_di::Module for #self_ty {
            fn configure(
                self: ::std::sync::Arc<Self>,
                builder: &mut ::gauntlet_di::ContainerBuilder
            ) -> ::core::result::Result<(), ::gauntlet_di::error::Error> {
                #(#registrations)*
                ::core::result::Result::Ok(())
            }
        }
    })
}

/// Expands a single `builder.register_fn(...)` call
fn expand_registration(provider: &ProviderFn) -> TokenStream {
    let ident = &provider.ident;
    let name = LitStr::new(&provider.name(), ident.span());
    let names = provider
        .param_names()
        .into_iter()
        .map(|name| LitStr::new(&name, ident.span()));
    let args = provider.params.iter().map(|(ident, _)| ident);
    let params = provider.params.iter().map(|(ident, ty)| quote! { #ident: #ty });
    let register = match provider.kind {
        ProvidesKind::Infallible => format_ident!("register_fn"),
        ProvidesKind::Fallible => format_ident!("register_try_fn"),
    };

    if provider.receiver {
        quote! {
            {
                let __module = ::std::sync::Arc::clone(&self);
                builder.#register(#name, [#(#names),*], move |#(#params),*| __module.#ident(#(#args),*))?;
            }
        }
    } else {
        quote! {
            builder.#register(#name, [#(#names),*], |#(#params),*| Self::#ident(#(#args),*))?;
        }
    }
}
