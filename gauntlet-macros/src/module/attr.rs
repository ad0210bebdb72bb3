//! Parsing of `#[provides]` methods

use syn::{
    parse::{Parse, ParseStream},
    ext::IdentExt,
    Attribute, FnArg, Ident, ImplItemFn, Meta, Pat, ReturnType, Result, Type,
};

/// Name of the marker attribute
pub(crate) const PROVIDES: &str = "provides";

/// Maximum number of parameters a provider can declare
const MAX_PARAMETERS: usize = 5;

/// Options of the `#[provides(...)]` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProvidesKind {
    /// `#[provides]`, the method returns the provided value
    Infallible,

    /// `#[provides(fallible)]`, the method returns `Result<T, Error>`
    Fallible,
}

impl Parse for ProvidesKind {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        if input.is_empty() {
            return Ok(ProvidesKind::Infallible);
        }
        let ident: Ident = input.parse()?;
        if ident == "fallible" && input.is_empty() {
            Ok(ProvidesKind::Fallible)
        } else {
            Err(syn::Error::new(ident.span(), "expected `fallible`"))
        }
    }
}

impl ProvidesKind {
    /// Reads the options of a `#[provides]` attribute
    pub(crate) fn from_attr(attr: &Attribute) -> Result<Self> {
        match &attr.meta {
            Meta::Path(_) => Ok(ProvidesKind::Infallible),
            Meta::List(list) => list.parse_args(),
            Meta::NameValue(meta) => Err(syn::Error::new_spanned(meta, "expected `#[provides]` or `#[provides(fallible)]`")),
        }
    }
}

/// A method registered as a provider
pub(crate) struct ProviderFn {
    pub(crate) ident: Ident,
    pub(crate) receiver: bool,
    pub(crate) params: Vec<(Ident, Type)>,
    pub(crate) kind: ProvidesKind,
}

impl ProviderFn {
    /// Validates the method signature and collects its parameters
    pub(crate) fn from_method(method: &ImplItemFn, kind: ProvidesKind) -> Result<Self> {
        let sig = &method.sig;
        let ident = sig.ident.clone();

        if let Some(asyncness) = &sig.asyncness {
            return Err(syn::Error::new_spanned(asyncness, "async providers are not supported"));
        }
        if !sig.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(&sig.generics, "providers cannot be generic"));
        }
        if let ReturnType::Default = sig.output {
            return Err(syn::Error::new_spanned(
                &sig.ident,
                format!("provider `{}` must be annotated with a return type", ident.unraw()),
            ));
        }

        let mut receiver = false;
        let mut params = Vec::with_capacity(sig.inputs.len());
        for input in &sig.inputs {
            match input {
                FnArg::Receiver(recv) => {
                    if recv.reference.is_none() || recv.mutability.is_some() || recv.colon_token.is_some() {
                        return Err(syn::Error::new_spanned(recv, "provider receiver must be `&self`"));
                    }
                    receiver = true;
                }
                FnArg::Typed(pat_type) => {
                    let Pat::Ident(pat) = pat_type.pat.as_ref() else {
                        return Err(syn::Error::new_spanned(&pat_type.pat, "provider parameters must be plain identifiers"));
                    };
                    if pat.by_ref.is_some() || pat.subpat.is_some() {
                        return Err(syn::Error::new_spanned(pat, "provider parameters must be plain identifiers"));
                    }
                    if let Type::ImplTrait(ty) = pat_type.ty.as_ref() {
                        return Err(syn::Error::new_spanned(
                            ty,
                            format!("parameter `{}` must be annotated with a concrete type", pat.ident.unraw()),
                        ));
                    }
                    params.push((pat.ident.clone(), pat_type.ty.as_ref().clone()));
                }
            }
        }

        if params.len() > MAX_PARAMETERS {
            return Err(syn::Error::new_spanned(
                &sig.inputs,
                format!("providers take at most {MAX_PARAMETERS} parameters"),
            ));
        }

        Ok(Self { ident, receiver, params, kind })
    }

    /// Name the provider is registered under
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Names the parameters are bound to
    pub(crate) fn param_names(&self) -> Vec<String> {
        self.params
            .iter()
            .map(|(ident, _)| ident.unraw().to_string())
            .collect()
    }
}
