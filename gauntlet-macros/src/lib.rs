//! Proc-Macros implementations for the Gauntlet dependency injection container
//!

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod module;

/// Implements the `Module` trait for the type of an inherent `impl` block
///
/// Every method tagged with `#[provides]` is registered as a provider of its
/// return type; its parameters are the provider's dependencies, bound by name.
/// Methods returning `Result<T, Error>` are tagged with `#[provides(fallible)]`.
/// Providers may take `&self` or no receiver at all.
///
/// # Example
/// ```ignore
/// use gauntlet_di::module;
///
/// struct CarModule;
///
/// #[module]
/// impl CarModule {
///     #[provides]
///     fn get_engine_dao(&self) -> EngineDao {
///         EngineDao::default()
///     }
///
///     #[provides]
///     fn get_car_dao(&self, engine_dao: EngineDao) -> CarDao {
///         CarDao::new(engine_dao)
///     }
/// }
///
/// // This expands to:
/// // impl Module for CarModule {
/// //     fn configure(self: Arc<Self>, builder: &mut ContainerBuilder) -> Result<(), Error> {
/// //         builder.register_fn("get_engine_dao", [], move || self.get_engine_dao())?;
/// //         builder.register_fn("get_car_dao", ["engine_dao"], move |engine_dao: EngineDao| self.get_car_dao(engine_dao))?;
/// //         Ok(())
/// //     }
/// // }
/// ```
/// # Errors
/// This macro will fail to compile if:
/// - It is placed on a trait impl or a generic impl block
/// - A provider has no return type
/// - A provider takes `self` by value or `&mut self`
/// - A provider parameter is a pattern or an `impl Trait`
/// - A provider is `async`, generic or takes more than five parameters
#[proc_macro_attribute]
pub fn module(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        let attr = proc_macro2::TokenStream::from(attr);
        return syn::Error::new_spanned(attr, "`#[module]` does not take arguments")
            .into_compile_error()
            .into();
    }
    let input = parse_macro_input!(item as syn::ItemImpl);
    module::expand_module(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
