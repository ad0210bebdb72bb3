//! Modules group related providers

use crate::{ContainerBuilder, error::Error};
use std::sync::Arc;

/// A set of providers registered together
///
/// The module itself is shared by its providers, so a provider may read
/// the module's own state.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use gauntlet_di::{ContainerBuilder, Module, error::Error};
///
/// struct Engine { cylinders: u8 }
///
/// struct EngineModule { cylinders: u8 }
///
/// impl Module for EngineModule {
///     fn configure(self: Arc<Self>, builder: &mut ContainerBuilder) -> Result<(), Error> {
///         builder.register_fn("get_engine", [], move || Engine { cylinders: self.cylinders })?;
///         Ok(())
///     }
/// }
///
/// let mut builder = ContainerBuilder::new();
/// builder.register_module(EngineModule { cylinders: 4 })?;
///
/// let engine: Engine = builder.build().get()?;
/// assert_eq!(engine.cylinders, 4);
/// # Ok::<(), Error>(())
/// ```
///
/// With the `macros` feature the implementation can be generated from an `impl` block:
/// ```ignore
/// use gauntlet_di::module;
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
/// ```
pub trait Module: Send + Sync + 'static {
    /// Registers the module's providers
    fn configure(self: Arc<Self>, builder: &mut ContainerBuilder) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Greeting(String);

    struct GreetingModule {
        name: &'static str,
    }

    impl GreetingModule {
        fn greeting(&self) -> Greeting {
            Greeting(format!("Hello, {}!", self.name))
        }
    }

    impl Module for GreetingModule {
        fn configure(self: Arc<Self>, builder: &mut ContainerBuilder) -> Result<(), Error> {
            builder.register_fn("greeting", [], move || self.greeting())?;
            Ok(())
        }
    }

    struct FailingModule;

    impl Module for FailingModule {
        fn configure(self: Arc<Self>, _: &mut ContainerBuilder) -> Result<(), Error> {
            Err(Error::other("module is misconfigured"))
        }
    }

    #[test]
    fn it_registers_module_providers() {
        let mut builder = ContainerBuilder::new();
        builder.register_module(GreetingModule { name: "Gauntlet" }).unwrap();

        let greeting = builder.build().get::<Greeting>().unwrap();

        assert_eq!(greeting, Greeting("Hello, Gauntlet!".into()));
    }

    #[test]
    fn it_propagates_module_error() {
        let mut builder = ContainerBuilder::new();

        let err = builder.register_module(FailingModule).unwrap_err();

        assert_eq!(err.to_string(), "module is misconfigured");
    }
}
