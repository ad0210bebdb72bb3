//! Generic factory for building types

use super::{Arguments, Error, FromArguments};
use crate::descriptor::{FactoryFn, Instance};

/// A trait that describes a generic factory function
/// whose arguments are resolved from the DI container
pub trait GenericFactory<Args>: Send + Sync + 'static {
    /// A type of object that will be built
    type Output;

    /// Calls a generic function with already resolved arguments
    fn call(&self, args: Args) -> Self::Output;
}

impl<F, R> GenericFactory<()> for F
where
    F: Fn() -> R + Send + Sync + 'static
{
    type Output = R;

    #[inline]
    fn call(&self, _: ()) -> Self::Output {
        self()
    }
}

macro_rules! define_generic_factory ({ $($param:ident)* } => {
    impl<F, R, $($param,)*> GenericFactory<($($param,)*)> for F
    where
        F: Fn($($param),*) -> R + Send + Sync + 'static,
    {
        type Output = R;

        #[inline]
        #[allow(non_snake_case)]
        fn call(&self, ($($param,)*): ($($param,)*)) -> Self::Output {
            (self)($($param,)*)
        }
    }
});

define_generic_factory! { T1 }
define_generic_factory! { T1 T2 }
define_generic_factory! { T1 T2 T3 }
define_generic_factory! { T1 T2 T3 T4 }
define_generic_factory! { T1 T2 T3 T4 T5 }

/// Erases an infallible factory
#[inline]
pub(crate) fn make_factory_fn<T, F, Args>(names: Args::Names, factory: F) -> FactoryFn
where
    T: Send + 'static,
    F: GenericFactory<Args, Output = T>,
    Args: FromArguments
{
    Box::new(move |args: &mut Arguments| -> Result<Instance, Error> {
        let args = Args::from_arguments(args, &names)?;
        Ok(Box::new(factory.call(args)) as Instance)
    })
}

/// Erases a factory that returns [`Result`]
#[inline]
pub(crate) fn make_try_factory_fn<T, F, Args>(names: Args::Names, factory: F) -> FactoryFn
where
    T: Send + 'static,
    F: GenericFactory<Args, Output = Result<T, Error>>,
    Args: FromArguments
{
    Box::new(move |args: &mut Arguments| -> Result<Instance, Error> {
        let args = Args::from_arguments(args, &names)?;
        factory.call(args).map(|value| Box::new(value) as Instance)
    })
}
