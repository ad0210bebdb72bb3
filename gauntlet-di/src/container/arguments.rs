//! Named arguments handed to a factory

use super::Error;
use crate::{descriptor::Instance, signature::Parameter};
use std::borrow::Cow;

/// Values resolved for a factory call, bound by parameter name
#[derive(Debug)]
pub struct Arguments {
    provider: &'static str,
    bindings: Vec<(Cow<'static, str>, Instance)>,
}

impl Arguments {
    /// Creates an empty set of arguments for the provider named `provider`
    #[inline]
    pub(crate) fn with_capacity(provider: &'static str, capacity: usize) -> Self {
        Self { provider, bindings: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub(crate) fn bind(&mut self, name: Cow<'static, str>, value: Instance) {
        self.bindings.push((name, value));
    }

    /// Moves the value bound to `name` out of the arguments
    ///
    /// Fails with [`Error::MissingArgument`] if nothing is bound under `name`
    /// (or it has already been taken) and with [`Error::ResolveFailed`]
    /// if the bound value is not a `T`.
    pub fn take<T: 'static>(&mut self, name: &str) -> Result<T, Error> {
        let index = self.bindings
            .iter()
            .position(|(bound, _)| &**bound == name)
            .ok_or_else(|| Error::MissingArgument {
                provider: self.provider,
                parameter: Cow::Owned(name.to_owned()),
            })?;
        let (_, value) = self.bindings.swap_remove(index);
        value
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| Error::ResolveFailed(std::any::type_name::<T>()))
    }

    /// Checks whether a value is bound under `name`
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.iter().any(|(bound, _)| &**bound == name)
    }

    /// Number of values not taken yet
    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if all values have been taken
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// A set of factory arguments that can be declared and extracted as a whole
///
/// Implemented for tuples of up to five values; `Names` carries exactly one
/// parameter name per tuple element.
pub trait FromArguments: Sized + Send + 'static {
    /// Parameter names, one per value
    type Names: AsRef<[&'static str]> + Copy + Send + Sync + 'static;

    /// Declares the parameters
    fn parameters(names: &Self::Names) -> Vec<Parameter>;

    /// Extracts `Self` from bound arguments
    fn from_arguments(args: &mut Arguments, names: &Self::Names) -> Result<Self, Error>;
}

impl FromArguments for () {
    type Names = [&'static str; 0];

    #[inline]
    fn parameters(_: &Self::Names) -> Vec<Parameter> {
        Vec::new()
    }

    #[inline]
    fn from_arguments(_: &mut Arguments, _: &Self::Names) -> Result<Self, Error> {
        Ok(())
    }
}

macro_rules! define_from_arguments {
    ($len:literal; $($T:ident => $idx:tt),+) => {
        impl<$($T: Send + 'static),+> FromArguments for ($($T,)+) {
            type Names = [&'static str; $len];

            #[inline]
            fn parameters(names: &Self::Names) -> Vec<Parameter> {
                vec![$(Parameter::typed::<$T>(names[$idx])),+]
            }

            #[inline]
            fn from_arguments(args: &mut Arguments, names: &Self::Names) -> Result<Self, Error> {
                Ok(($(args.take::<$T>(names[$idx])?,)+))
            }
        }
    }
}

define_from_arguments! { 1; T1 => 0 }
define_from_arguments! { 2; T1 => 0, T2 => 1 }
define_from_arguments! { 3; T1 => 0, T2 => 1, T3 => 2 }
define_from_arguments! { 4; T1 => 0, T2 => 1, T3 => 2, T4 => 3 }
define_from_arguments! { 5; T1 => 0, T2 => 1, T3 => 2, T4 => 3, T5 => 4 }
