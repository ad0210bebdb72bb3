//! Describes dependency injection errors

use std::{
    borrow::Cow,
    fmt::{Display, Formatter}
};

/// Errors raised while registering providers or resolving types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A factory was registered without a declared return type
    MissingReturnType(Cow<'static, str>),
    /// A factory parameter was declared without a type
    MissingParameterType {
        /// Name of the offending factory
        provider: Cow<'static, str>,
        /// Name of the untyped parameter
        parameter: Cow<'static, str>,
    },
    /// No provider is registered for the requested type
    NoProviderFound(&'static str),
    /// The type transitively depends on itself.
    ///
    /// Holds the path from the first repeated type back to itself.
    CircularDependency(Vec<&'static str>),
    /// A provider for the type is already registered and duplicates are rejected
    DuplicateProvider(&'static str),
    /// A factory asked for an argument that has not been bound
    MissingArgument {
        /// Name of the factory
        provider: &'static str,
        /// Name of the requested parameter
        parameter: Cow<'static, str>,
    },
    /// A constructed value is not of the declared type
    ResolveFailed(&'static str),
    /// An error raised by a factory
    Other(Cow<'static, str>),
}

impl Error {
    /// Creates an error that a fallible factory can return
    #[inline]
    pub fn other(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Other(msg.into())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingReturnType(provider) => write!(f, "DI Error: provider '{provider}' must be annotated with a return type"),
            Error::MissingParameterType { provider, parameter } => write!(f, "DI Error: parameter '{parameter}' of provider '{provider}' must be annotated with a type"),
            Error::NoProviderFound(type_name) => write!(f, "DI Error: no provider exists for '{type_name}'"),
            Error::CircularDependency(cycle) => write!(f, "DI Error: circular dependency detected: {}", cycle.join(" -> ")),
            Error::DuplicateProvider(type_name) => write!(f, "DI Error: provider for '{type_name}' is already registered"),
            Error::MissingArgument { provider, parameter } => write!(f, "DI Error: argument '{parameter}' is not bound for provider '{provider}'"),
            Error::ResolveFailed(type_name) => write!(f, "DI Error: unable to resolve the value as '{type_name}'"),
            Error::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}
