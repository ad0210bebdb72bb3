//! Declared factory signatures
//!
//! A [`Signature`] is the metadata the registration step inspects: the factory's
//! name, its return type and its parameters. Typed registrations derive it from the
//! factory's own signature, hand-written registrations build it directly.

use crate::descriptor::TypeToken;
use std::borrow::Cow;

/// Name of the implicit receiver parameter, which is never resolved
pub(crate) const RECEIVER: &str = "self";

/// A declared factory parameter
#[derive(Debug, Clone)]
pub struct Parameter {
    name: Cow<'static, str>,
    ty: Option<TypeToken>,
}

impl Parameter {
    /// Creates a parameter of type `T`
    #[inline]
    pub fn typed<T: 'static>(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into(), ty: Some(TypeToken::of::<T>()) }
    }

    /// Creates a parameter without a declared type
    #[inline]
    pub fn untyped(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into(), ty: None }
    }

    /// Parameter name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type, if any
    #[inline]
    pub fn ty(&self) -> Option<TypeToken> {
        self.ty
    }

    #[inline]
    pub(crate) fn is_receiver(&self) -> bool {
        self.name == RECEIVER
    }

    #[inline]
    pub(crate) fn into_parts(self) -> (Cow<'static, str>, Option<TypeToken>) {
        (self.name, self.ty)
    }
}

/// Declared signature of a factory
///
/// # Example
/// ```
/// use gauntlet_di::signature::Signature;
///
/// struct Engine;
/// struct Car(Engine);
///
/// let signature = Signature::new("make_car")
///     .param::<Engine>("engine")
///     .returns::<Car>();
///
/// assert_eq!(signature.parameters().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Signature {
    factory: Cow<'static, str>,
    returns: Option<TypeToken>,
    parameters: Vec<Parameter>,
}

impl Signature {
    /// Starts a signature of the factory named `factory`, without parameters and return type
    #[inline]
    pub fn new(factory: impl Into<Cow<'static, str>>) -> Self {
        Self {
            factory: factory.into(),
            returns: None,
            parameters: Vec::new(),
        }
    }

    /// Declares the return type
    #[inline]
    pub fn returns<T: 'static>(mut self) -> Self {
        self.returns = Some(TypeToken::of::<T>());
        self
    }

    /// Declares the return type from a token
    #[inline]
    pub fn returns_token(mut self, token: TypeToken) -> Self {
        self.returns = Some(token);
        self
    }

    /// Appends a parameter of type `T`
    #[inline]
    pub fn param<T: 'static>(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.with_parameter(Parameter::typed::<T>(name))
    }

    /// Appends an already built parameter
    #[inline]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Appends several parameters
    #[inline]
    pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    /// Factory name
    #[inline]
    pub fn factory(&self) -> &str {
        &self.factory
    }

    /// Declared return type, if any
    #[inline]
    pub fn return_type(&self) -> Option<TypeToken> {
        self.returns
    }

    /// Declared parameters, receiver included
    #[inline]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    #[inline]
    pub(crate) fn into_parts(self) -> (Cow<'static, str>, Option<TypeToken>, Vec<Parameter>) {
        (self.factory, self.returns, self.parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Engine;

    #[test]
    fn it_builds_signature_in_declared_order() {
        let signature = Signature::new("make")
            .with_parameter(Parameter::untyped("self"))
            .param::<Engine>("engine")
            .param::<String>("label")
            .returns::<u8>();

        let names = signature.parameters()
            .iter()
            .map(Parameter::name)
            .collect::<Vec<_>>();

        assert_eq!(names, ["self", "engine", "label"]);
        assert_eq!(signature.return_type(), Some(TypeToken::of::<u8>()));
        assert!(signature.parameters()[0].is_receiver());
        assert!(signature.parameters()[0].ty().is_none());
    }

    #[test]
    fn it_starts_without_return_type() {
        let signature = Signature::new("make");

        assert_eq!(signature.factory(), "make");
        assert!(signature.return_type().is_none());
        assert!(signature.parameters().is_empty());
    }
}
