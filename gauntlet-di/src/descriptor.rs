//! Descriptors of registered providers and their dependencies

use crate::{container::Arguments, error::Error};
use std::{
    any::{Any, TypeId},
    borrow::Cow,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher}
};

/// A type-erased constructed value
pub type Instance = Box<dyn Any + Send>;

/// A type-erased factory that builds an [`Instance`] from bound arguments
pub(crate) type FactoryFn = Box<
    dyn Fn(&mut Arguments) -> Result<Instance, Error>
    + Send
    + Sync
>;

/// Identity of a registrable type together with its display names
#[derive(Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    type_name: &'static str,
    name: &'static str,
}

impl TypeToken {
    /// Creates a token for `T`
    #[inline]
    pub fn of<T: 'static>() -> Self {
        let type_name = std::any::type_name::<T>();
        Self {
            id: TypeId::of::<T>(),
            type_name,
            name: short_name(type_name),
        }
    }

    /// Returns the [`TypeId`] of the type
    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the fully qualified type name
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the type name without its module path
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeToken {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Debug for TypeToken {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}

impl Display for TypeToken {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Strips the module path of the outermost type, keeping generic arguments as is.
///
/// References, slices and tuples are returned unchanged.
fn short_name(type_name: &'static str) -> &'static str {
    if !type_name.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
        return type_name;
    }
    let head_end = type_name.find('<').unwrap_or(type_name.len());
    let start = type_name[..head_end].rfind("::").map_or(0, |i| i + 2);
    &type_name[start..]
}

/// Describes a single value a provider requires
#[derive(Debug, Clone)]
pub struct Dependency {
    ty: TypeToken,
    name: &'static str,
    parameter_name: Cow<'static, str>,
}

impl Dependency {
    /// Creates a dependency on the type behind `ty`, passed as `parameter_name`
    #[inline]
    pub fn new(ty: TypeToken, parameter_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            ty,
            name: ty.name(),
            parameter_name: parameter_name.into(),
        }
    }

    /// Type of the required value
    #[inline]
    pub fn ty(&self) -> TypeToken {
        self.ty
    }

    /// Display name of the required type
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name the resolved value is bound to when invoking the factory
    #[inline]
    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }

    #[inline]
    pub(crate) fn parameter_key(&self) -> Cow<'static, str> {
        self.parameter_name.clone()
    }
}

/// Describes how to build one type: the factory and the ordered list of its dependencies
pub struct Provider {
    name: &'static str,
    produced: TypeToken,
    factory_name: Cow<'static, str>,
    factory: FactoryFn,
    dependencies: Box<[Dependency]>,
}

impl Debug for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("name", &self.name)
            .field("factory", &self.factory_name)
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}

impl Provider {
    pub(crate) fn new(
        produced: TypeToken,
        factory_name: Cow<'static, str>,
        factory: FactoryFn,
        dependencies: Vec<Dependency>
    ) -> Self {
        Self {
            name: produced.name(),
            produced,
            factory_name,
            factory,
            dependencies: dependencies.into_boxed_slice(),
        }
    }

    /// Display name of the produced type
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type this provider builds
    #[inline]
    pub fn produced(&self) -> TypeToken {
        self.produced
    }

    /// Name of the registered factory
    #[inline]
    pub fn factory_name(&self) -> &str {
        &self.factory_name
    }

    /// Dependencies in the order the factory declares them
    #[inline]
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Calls the factory and checks the produced value against the declared type
    pub(crate) fn invoke(&self, mut args: Arguments) -> Result<Instance, Error> {
        let instance = (self.factory)(&mut args)?;
        let value: &dyn Any = &*instance;
        if value.type_id() != self.produced.id() {
            return Err(Error::ResolveFailed(self.produced.type_name()));
        }
        Ok(instance)
    }
}
