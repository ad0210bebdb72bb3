//! Dependency Injection container and tools

use crate::{
    descriptor::{Dependency, FactoryFn, Instance, Provider, TypeToken},
    error::Error,
    module::Module,
    signature::Signature
};
use std::{
    any::TypeId,
    collections::{HashMap, HashSet},
    hash::{BuildHasherDefault, Hasher},
    sync::Arc
};

pub use self::{
    arguments::{Arguments, FromArguments},
    factory::GenericFactory,
};

use self::factory::{make_factory_fn, make_try_factory_fn};

pub mod arguments;
pub mod factory;

/// Inner HashMap of providers
type ProviderMap = HashMap<
    TypeId,
    Provider,
    BuildHasherDefault<TypeIdHasher>
>;

#[derive(Default)]
struct TypeIdHasher(u64);

impl Hasher for TypeIdHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    #[cold]
    fn write(&mut self, _: &[u8]) {
        unreachable!("TypeId calls write_u64");
    }

    #[inline]
    fn write_u64(&mut self, id: u64) {
        self.0 = id;
    }
}

/// Describes what happens when a provider is registered for an already registered type
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The latest registration silently replaces the earlier one
    #[default]
    Replace,
    /// The registration fails with [`Error::DuplicateProvider`]
    Reject,
}

/// Represents a DI container builder,
/// that is able to register providers before the container is built.
#[derive(Debug, Default)]
pub struct ContainerBuilder {
    /// Configurable HashMap of providers
    providers: ProviderMap,

    /// Collision policy
    ///
    /// Default: [`DuplicatePolicy::Replace`]
    duplicates: DuplicatePolicy,
}

impl ContainerBuilder {
    /// Creates a new DI container builder
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures how a second registration for the same type is handled
    ///
    /// Default: [`DuplicatePolicy::Replace`]
    #[inline]
    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Build a DI container
    #[inline]
    pub fn build(self) -> Container {
        Container {
            providers: Arc::new(self.providers),
        }
    }

    /// Registers a factory described by a declared [`Signature`]
    ///
    /// The signature must declare a return type and a type for every parameter
    /// except the receiver (a parameter named `self`, which is ignored).
    /// The factory receives the resolved dependencies bound by parameter name.
    ///
    /// # Example
    /// ```
    /// use gauntlet_di::{ContainerBuilder, Instance, signature::Signature};
    ///
    /// struct Engine;
    /// struct Car(Engine);
    ///
    /// let mut builder = ContainerBuilder::new();
    /// builder.register(Signature::new("make_engine").returns::<Engine>(), |_| {
    ///     Ok(Box::new(Engine) as Instance)
    /// })?;
    /// builder.register(Signature::new("make_car").param::<Engine>("engine").returns::<Car>(), |args| {
    ///     Ok(Box::new(Car(args.take("engine")?)) as Instance)
    /// })?;
    ///
    /// let car: Car = builder.build().get()?;
    /// # Ok::<(), gauntlet_di::error::Error>(())
    /// ```
    pub fn register<F>(&mut self, signature: Signature, factory: F) -> Result<&mut Self, Error>
    where
        F: Fn(&mut Arguments) -> Result<Instance, Error> + Send + Sync + 'static
    {
        self.insert(signature, Box::new(factory))
    }

    /// Registers a function or closure whose parameter and return types
    /// declare the provided type and its dependencies
    ///
    /// `names` holds one parameter name per factory argument.
    pub fn register_fn<T, F, Args>(
        &mut self,
        factory_name: &'static str,
        names: Args::Names,
        factory: F
    ) -> Result<&mut Self, Error>
    where
        T: Send + 'static,
        F: GenericFactory<Args, Output = T>,
        Args: FromArguments
    {
        let signature = Self::signature_of::<T, Args>(factory_name, &names);
        self.insert(signature, make_factory_fn::<T, F, Args>(names, factory))
    }

    /// Registers a fallible function or closure, see [`ContainerBuilder::register_fn`]
    ///
    /// An error returned by the factory aborts the resolution it takes part in.
    pub fn register_try_fn<T, F, Args>(
        &mut self,
        factory_name: &'static str,
        names: Args::Names,
        factory: F
    ) -> Result<&mut Self, Error>
    where
        T: Send + 'static,
        F: GenericFactory<Args, Output = Result<T, Error>>,
        Args: FromArguments
    {
        let signature = Self::signature_of::<T, Args>(factory_name, &names);
        self.insert(signature, make_try_factory_fn::<T, F, Args>(names, factory))
    }

    /// Registers every provider of a [`Module`]
    pub fn register_module<M: Module>(&mut self, module: M) -> Result<&mut Self, Error> {
        Arc::new(module).configure(self)?;
        Ok(self)
    }

    #[inline]
    fn signature_of<T: 'static, Args: FromArguments>(factory_name: &'static str, names: &Args::Names) -> Signature {
        Signature::new(factory_name)
            .with_parameters(Args::parameters(names))
            .returns::<T>()
    }

    fn insert(&mut self, signature: Signature, factory: FactoryFn) -> Result<&mut Self, Error> {
        let (factory_name, returns, parameters) = signature.into_parts();
        let produced = returns.ok_or_else(|| Error::MissingReturnType(factory_name.clone()))?;

        let dependencies = parameters
            .into_iter()
            .filter(|parameter| !parameter.is_receiver())
            .map(|parameter| match parameter.into_parts() {
                (name, Some(ty)) => Ok(Dependency::new(ty, name)),
                (name, None) => Err(Error::MissingParameterType {
                    provider: factory_name.clone(),
                    parameter: name,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if self.providers.contains_key(&produced.id()) {
            match self.duplicates {
                DuplicatePolicy::Reject => return Err(Error::DuplicateProvider(produced.type_name())),
                DuplicatePolicy::Replace => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        provider = produced.name(),
                        factory = %factory_name,
                        "replacing previously registered provider"
                    );
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            provider = produced.name(),
            factory = %factory_name,
            dependencies = dependencies.len(),
            "provider registered"
        );

        let provider = Provider::new(produced, factory_name, factory, dependencies);
        self.providers.insert(produced.id(), provider);
        Ok(self)
    }
}

/// Represents a DI container, that resolves registered types together with their dependencies
///
/// The container is read-only; every resolution builds a fresh object graph.
#[derive(Debug, Clone)]
pub struct Container {
    /// Read-only HashMap of providers
    providers: Arc<ProviderMap>
}

impl Container {
    /// Creates a new [`ContainerBuilder`]
    #[inline]
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    /// Builds an instance of `T`, resolving its dependencies depth-first
    #[inline]
    pub fn get<T: 'static>(&self) -> Result<T, Error> {
        let token = TypeToken::of::<T>();
        self.get_instance(token)?
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| Error::ResolveFailed(token.type_name()))
    }

    /// Builds a type-erased instance of the type behind `token`
    pub fn get_instance(&self, token: TypeToken) -> Result<Instance, Error> {
        let mut path = Vec::new();
        let result = self.resolve(token, &mut path);

        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::debug!(requested = token.name(), %err, "resolution failed");
        }

        result
    }

    /// Checks whether a provider for `T` is registered
    #[inline]
    pub fn contains<T: 'static>(&self) -> bool {
        self.providers.contains_key(&TypeId::of::<T>())
    }

    /// Returns the provider registered for `T`
    #[inline]
    pub fn provider<T: 'static>(&self) -> Option<&Provider> {
        self.providers.get(&TypeId::of::<T>())
    }

    /// Iterates over all registered providers in no particular order
    #[inline]
    pub fn providers(&self) -> impl Iterator<Item = &Provider> {
        self.providers.values()
    }

    /// Number of registered providers
    #[inline]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` if no provider is registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Walks the dependency graph of every provider without invoking any factory
    ///
    /// Reports the first missing provider or dependency cycle found.
    /// Providers are visited in the order of their type names.
    pub fn validate(&self) -> Result<(), Error> {
        let mut roots = self.providers
            .values()
            .map(Provider::produced)
            .collect::<Vec<_>>();
        roots.sort_by_key(TypeToken::type_name);

        let mut visited = HashSet::with_capacity(roots.len());
        let mut path = Vec::new();
        for token in roots {
            self.visit(token, &mut visited, &mut path)?;
        }
        Ok(())
    }

    fn visit(
        &self,
        token: TypeToken,
        visited: &mut HashSet<TypeToken>,
        path: &mut Vec<TypeToken>
    ) -> Result<(), Error> {
        if visited.contains(&token) {
            return Ok(());
        }
        if let Some(start) = path.iter().position(|t| *t == token) {
            return Err(circular_dependency(&path[start..], token));
        }
        let provider = self.lookup(token)?;

        path.push(token);
        for dependency in provider.dependencies() {
            self.visit(dependency.ty(), visited, path)?;
        }
        path.pop();

        visited.insert(token);
        Ok(())
    }

    /// `path` holds the types whose dependencies are being resolved
    fn resolve(&self, token: TypeToken, path: &mut Vec<TypeToken>) -> Result<Instance, Error> {
        let provider = self.lookup(token)?;
        if let Some(start) = path.iter().position(|t| *t == token) {
            return Err(circular_dependency(&path[start..], token));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(provider = provider.name(), depth = path.len(), "resolving");

        path.push(token);
        let args = self.resolve_arguments(provider, path);
        path.pop();

        provider.invoke(args?)
    }

    fn resolve_arguments(&self, provider: &Provider, path: &mut Vec<TypeToken>) -> Result<Arguments, Error> {
        let dependencies = provider.dependencies();
        let mut args = Arguments::with_capacity(provider.name(), dependencies.len());
        for dependency in dependencies {
            let value = self.resolve(dependency.ty(), path)?;
            args.bind(dependency.parameter_key(), value);
        }
        Ok(args)
    }

    #[inline]
    fn lookup(&self, token: TypeToken) -> Result<&Provider, Error> {
        self.providers
            .get(&token.id())
            .ok_or(Error::NoProviderFound(token.type_name()))
    }
}

#[inline]
fn circular_dependency(path: &[TypeToken], repeated: TypeToken) -> Error {
    let cycle = path
        .iter()
        .chain(std::iter::once(&repeated))
        .map(TypeToken::name)
        .collect();
    Error::CircularDependency(cycle)
}
