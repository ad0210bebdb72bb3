//! # Gauntlet DI
//!
//! A minimal dependency injection container. Factories are registered in a
//! [`ContainerBuilder`] together with the type they produce and the types they
//! need; the built [`Container`] resolves a requested type by recursively building
//! its dependencies first.
//!
//! ## Example
//! ```
//! use gauntlet_di::ContainerBuilder;
//!
//! #[derive(Debug, Default)]
//! struct Leaf;
//!
//! #[derive(Debug)]
//! struct Root { leaf: Leaf }
//!
//! let mut builder = ContainerBuilder::new();
//! builder
//!     .register_fn("make_leaf", [], Leaf::default)?
//!     .register_fn("make_root", ["leaf"], |leaf: Leaf| Root { leaf })?;
//!
//! let container = builder.build();
//! let root: Root = container.get()?;
//! # Ok::<(), gauntlet_di::error::Error>(())
//! ```

pub use crate::{
    container::{Arguments, Container, ContainerBuilder, DuplicatePolicy},
    descriptor::{Dependency, Instance, Provider, TypeToken},
    module::Module,
};

#[cfg(feature = "macros")]
pub use gauntlet_macros::module;

pub mod error;
pub mod container;
pub mod descriptor;
pub mod module;
pub mod signature;
