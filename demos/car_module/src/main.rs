//! Builds the car module and resolves a [`CarDao`] from it

use gauntlet_di::{ContainerBuilder, error::Error, module};
use tracing::info;
use tracing_subscriber::{EnvFilter, prelude::*};

use crate::dao::{CarDao, EngineDao};

mod dao;

/// Provides the data access objects
struct CarModule;

#[module]
impl CarModule {
    #[provides]
    fn get_engine_dao(&self) -> EngineDao {
        EngineDao
    }

    #[provides]
    fn get_car_dao(&self, engine_dao: EngineDao) -> CarDao {
        CarDao::new(engine_dao)
    }
}

fn main() -> Result<(), Error> {
    // Configuring tracing output to the stdout, `RUST_LOG` overrides the level
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut builder = ContainerBuilder::new();
    builder.register_module(CarModule)?;

    let container = builder.build();
    container.validate()?;

    for provider in container.providers() {
        info!(
            provider = provider.name(),
            factory = provider.factory_name(),
            dependencies = provider.dependencies().len(),
            "registered"
        );
    }

    let car_dao = container.get::<CarDao>()?;
    println!("{car_dao:?}");

    Ok(())
}
