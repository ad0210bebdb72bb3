#![allow(missing_docs)]

use gauntlet_di::{ContainerBuilder, module};

#[derive(Debug, Default)]
struct EngineDao;

#[derive(Debug)]
struct CarDao {
    #[allow(dead_code)]
    engine: EngineDao,
}

struct CarModule;

#[module]
impl CarModule {
    #[provides]
    fn get_engine_dao(&self) -> EngineDao {
        EngineDao
    }

    #[provides]
    fn get_car_dao(&self, engine_dao: EngineDao) -> CarDao {
        CarDao { engine: engine_dao }
    }
}

fn main() {
    let mut builder = ContainerBuilder::new();
    builder.register_module(CarModule).unwrap();

    let _ = builder.build().get::<CarDao>();
}
