#![allow(missing_docs)]

use std::sync::{Arc, Mutex};
use gauntlet_di::{
    Container, ContainerBuilder, DuplicatePolicy, Instance, TypeToken,
    error::Error,
    signature::{Parameter, Signature},
};

#[derive(Debug, Default, Clone, PartialEq)]
struct EngineDao {
    cylinders: u8,
}

#[derive(Debug, PartialEq)]
struct CarDao {
    engine: EngineDao,
}

#[derive(Debug, PartialEq)]
struct Garage {
    car: CarDao,
    spare: EngineDao,
}

fn garage_container() -> Container {
    let mut builder = ContainerBuilder::new();
    builder
        .register_fn("get_garage", ["car", "spare"], |car: CarDao, spare: EngineDao| Garage { car, spare }).unwrap()
        .register_fn("get_car_dao", ["engine_dao"], |engine: EngineDao| CarDao { engine }).unwrap()
        .register_fn("get_engine_dao", [], || EngineDao { cylinders: 6 }).unwrap();
    builder.build()
}

#[test]
fn it_resolves_car_with_engine() {
    let container = garage_container();

    let car = container.get::<CarDao>().unwrap();

    assert_eq!(car, CarDao { engine: EngineDao { cylinders: 6 } });
}

#[test]
fn it_resolves_shared_dependency_twice() {
    let container = garage_container();

    let garage = container.get::<Garage>().unwrap();

    assert_eq!(garage.car.engine, garage.spare);
}

#[test]
fn it_resolves_through_type_token() {
    let container = garage_container();

    let instance = container.get_instance(TypeToken::of::<EngineDao>()).unwrap();
    let engine = instance.downcast::<EngineDao>().unwrap();

    assert_eq!(engine.cylinders, 6);
}

#[test]
fn it_resolves_declared_table() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (engine_log, car_log) = (log.clone(), log.clone());

    let mut builder = ContainerBuilder::new();
    builder
        .register(
            Signature::new("get_car_dao")
                .with_parameter(Parameter::untyped("self"))
                .param::<EngineDao>("engine_dao")
                .returns::<CarDao>(),
            move |args| {
                car_log.lock().unwrap().push("car");
                Ok(Box::new(CarDao { engine: args.take("engine_dao")? }) as Instance)
            }
        ).unwrap()
        .register(
            Signature::new("get_engine_dao").returns::<EngineDao>(),
            move |_| {
                engine_log.lock().unwrap().push("engine");
                Ok(Box::new(EngineDao::default()) as Instance)
            }
        ).unwrap();

    let car = builder.build().get::<CarDao>().unwrap();

    assert_eq!(car.engine, EngineDao::default());
    assert_eq!(*log.lock().unwrap(), ["engine", "car"]);
}

#[test]
fn it_does_not_build_siblings_after_failure() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let spare_log = log.clone();

    let mut builder = ContainerBuilder::new();
    builder
        .register_fn("get_garage", ["car", "spare"], |car: CarDao, spare: EngineDao| Garage { car, spare }).unwrap()
        .register_fn("get_engine_dao", [], move || {
            spare_log.lock().unwrap().push("engine");
            EngineDao::default()
        }).unwrap();

    let err = builder.build().get::<Garage>().unwrap_err();

    assert_eq!(err, Error::NoProviderFound(std::any::type_name::<CarDao>()));
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn it_rejects_factory_returning_other_type() {
    let mut builder = ContainerBuilder::new();
    builder.register(Signature::new("get_engine_dao").returns::<EngineDao>(), |_| {
        Ok(Box::new(CarDao { engine: EngineDao::default() }) as Instance)
    }).unwrap();

    let err = builder.build().get::<EngineDao>().unwrap_err();

    assert_eq!(err, Error::ResolveFailed(std::any::type_name::<EngineDao>()));
}

#[test]
fn it_keeps_latest_registration_by_default() {
    let mut builder = ContainerBuilder::new();
    builder
        .register_fn("v4", [], || EngineDao { cylinders: 4 }).unwrap()
        .register_fn("v8", [], || EngineDao { cylinders: 8 }).unwrap();

    let engine = builder.build().get::<EngineDao>().unwrap();

    assert_eq!(engine.cylinders, 8);
}

#[test]
fn it_keeps_first_registration_when_rejecting() {
    let mut builder = ContainerBuilder::new().with_duplicates(DuplicatePolicy::Reject);
    builder.register_fn("v4", [], || EngineDao { cylinders: 4 }).unwrap();

    assert!(builder.register_fn("v8", [], || EngineDao { cylinders: 8 }).is_err());

    let engine = builder.build().get::<EngineDao>().unwrap();

    assert_eq!(engine.cylinders, 4);
}

#[test]
fn it_validates_complete_graph() {
    assert!(garage_container().validate().is_ok());
}

#[test]
fn it_formats_errors_for_users() {
    let container = ContainerBuilder::new().build();

    let err = container.get::<CarDao>().unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("DI Error: no provider exists for '{}'", std::any::type_name::<CarDao>())
    );
}
