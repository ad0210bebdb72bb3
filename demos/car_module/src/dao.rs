//! Placeholder data access objects

/// Data access object for engine records
#[derive(Debug, Default, Clone)]
pub struct EngineDao;

/// Data access object for car records, backed by an [`EngineDao`]
#[derive(Debug, Clone)]
pub struct CarDao {
    /// Engine data access used by the car records
    pub engine: EngineDao,
}

impl CarDao {
    /// Creates a car DAO on top of an engine DAO
    pub fn new(engine: EngineDao) -> Self {
        Self { engine }
    }
}
