use std::collections::HashSet;

use crate::models::{
    ConsejoPlantaTable, PlantaTable, RegistroSensorTable, SensorPlantaTable, SensorTable, Table,
};

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("tables with unresolved dependencies: {}", .0.join(", "))]
    UnresolvedDependencies(Vec<&'static str>),
}

/// Table definitions of the database, emitted so that every table is created
/// after the tables it references and dropped before them.
pub struct SchemaManager {
    tables: Vec<Box<dyn Table>>,
}

impl SchemaManager {
    pub fn new(tables: Vec<Box<dyn Table>>) -> Self {
        Self { tables }
    }

    /// Resolve tables in rounds: a round takes every pending table whose
    /// references already exist, keeping declaration order within the round.
    fn creation_order(&self) -> Result<Vec<&dyn Table>, SchemaError> {
        let mut pending: Vec<&dyn Table> = self.tables.iter().map(|t| t.as_ref()).collect();
        let mut created: HashSet<&'static str> = HashSet::new();
        let mut order = Vec::with_capacity(pending.len());

        while !pending.is_empty() {
            let (ready, blocked): (Vec<&dyn Table>, Vec<&dyn Table>) =
                pending.into_iter().partition(|table| {
                    table
                        .dependencies()
                        .iter()
                        .all(|dependency| created.contains(dependency))
                });

            if ready.is_empty() {
                return Err(SchemaError::UnresolvedDependencies(
                    blocked.iter().map(|table| table.name()).collect(),
                ));
            }

            created.extend(ready.iter().map(|table| table.name()));
            order.extend(ready);
            pending = blocked;
        }

        Ok(order)
    }

    pub fn create_schema(&self) -> Result<Vec<String>, SchemaError> {
        Ok(self
            .creation_order()?
            .into_iter()
            .map(|table| table.create())
            .collect())
    }

    pub fn dispose_schema(&self) -> Result<Vec<String>, SchemaError> {
        Ok(self
            .creation_order()?
            .into_iter()
            .rev()
            .map(|table| table.dispose())
            .collect())
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        SchemaManager::new(vec![
            Box::new(RegistroSensorTable),
            Box::new(SensorPlantaTable),
            Box::new(ConsejoPlantaTable),
            Box::new(SensorTable),
            Box::new(PlantaTable),
        ])
    }
}
