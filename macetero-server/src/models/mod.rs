mod consejo_planta;
mod planta;
mod registro_sensor;
mod sensor;
mod sensor_planta;

pub use consejo_planta::{ConsejoPlanta, ConsejoPlantaTable};
pub use planta::{Planta, PlantaTable};
pub use registro_sensor::{RegistroSensor, RegistroSensorTable};
pub use sensor::{Sensor, SensorTable};
pub use sensor_planta::{SensorPlanta, SensorPlantaTable};

pub trait Table {
    /// The name of the table
    fn name(&self) -> &'static str;

    /// The SQL statement to create the table
    fn create(&self) -> String;

    /// The SQL statement to dispose the table
    fn dispose(&self) -> String;

    /// The dependencies of the table
    fn dependencies(&self) -> Vec<&'static str>;
}
