mod consejo_planta;
mod grafica;
mod planta;
mod registro_sensor;
mod sensor;
mod sensor_planta;
mod vocabulary;

pub use consejo_planta::*;
pub use grafica::*;
pub use planta::*;
pub use registro_sensor::*;
pub use sensor::*;
pub use sensor_planta::*;
pub use vocabulary::*;

pub type Id = i32;
