mod consejo_planta_service;
mod planta_service;
mod registro_sensor_service;
mod sensor_planta_service;
mod sensor_service;

pub use consejo_planta_service::*;
pub use planta_service::*;
pub use registro_sensor_service::*;
pub use sensor_planta_service::*;
pub use sensor_service::*;
