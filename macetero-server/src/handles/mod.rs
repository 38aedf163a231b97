mod consejo_planta_handle;
mod docs_handle;
mod extract;
mod params;
mod planta_handle;
mod registro_sensor_handle;
mod sensor_handle;

pub use consejo_planta_handle::*;
pub use docs_handle::*;
pub use planta_handle::*;
pub use registro_sensor_handle::*;
pub use sensor_handle::*;
