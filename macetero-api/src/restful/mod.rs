mod consejo;
mod planta;
mod sensor;

pub use consejo::*;
pub use planta::*;
pub use sensor::*;
