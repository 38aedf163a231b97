mod consejo_planta;
mod planta;
mod registro_sensor;
mod sensor;
mod sensor_planta;

pub use consejo_planta::{ConsejoPlantaRepository, FiltroConsejo};
pub use planta::PlantaRepository;
pub use registro_sensor::RegistroSensorRepository;
pub use sensor::{FiltroSensor, SensorRepository};
pub use sensor_planta::SensorPlantaRepository;

use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const FECHA_ORDENABLE: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:9]Z");

pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}

pub(crate) fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fixed-width UTC text of a reading timestamp. Stored and bound in this form,
/// timestamps compare and sort exactly as plain text, down to the nanosecond.
pub(crate) fn fecha_ordenable(fecha: OffsetDateTime) -> Result<String, sqlx::Error> {
    fecha
        .to_offset(UtcOffset::UTC)
        .format(FECHA_ORDENABLE)
        .map_err(|e| sqlx::Error::Encode(Box::new(e)))
}
