use std::str::FromStr;

use macetero_api::fecha;
use macetero_api::models::{ClaveSensor, ModeloSensor, TipoMedida, TipoSensor, ZonaSensor};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::errors::QueryError;

fn parse<T: FromStr>(value: &str, error: fn(String) -> QueryError) -> Result<T, QueryError> {
    value.parse().map_err(|_| error(value.to_string()))
}

pub fn tipo_sensor(value: &str) -> Result<TipoSensor, QueryError> {
    parse(value, QueryError::TipoSensorNoExiste)
}

pub fn zona_sensor(value: &str) -> Result<ZonaSensor, QueryError> {
    parse(value, QueryError::ZonaSensorNoExiste)
}

pub fn tipo_medida(value: &str) -> Result<TipoMedida, QueryError> {
    parse(value, QueryError::TipoMedidaNoExiste)
}

pub fn modelo_sensor(value: &str) -> Result<ModeloSensor, QueryError> {
    parse(value, QueryError::ModeloSensorNoExiste)
}

pub fn clave_sensor(tipo: &str, zona: &str, numero: i32) -> Result<ClaveSensor, QueryError> {
    Ok(ClaveSensor::new(tipo_sensor(tipo)?, zona_sensor(zona)?, numero))
}

/// Parse an inclusive date range; a missing end means now.
pub fn rango_fechas(
    inicio: &str,
    fin: Option<&str>,
) -> Result<(OffsetDateTime, OffsetDateTime), QueryError> {
    let fecha_inicio =
        fecha::parse(inicio).ok_or_else(|| QueryError::FechaInicioInvalida(inicio.to_string()))?;

    let (fecha_fin, fin) = match fin {
        Some(fin) => (
            fecha::parse(fin).ok_or_else(|| QueryError::FechaFinInvalida(fin.to_string()))?,
            fin.to_string(),
        ),
        None => {
            let ahora = OffsetDateTime::now_utc();
            let texto = ahora.format(&Rfc3339).unwrap_or_else(|_| ahora.to_string());
            (ahora, texto)
        }
    };

    if fecha_inicio > fecha_fin {
        return Err(QueryError::RangoFechasInvalido {
            inicio: inicio.to_string(),
            fin,
        });
    }

    Ok((fecha_inicio, fecha_fin))
}
