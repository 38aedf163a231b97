use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{TipoSensor, ZonaSensor};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuntoGrafica {
    #[serde(with = "time::serde::rfc3339")]
    pub fecha: OffsetDateTime,
    pub valor: f64,
}

/// Readings grouped by sensor type, then zone, in arrival order.
pub type RegistrosClasificados = BTreeMap<TipoSensor, BTreeMap<ZonaSensor, Vec<PuntoGrafica>>>;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesTemperatura {
    #[serde(rename = "AMBIENTE")]
    pub ambiente: Vec<PuntoGrafica>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesHumedad {
    #[serde(rename = "AMBIENTE")]
    pub ambiente: Vec<PuntoGrafica>,
    #[serde(rename = "MACETA")]
    pub maceta: Vec<PuntoGrafica>,
}

/// Series plotted for a plant: air temperature, air humidity and soil humidity.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraficaRegistros {
    #[serde(rename = "TEMPERATURA")]
    pub temperatura: SeriesTemperatura,
    #[serde(rename = "HUMEDAD")]
    pub humedad: SeriesHumedad,
}

impl From<RegistrosClasificados> for GraficaRegistros {
    fn from(mut clasificados: RegistrosClasificados) -> Self {
        let mut take = |tipo: TipoSensor, zona: ZonaSensor| {
            clasificados
                .get_mut(&tipo)
                .and_then(|zonas| zonas.remove(&zona))
                .unwrap_or_default()
        };

        Self {
            temperatura: SeriesTemperatura {
                ambiente: take(TipoSensor::Temperatura, ZonaSensor::Ambiente),
            },
            humedad: SeriesHumedad {
                ambiente: take(TipoSensor::Humedad, ZonaSensor::Ambiente),
                maceta: take(TipoSensor::Humedad, ZonaSensor::Maceta),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn punto(valor: f64) -> PuntoGrafica {
        PuntoGrafica {
            fecha: datetime!(2024-05-01 10:00:00 UTC),
            valor,
        }
    }

    #[test]
    fn test_missing_series_are_empty() {
        let mut clasificados = RegistrosClasificados::new();
        clasificados
            .entry(TipoSensor::Humedad)
            .or_default()
            .insert(ZonaSensor::Maceta, vec![punto(40.0), punto(41.0)]);

        let grafica = GraficaRegistros::from(clasificados);

        assert!(grafica.temperatura.ambiente.is_empty());
        assert!(grafica.humedad.ambiente.is_empty());
        assert_eq!(grafica.humedad.maceta.len(), 2);
    }

    #[test]
    fn test_serialized_shape() {
        let grafica = GraficaRegistros {
            temperatura: SeriesTemperatura {
                ambiente: vec![punto(21.5)],
            },
            humedad: SeriesHumedad::default(),
        };

        let value = serde_json::to_value(&grafica).unwrap();

        assert_eq!(value["TEMPERATURA"]["AMBIENTE"][0]["valor"], 21.5);
        assert_eq!(
            value["TEMPERATURA"]["AMBIENTE"][0]["fecha"],
            "2024-05-01T10:00:00Z"
        );
        assert!(value["HUMEDAD"]["AMBIENTE"].as_array().unwrap().is_empty());
        assert!(value["HUMEDAD"]["MACETA"].as_array().unwrap().is_empty());
    }
}
