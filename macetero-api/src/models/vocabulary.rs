use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Returned when a name does not match any variant of a vocabulary enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown variant {}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
        #[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $text)]
                #[cfg_attr(feature = "sqlx", sqlx(rename = $text))]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($text => Ok($name::$variant),)+
                    _ => Err(UnknownVariant(value.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Kind of magnitude a sensor reads.
    pub enum TipoSensor {
        Temperatura => "TEMPERATURA",
        Humedad => "HUMEDAD",
        Luminosidad => "LUMINOSIDAD",
    }
}

vocabulary! {
    /// Where a sensor is placed relative to the plant.
    pub enum ZonaSensor {
        /// Surrounding air
        Ambiente => "AMBIENTE",
        /// Inside the pot soil
        Maceta => "MACETA",
        Exterior => "EXTERIOR",
    }
}

vocabulary! {
    /// Magnitude an advisory rule applies to.
    pub enum TipoMedida {
        Temperatura => "TEMPERATURA",
        Humedad => "HUMEDAD",
        Luminosidad => "LUMINOSIDAD",
    }
}

vocabulary! {
    pub enum UnidadMedida {
        SinUnidad => "SIN_UNIDAD",
        GradosCentigrados => "GRADOS_CENTIGRADOS",
        Porcentaje => "PORCENTAJE",
        Lux => "LUX",
    }
}

vocabulary! {
    /// Hardware model of a sensor.
    pub enum ModeloSensor {
        /// Temperature and humidity, low precision
        Dht11 => "DHT11",
        /// Temperature and humidity
        Dht22 => "DHT22",
        /// Capacitive soil moisture
        Hw390 => "HW390",
        /// Ambient light
        Bh1750 => "BH1750",
    }
}

impl Default for UnidadMedida {
    fn default() -> Self {
        UnidadMedida::SinUnidad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_variant_name() {
        assert_eq!("HUMEDAD".parse::<TipoSensor>(), Ok(TipoSensor::Humedad));
        assert_eq!("MACETA".parse::<ZonaSensor>(), Ok(ZonaSensor::Maceta));
        assert_eq!("SIN_UNIDAD".parse::<UnidadMedida>(), Ok(UnidadMedida::SinUnidad));
        assert_eq!("DHT22".parse::<ModeloSensor>(), Ok(ModeloSensor::Dht22));
    }

    #[test]
    fn test_parse_rejects_unknown_and_lowercase() {
        assert_eq!(
            "humedad".parse::<TipoSensor>(),
            Err(UnknownVariant("humedad".to_string()))
        );
        assert!("SUELO".parse::<ZonaSensor>().is_err());
        assert!("".parse::<TipoMedida>().is_err());
    }

    #[test]
    fn test_display_matches_serde() {
        for unidad in UnidadMedida::ALL {
            let json = serde_json::to_string(unidad).unwrap();
            assert_eq!(json, format!("\"{unidad}\""));
        }
        assert_eq!(
            serde_json::from_str::<ModeloSensor>("\"HW390\"").unwrap(),
            ModeloSensor::Hw390
        );
    }
}
