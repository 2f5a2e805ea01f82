use serde::{Deserialize, Serialize};

/// Par de coordenadas tal como lo guarda un parceiro: [longitud, latitud]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Conversión al literal {lat, lng} que espera Google Maps
    pub fn to_lat_lng(self) -> LatLng {
        LatLng {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}

/// Literal de posición del SDK de mapas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
