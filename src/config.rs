use serde::{Deserialize, Serialize};

use crate::models::LatLng;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub google_maps_api_key: Option<String>,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            google_maps_api_key: None,
            map_config: MapConfig::default(),
        }
    }
}

/// Configuración del mapa de parceiros
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub container_id: String,
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    /// Zoom al pulsar "Ver no mapa"
    pub focus_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "map-container".to_string(),
            default_center_lat: -23.5505, // São Paulo
            default_center_lng: -46.6333,
            default_zoom: 12.0,
            focus_zoom: 15.0,
        }
    }
}

impl MapConfig {
    pub fn center(&self) -> LatLng {
        LatLng {
            lat: self.default_center_lat,
            lng: self.default_center_lng,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = MapConfig::default();
        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            google_maps_api_key: normalize_key(option_env!("GOOGLE_MAPS_API_KEY")),
            map_config: MapConfig {
                container_id: defaults.container_id,
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .and_then(|v| v.parse().ok()).unwrap_or(defaults.default_center_lat),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .and_then(|v| v.parse().ok()).unwrap_or(defaults.default_center_lng),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .and_then(|v| v.parse().ok()).unwrap_or(defaults.default_zoom),
                focus_zoom: option_env!("FOCUS_ZOOM")
                    .and_then(|v| v.parse().ok()).unwrap_or(defaults.focus_zoom),
            },
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }

    /// Clave de Google Maps (None si no está configurada o está vacía)
    pub fn maps_api_key(&self) -> Option<&str> {
        self.google_maps_api_key.as_deref()
    }
}

/// `GOOGLE_MAPS_API_KEY=` en .env llega como cadena vacía
fn normalize_key(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_treated_as_missing() {
        assert_eq!(normalize_key(None), None);
        assert_eq!(normalize_key(Some("")), None);
        assert_eq!(normalize_key(Some("   ")), None);
        assert_eq!(normalize_key(Some(" abc123 ")), Some("abc123".to_string()));
    }

    #[test]
    fn default_map_config_is_centered_on_sao_paulo() {
        let config = AppConfig::default();
        assert_eq!(config.map_config.center(), LatLng { lat: -23.5505, lng: -46.6333 });
        assert_eq!(config.map_config.default_zoom, 12.0);
        assert_eq!(config.map_config.focus_zoom, 15.0);
        assert_eq!(config.map_config.container_id, "map-container");
        assert!(config.maps_api_key().is_none());
    }

    #[test]
    fn log_level_follows_logging_flag() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
