// Integración con el SDK de Google Maps
//
// La lógica (carga del script, sesión de mapa, ciclo de vida) es genérica
// sobre los traits de `traits`; `web` es la implementación real en el navegador.

pub mod traits;
pub mod style;
pub mod loader;
pub mod session;
pub mod lifecycle;
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

pub use traits::{MapsSdk, ScriptHost};
pub use loader::ScriptLoader;
pub use session::MapSession;
pub use lifecycle::{LoadTicket, MapLifecycle, MapPhase, MapViewConfig};

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    MissingApiKey,
    NoDocument,
    Dom(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::MissingApiKey => write!(f, "Google Maps API key not configured"),
            MapError::NoDocument => write!(f, "No document available"),
            MapError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}
