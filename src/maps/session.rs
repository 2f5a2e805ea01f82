// Sesión de mapa: mapa vivo, marcadores por parceiro y el info window abierto

use std::collections::HashMap;

use super::traits::MapsSdk;

/// Marcador colocado con su info window y su listener de click
pub struct PlacedMarker<S: MapsSdk> {
    pub marker: S::Marker,
    pub info_window: S::InfoWindow,
    pub listener: Option<S::Listener>,
}

/// Recursos del SDK propiedad exclusiva de la vista que los creó
///
/// Invariante: como mucho un info window abierto.
pub struct MapSession<S: MapsSdk> {
    map: S::Map,
    markers: HashMap<String, PlacedMarker<S>>,
    open_info: Option<String>,
    active: Option<String>,
}

impl<S: MapsSdk> MapSession<S> {
    pub fn new(map: S::Map) -> Self {
        Self {
            map,
            markers: HashMap::new(),
            open_info: None,
            active: None,
        }
    }

    pub fn map(&self) -> &S::Map {
        &self.map
    }

    pub fn insert(&mut self, partner_id: String, placed: PlacedMarker<S>) {
        self.markers.insert(partner_id, placed);
    }

    pub fn has_marker(&self, partner_id: &str) -> bool {
        self.markers.contains_key(partner_id)
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Parceiro cuyo info window está abierto
    pub fn open_info(&self) -> Option<&str> {
        self.open_info.as_deref()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Abrir el info window de un parceiro cerrando antes el anterior
    pub fn open_info_for(&mut self, sdk: &S, partner_id: &str) -> bool {
        let Some(placed) = self.markers.get(partner_id) else {
            log::warn!("⚠️ No hay marcador para el parceiro {}", partner_id);
            return false;
        };

        if let Some(previous) = self.open_info.take() {
            if let Some(prev) = self.markers.get(&previous) {
                sdk.close_info_window(&prev.info_window);
            }
        }

        sdk.open_info_window(&placed.info_window, &self.map, &placed.marker);
        self.open_info = Some(partner_id.to_string());
        self.active = Some(partner_id.to_string());
        true
    }

    pub fn close_info(&mut self, sdk: &S) {
        if let Some(current) = self.open_info.take() {
            if let Some(placed) = self.markers.get(&current) {
                sdk.close_info_window(&placed.info_window);
            }
        }
    }

    /// Liberar listeners, marcadores e info window
    pub fn teardown(mut self, sdk: &S) {
        self.close_info(sdk);
        let count = self.markers.len();
        for (_, placed) in self.markers.drain() {
            if let Some(listener) = placed.listener {
                sdk.remove_listener(listener);
            }
            sdk.remove_marker(&placed.marker);
        }
        self.active = None;
        log::info!("🧹 Sesión de mapa liberada ({} marcadores)", count);
    }
}
