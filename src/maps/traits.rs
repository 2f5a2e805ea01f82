use crate::models::LatLng;
use super::MapError;

/// Operaciones del SDK de mapas que usa la página
///
/// Toda llamada con el SDK ausente devuelve `None` o no hace nada; el código
/// que consume el trait nunca trata un error.
pub trait MapsSdk {
    type Map: Clone;
    type Marker: Clone;
    /// Con el SDK ausente es un stand-in inerte
    type InfoWindow;
    /// Listener registrado; se libera con `remove_listener`
    type Listener;

    /// El objeto global del SDK existe
    fn is_loaded(&self) -> bool;

    /// Crear el mapa con el tema oscuro sobre el elemento `element_id`
    fn init_map(&self, element_id: &str, center: LatLng, zoom: f64) -> Option<Self::Map>;

    /// Marcador circular con animación de caída
    fn add_marker(&self, map: &Self::Map, position: LatLng, title: &str, color: &str) -> Option<Self::Marker>;

    fn remove_marker(&self, marker: &Self::Marker);

    fn on_marker_click(&self, marker: &Self::Marker, handler: Box<dyn FnMut()>) -> Option<Self::Listener>;

    fn remove_listener(&self, listener: Self::Listener);

    fn create_info_window(&self, html: &str) -> Self::InfoWindow;

    fn open_info_window(&self, window: &Self::InfoWindow, map: &Self::Map, marker: &Self::Marker);

    fn close_info_window(&self, window: &Self::InfoWindow);

    fn set_info_content(&self, window: &Self::InfoWindow, html: &str);

    fn pan_to(&self, map: &Self::Map, position: LatLng, zoom: f64);
}

/// Documento/ventana donde se inyecta el script del SDK
pub trait ScriptHost {
    type Script: Clone;

    /// `window.google.maps` existe
    fn sdk_present(&self) -> bool;

    /// Añadir un `<script src>`; `on_error` se llama si falla la descarga
    fn inject_script(&self, src: &str, on_error: Box<dyn FnMut()>) -> Result<Self::Script, MapError>;

    /// Quitar el elemento si sigue en el documento
    fn remove_script(&self, script: &Self::Script);

    /// Registrar `window[name]`, invocado por el SDK al terminar de cargar
    fn install_callback(&self, name: &str, callback: Box<dyn FnMut()>) -> Result<(), MapError>;

    fn remove_callback(&self, name: &str);
}
