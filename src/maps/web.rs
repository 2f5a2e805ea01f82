// ============================================================================
// GOOGLE MAPS FFI - Implementación web de MapsSdk y ScriptHost
// ============================================================================
// Bindings a `google.maps.*` y al DOM. Toda llamada que puede lanzar usa
// `catch`; con el SDK ausente se devuelve None o un stand-in inerte.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlScriptElement};

use super::style::{
    StyleRule, DARK_THEME, INFO_WINDOW_MAX_WIDTH, MAP_TYPE_ROADMAP, MARKER_FILL_OPACITY,
    MARKER_SCALE, MARKER_STROKE_COLOR, MARKER_STROKE_WEIGHT,
};
use super::lifecycle::MapLifecycle;
use super::loader::ScriptLoader;
use super::traits::{MapsSdk, ScriptHost};
use super::MapError;
use crate::config::CONFIG;
use crate::models::LatLng;

pub type WebScriptLoader = ScriptLoader<DomScriptHost>;
pub type WebMapLifecycle = MapLifecycle<GoogleMapsSdk, DomScriptHost>;

/// Cargador de la página con la clave de la configuración
pub fn web_script_loader() -> WebScriptLoader {
    ScriptLoader::new(DomScriptHost::default(), CONFIG.maps_api_key().map(str::to_string))
}

// Valores de google.maps.Animation.DROP / SymbolPath.CIRCLE si no se pueden leer
const ANIMATION_DROP_FALLBACK: f64 = 2.0;
const SYMBOL_CIRCLE_FALLBACK: f64 = 0.0;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    #[derive(Clone, Debug)]
    pub type GoogleMap;

    #[wasm_bindgen(catch, constructor, js_namespace = ["google", "maps"], js_class = "Map")]
    fn new(element: &Element, options: &JsValue) -> Result<GoogleMap, JsValue>;

    #[wasm_bindgen(method, js_name = panTo)]
    fn pan_to(this: &GoogleMap, position: &JsValue);

    #[wasm_bindgen(method, js_name = setZoom)]
    fn set_zoom(this: &GoogleMap, zoom: f64);

    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Marker)]
    #[derive(Clone, Debug)]
    pub type GoogleMarker;

    #[wasm_bindgen(catch, constructor, js_namespace = ["google", "maps"], js_class = "Marker")]
    fn new(options: &JsValue) -> Result<GoogleMarker, JsValue>;

    #[wasm_bindgen(method, js_name = setMap)]
    fn set_map(this: &GoogleMarker, map: &JsValue);

    #[wasm_bindgen(method, js_name = addListener)]
    fn add_listener(this: &GoogleMarker, event: &str, handler: &js_sys::Function) -> MapsEventListener;

    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = InfoWindow)]
    #[derive(Clone, Debug)]
    pub type GoogleInfoWindow;

    #[wasm_bindgen(catch, constructor, js_namespace = ["google", "maps"], js_class = "InfoWindow")]
    fn new(options: &JsValue) -> Result<GoogleInfoWindow, JsValue>;

    #[wasm_bindgen(method)]
    fn open(this: &GoogleInfoWindow, map: &GoogleMap, anchor: &GoogleMarker);

    #[wasm_bindgen(method)]
    fn close(this: &GoogleInfoWindow);

    #[wasm_bindgen(method, js_name = setContent)]
    fn set_content(this: &GoogleInfoWindow, content: &str);

    #[derive(Debug)]
    pub type MapsEventListener;

    #[wasm_bindgen(method)]
    fn remove(this: &MapsEventListener);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions<'a> {
    center: LatLng,
    zoom: f64,
    map_type_id: &'a str,
    styles: &'a [StyleRule],
    #[serde(rename = "disableDefaultUI")]
    disable_default_ui: bool,
    zoom_control: bool,
    fullscreen_control: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MarkerIcon<'a> {
    path: f64,
    fill_color: &'a str,
    fill_opacity: f64,
    stroke_weight: f64,
    stroke_color: &'a str,
    scale: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MarkerOptions<'a> {
    position: LatLng,
    title: &'a str,
    animation: f64,
    icon: MarkerIcon<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InfoWindowOptions<'a> {
    content: &'a str,
    max_width: f64,
}

fn to_js<T: Serialize>(value: &T) -> Option<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| log::error!("❌ Error serializando opciones de Google Maps: {}", e))
        .ok()
}

fn reflect_path(root: &JsValue, path: &[&str]) -> Option<JsValue> {
    let mut current = root.clone();
    for key in path {
        current = js_sys::Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        if current.is_undefined() || current.is_null() {
            return None;
        }
    }
    Some(current)
}

/// `window.google.maps` existe
pub fn is_google_maps_loaded() -> bool {
    window()
        .and_then(|w| reflect_path(&w.into(), &["google", "maps"]))
        .is_some()
}

/// Constante numérica de `google.maps` (p.ej. Animation.DROP)
fn maps_constant(path: &[&str], fallback: f64) -> f64 {
    let mut full = vec!["google", "maps"];
    full.extend_from_slice(path);
    window()
        .and_then(|w| reflect_path(&w.into(), &full))
        .and_then(|v| v.as_f64())
        .unwrap_or(fallback)
}

/// Info window real o stand-in sin efectos
#[derive(Debug, Clone)]
pub enum WebInfoWindow {
    Live(GoogleInfoWindow),
    Inert,
}

/// Listener de click y el closure que mantiene vivo
pub struct WebListener {
    handle: MapsEventListener,
    _closure: Closure<dyn FnMut()>,
}

/// SDK de Google Maps del navegador
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleMapsSdk;

impl MapsSdk for GoogleMapsSdk {
    type Map = GoogleMap;
    type Marker = GoogleMarker;
    type InfoWindow = WebInfoWindow;
    type Listener = WebListener;

    fn is_loaded(&self) -> bool {
        is_google_maps_loaded()
    }

    fn init_map(&self, element_id: &str, center: LatLng, zoom: f64) -> Option<GoogleMap> {
        if !self.is_loaded() {
            log::warn!("⚠️ Google Maps no está cargado");
            return None;
        }
        let element = window()?.document()?.get_element_by_id(element_id)?;
        let options = to_js(&MapOptions {
            center,
            zoom,
            map_type_id: MAP_TYPE_ROADMAP,
            styles: DARK_THEME,
            disable_default_ui: true,
            zoom_control: true,
            fullscreen_control: true,
        })?;
        GoogleMap::new(&element, &options)
            .map_err(|e| log::error!("❌ Error creando google.maps.Map: {:?}", e))
            .ok()
    }

    fn add_marker(&self, map: &GoogleMap, position: LatLng, title: &str, color: &str) -> Option<GoogleMarker> {
        if !self.is_loaded() {
            return None;
        }
        let options = to_js(&MarkerOptions {
            position,
            title,
            animation: maps_constant(&["Animation", "DROP"], ANIMATION_DROP_FALLBACK),
            icon: MarkerIcon {
                path: maps_constant(&["SymbolPath", "CIRCLE"], SYMBOL_CIRCLE_FALLBACK),
                fill_color: color,
                fill_opacity: MARKER_FILL_OPACITY,
                stroke_weight: MARKER_STROKE_WEIGHT,
                stroke_color: MARKER_STROKE_COLOR,
                scale: MARKER_SCALE,
            },
        })?;
        js_sys::Reflect::set(&options, &JsValue::from_str("map"), map).ok()?;
        GoogleMarker::new(&options)
            .map_err(|e| log::error!("❌ Error creando marcador {}: {:?}", title, e))
            .ok()
    }

    fn remove_marker(&self, marker: &GoogleMarker) {
        marker.set_map(&JsValue::NULL);
    }

    fn on_marker_click(&self, marker: &GoogleMarker, handler: Box<dyn FnMut()>) -> Option<WebListener> {
        if !self.is_loaded() {
            return None;
        }
        let closure = Closure::wrap(handler);
        let handle = marker.add_listener("click", closure.as_ref().unchecked_ref());
        Some(WebListener {
            handle,
            _closure: closure,
        })
    }

    fn remove_listener(&self, listener: WebListener) {
        listener.handle.remove();
    }

    fn create_info_window(&self, html: &str) -> WebInfoWindow {
        if !self.is_loaded() {
            return WebInfoWindow::Inert;
        }
        let Some(options) = to_js(&InfoWindowOptions {
            content: html,
            max_width: INFO_WINDOW_MAX_WIDTH,
        }) else {
            return WebInfoWindow::Inert;
        };
        match GoogleInfoWindow::new(&options) {
            Ok(info_window) => WebInfoWindow::Live(info_window),
            Err(e) => {
                log::error!("❌ Error creando InfoWindow: {:?}", e);
                WebInfoWindow::Inert
            }
        }
    }

    fn open_info_window(&self, window: &WebInfoWindow, map: &GoogleMap, marker: &GoogleMarker) {
        if let WebInfoWindow::Live(info_window) = window {
            info_window.open(map, marker);
        }
    }

    fn close_info_window(&self, window: &WebInfoWindow) {
        if let WebInfoWindow::Live(info_window) = window {
            info_window.close();
        }
    }

    fn set_info_content(&self, window: &WebInfoWindow, html: &str) {
        if let WebInfoWindow::Live(info_window) = window {
            info_window.set_content(html);
        }
    }

    fn pan_to(&self, map: &GoogleMap, position: LatLng, zoom: f64) {
        if let Some(position) = to_js(&position) {
            map.pan_to(&position);
            map.set_zoom(zoom);
        }
    }
}

/// Documento del navegador: `<head>` y propiedades de `window`
///
/// Los callbacks globales viven aquí hasta `remove_callback`: el SDK puede
/// llamar a `window[name]` más de una vez.
#[derive(Default)]
pub struct DomScriptHost {
    callbacks: RefCell<HashMap<String, Closure<dyn FnMut()>>>,
}

impl ScriptHost for DomScriptHost {
    type Script = HtmlScriptElement;

    fn sdk_present(&self) -> bool {
        is_google_maps_loaded()
    }

    fn inject_script(&self, src: &str, on_error: Box<dyn FnMut()>) -> Result<HtmlScriptElement, MapError> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or(MapError::NoDocument)?;
        let head = document.head().ok_or(MapError::NoDocument)?;

        let script: HtmlScriptElement = document
            .create_element("script")
            .map_err(|e| MapError::Dom(format!("{:?}", e)))?
            .dyn_into()
            .map_err(|_| MapError::Dom("script element cast".to_string()))?;
        script.set_src(src);
        script.set_async(true);
        script.set_defer(true);

        // Se invoca como mucho una vez; no hay que guardarlo
        let mut on_error = on_error;
        let handler = Closure::once_into_js(move || on_error());
        script.set_onerror(Some(handler.unchecked_ref()));

        head.append_child(&script)
            .map_err(|e| MapError::Dom(format!("{:?}", e)))?;
        Ok(script)
    }

    fn remove_script(&self, script: &HtmlScriptElement) {
        if script.parent_node().is_some() {
            script.remove();
            log::debug!("🗑️ Script de Google Maps retirado del documento");
        }
    }

    fn install_callback(&self, name: &str, callback: Box<dyn FnMut()>) -> Result<(), MapError> {
        let window = window().ok_or(MapError::NoDocument)?;
        let closure = Closure::wrap(callback);
        js_sys::Reflect::set(&window, &JsValue::from_str(name), closure.as_ref())
            .map_err(|e| MapError::Dom(format!("{:?}", e)))?;
        self.callbacks.borrow_mut().insert(name.to_string(), closure);
        Ok(())
    }

    fn remove_callback(&self, name: &str) {
        if let Some(window) = window() {
            let target: &js_sys::Object = window.as_ref();
            match js_sys::Reflect::delete_property(target, &JsValue::from_str(name)) {
                Ok(true) => {}
                Ok(false) => log::debug!("⚠️ window.{} no se pudo borrar", name),
                Err(e) => log::debug!("⚠️ Error borrando window.{}: {:?}", name, e),
            }
        }
        // Si el SDK está dentro del callback, wasm-bindgen difiere la liberación
        self.callbacks.borrow_mut().remove(name);
    }
}
