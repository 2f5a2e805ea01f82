// Navegador en memoria para tests: implementa MapsSdk y ScriptHost

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::{Rc, Weak};

use super::traits::{MapsSdk, ScriptHost};
use super::MapError;
use crate::models::LatLng;

type Handler = Box<dyn FnMut()>;

#[derive(Default)]
struct State {
    next_id: u32,
    sdk_present: bool,
    document_available: bool,
    elements: HashSet<String>,
    dom_mutations: usize,
    scripts: HashMap<u32, String>,
    script_errors: HashMap<u32, Handler>,
    callbacks: HashMap<String, Rc<RefCell<Handler>>>,
    maps: Vec<(String, LatLng, f64)>,
    markers: HashMap<u32, (String, String)>,
    listeners: HashMap<u32, (u32, Handler)>,
    info_windows: HashMap<u32, String>,
    open_windows: HashSet<u32>,
    pans: Vec<(LatLng, f64)>,
}

#[derive(Clone)]
pub struct FakeBrowser {
    state: Rc<RefCell<State>>,
}

impl FakeBrowser {
    pub fn new() -> Self {
        let state = State {
            document_available: true,
            ..State::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    fn next_id(&self) -> u32 {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        state.next_id
    }

    pub fn set_sdk_present(&self, present: bool) {
        self.state.borrow_mut().sdk_present = present;
    }

    pub fn set_document_available(&self, available: bool) {
        self.state.borrow_mut().document_available = available;
    }

    pub fn add_element(&self, id: &str) {
        self.state.borrow_mut().elements.insert(id.to_string());
    }

    pub fn dom_mutations(&self) -> usize {
        self.state.borrow().dom_mutations
    }

    pub fn scripts_in_document(&self) -> Vec<u32> {
        self.state.borrow().scripts.keys().copied().collect()
    }

    pub fn script_src(&self, script: u32) -> Option<String> {
        self.state.borrow().scripts.get(&script).cloned()
    }

    /// Simula un error de red del `<script>`
    pub fn fail_script(&self, script: u32) {
        let handler = self.state.borrow_mut().script_errors.remove(&script);
        if let Some(mut handler) = handler {
            handler();
        }
    }

    pub fn has_callback(&self, name: &str) -> bool {
        self.state.borrow().callbacks.contains_key(name)
    }

    /// Referencia que guarda el SDK a `window[name]`
    ///
    /// Tras `remove_callback` el closure ya está liberado y llamarla no
    /// ejecuta nada del lado Rust.
    pub fn retain_callback(&self, name: &str) -> Option<Box<dyn FnMut()>> {
        let handler: Weak<RefCell<Handler>> = Rc::downgrade(self.state.borrow().callbacks.get(name)?);
        Some(Box::new(move || {
            if let Some(handler) = handler.upgrade() {
                (handler.borrow_mut())();
            }
        }))
    }

    /// El SDK termina de cargar e invoca `window[name]`
    pub fn finish_sdk_load(&self, name: &str) {
        self.set_sdk_present(true);
        self.invoke_callback(name);
    }

    /// Igual que en el navegador, `window[name]` sigue registrado tras la llamada
    pub fn invoke_callback(&self, name: &str) {
        let handler = self.state.borrow().callbacks.get(name).cloned();
        if let Some(handler) = handler {
            (handler.borrow_mut())();
        }
    }

    pub fn maps_created(&self) -> usize {
        self.state.borrow().maps.len()
    }

    pub fn markers_on_map(&self) -> usize {
        self.state.borrow().markers.len()
    }

    pub fn marker_for(&self, title: &str) -> Option<u32> {
        self.state
            .borrow()
            .markers
            .iter()
            .find(|(_, (t, _))| t == title)
            .map(|(id, _)| *id)
    }

    pub fn marker_color(&self, marker: u32) -> Option<String> {
        self.state.borrow().markers.get(&marker).map(|(_, c)| c.clone())
    }

    pub fn active_listeners(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Dispara los listeners de click del marcador
    pub fn click(&self, marker: u32) {
        let ids: Vec<u32> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|(_, (m, _))| *m == marker)
            .map(|(id, _)| *id)
            .collect();
        for id in ids {
            let entry = self.state.borrow_mut().listeners.remove(&id);
            if let Some((m, mut handler)) = entry {
                handler();
                self.state.borrow_mut().listeners.insert(id, (m, handler));
            }
        }
    }

    pub fn open_info_windows(&self) -> usize {
        self.state.borrow().open_windows.len()
    }

    pub fn open_info_contents(&self) -> Vec<String> {
        let state = self.state.borrow();
        state
            .open_windows
            .iter()
            .filter_map(|id| state.info_windows.get(id).cloned())
            .collect()
    }

    pub fn pans(&self) -> Vec<(LatLng, f64)> {
        self.state.borrow().pans.clone()
    }
}

impl MapsSdk for FakeBrowser {
    type Map = u32;
    type Marker = u32;
    type InfoWindow = Option<u32>;
    type Listener = u32;

    fn is_loaded(&self) -> bool {
        self.state.borrow().sdk_present
    }

    fn init_map(&self, element_id: &str, center: LatLng, zoom: f64) -> Option<u32> {
        {
            let state = self.state.borrow();
            if !state.sdk_present || !state.elements.contains(element_id) {
                return None;
            }
        }
        let id = self.next_id();
        self.state.borrow_mut().maps.push((element_id.to_string(), center, zoom));
        Some(id)
    }

    fn add_marker(&self, _map: &u32, _position: LatLng, title: &str, color: &str) -> Option<u32> {
        if !self.is_loaded() {
            return None;
        }
        let id = self.next_id();
        self.state
            .borrow_mut()
            .markers
            .insert(id, (title.to_string(), color.to_string()));
        Some(id)
    }

    fn remove_marker(&self, marker: &u32) {
        self.state.borrow_mut().markers.remove(marker);
    }

    fn on_marker_click(&self, marker: &u32, handler: Box<dyn FnMut()>) -> Option<u32> {
        if !self.is_loaded() {
            return None;
        }
        let id = self.next_id();
        self.state.borrow_mut().listeners.insert(id, (*marker, handler));
        Some(id)
    }

    fn remove_listener(&self, listener: u32) {
        self.state.borrow_mut().listeners.remove(&listener);
    }

    fn create_info_window(&self, html: &str) -> Option<u32> {
        if !self.is_loaded() {
            return None;
        }
        let id = self.next_id();
        self.state.borrow_mut().info_windows.insert(id, html.to_string());
        Some(id)
    }

    fn open_info_window(&self, window: &Option<u32>, _map: &u32, _marker: &u32) {
        if let Some(id) = window {
            self.state.borrow_mut().open_windows.insert(*id);
        }
    }

    fn close_info_window(&self, window: &Option<u32>) {
        if let Some(id) = window {
            self.state.borrow_mut().open_windows.remove(id);
        }
    }

    fn set_info_content(&self, window: &Option<u32>, html: &str) {
        if let Some(id) = window {
            self.state.borrow_mut().info_windows.insert(*id, html.to_string());
        }
    }

    fn pan_to(&self, _map: &u32, position: LatLng, zoom: f64) {
        self.state.borrow_mut().pans.push((position, zoom));
    }
}

impl ScriptHost for FakeBrowser {
    type Script = u32;

    fn sdk_present(&self) -> bool {
        self.state.borrow().sdk_present
    }

    fn inject_script(&self, src: &str, on_error: Box<dyn FnMut()>) -> Result<u32, MapError> {
        if !self.state.borrow().document_available {
            return Err(MapError::NoDocument);
        }
        let id = self.next_id();
        let mut state = self.state.borrow_mut();
        state.scripts.insert(id, src.to_string());
        state.script_errors.insert(id, on_error);
        state.dom_mutations += 1;
        Ok(id)
    }

    fn remove_script(&self, script: &u32) {
        let mut state = self.state.borrow_mut();
        if state.scripts.remove(script).is_some() {
            state.dom_mutations += 1;
        }
        state.script_errors.remove(script);
    }

    fn install_callback(&self, name: &str, callback: Box<dyn FnMut()>) -> Result<(), MapError> {
        self.state
            .borrow_mut()
            .callbacks
            .insert(name.to_string(), Rc::new(RefCell::new(callback)));
        Ok(())
    }

    fn remove_callback(&self, name: &str) {
        self.state.borrow_mut().callbacks.remove(name);
    }
}
