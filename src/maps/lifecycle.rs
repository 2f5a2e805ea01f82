// ============================================================================
// MAP LIFECYCLE - Orquestación montaje/desmontaje del mapa de parceiros
// ============================================================================
// Unmounted → Loading → Initializing → Ready, y vuelta a Unmounted al
// desmontar desde cualquier estado. El callback global del SDK puede llegar
// después del desmontaje: se comprueba el LoadTicket antes de actuar.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::loader::ScriptLoader;
use super::session::{MapSession, PlacedMarker};
use super::traits::{MapsSdk, ScriptHost};
use crate::config::MapConfig;
use crate::models::{LatLng, Partner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapPhase {
    Unmounted,
    Loading,
    Initializing,
    Ready,
}

/// Dónde y cómo se construye el mapa
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewConfig {
    pub element_id: String,
    pub center: LatLng,
    pub zoom: f64,
    pub focus_zoom: f64,
}

impl From<&MapConfig> for MapViewConfig {
    fn from(config: &MapConfig) -> Self {
        Self {
            element_id: config.container_id.clone(),
            center: config.center(),
            zoom: config.default_zoom,
            focus_zoom: config.focus_zoom,
        }
    }
}

/// Prueba de vida de la vista montada
///
/// Lo captura el callback del SDK; `cancel()` al desmontar hace que un
/// callback tardío se ignore.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    alive: Rc<Cell<bool>>,
}

impl LoadTicket {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    pub fn cancel(&self) {
        self.alive.set(false);
    }
}

impl Default for LoadTicket {
    fn default() -> Self {
        Self::new()
    }
}

struct LifecycleInner<S: MapsSdk, H: ScriptHost> {
    sdk: S,
    loader: ScriptLoader<H>,
    config: MapViewConfig,
    partners: Vec<Partner>,
    callback_name: String,
    phase: Cell<MapPhase>,
    // Re-entrada: un segundo initialize() mientras corre el primero no hace nada
    initializing: Cell<bool>,
    ticket: RefCell<Option<LoadTicket>>,
    session: RefCell<Option<MapSession<S>>>,
    script: RefCell<Option<H::Script>>,
    on_ready: RefCell<Option<Rc<dyn Fn()>>>,
    on_select: RefCell<Option<Rc<dyn Fn(String)>>>,
}

/// Recurso de mapa de una vista: se adquiere en `mount` y se libera en `unmount`
pub struct MapLifecycle<S: MapsSdk, H: ScriptHost> {
    inner: Rc<LifecycleInner<S, H>>,
}

impl<S: MapsSdk, H: ScriptHost> Clone for MapLifecycle<S, H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S, H> MapLifecycle<S, H>
where
    S: MapsSdk + 'static,
    H: ScriptHost + 'static,
{
    pub fn new(
        sdk: S,
        loader: ScriptLoader<H>,
        config: MapViewConfig,
        partners: Vec<Partner>,
        callback_name: impl Into<String>,
    ) -> Self {
        Self {
            inner: Rc::new(LifecycleInner {
                sdk,
                loader,
                config,
                partners,
                callback_name: callback_name.into(),
                phase: Cell::new(MapPhase::Unmounted),
                initializing: Cell::new(false),
                ticket: RefCell::new(None),
                session: RefCell::new(None),
                script: RefCell::new(None),
                on_ready: RefCell::new(None),
                on_select: RefCell::new(None),
            }),
        }
    }

    /// Nombre del callback global `initGoogleMap_<millis>`
    pub fn callback_name_now() -> String {
        format!("initGoogleMap_{}", chrono::Utc::now().timestamp_millis())
    }

    pub fn set_on_ready(&self, f: impl Fn() + 'static) {
        *self.inner.on_ready.borrow_mut() = Some(Rc::new(f));
    }

    pub fn set_on_select(&self, f: impl Fn(String) + 'static) {
        *self.inner.on_select.borrow_mut() = Some(Rc::new(f));
    }

    pub fn phase(&self) -> MapPhase {
        self.inner.phase.get()
    }

    pub fn is_ready(&self) -> bool {
        self.phase() == MapPhase::Ready
    }

    pub fn is_mounted(&self) -> bool {
        self.inner
            .ticket
            .borrow()
            .as_ref()
            .map_or(false, LoadTicket::is_alive)
    }

    pub fn callback_name(&self) -> &str {
        &self.inner.callback_name
    }

    pub fn active_partner(&self) -> Option<String> {
        self.inner
            .session
            .borrow()
            .as_ref()
            .and_then(|s| s.active().map(str::to_string))
    }

    pub fn open_info(&self) -> Option<String> {
        self.inner
            .session
            .borrow()
            .as_ref()
            .and_then(|s| s.open_info().map(str::to_string))
    }

    pub fn marker_count(&self) -> usize {
        self.inner.session.borrow().as_ref().map_or(0, MapSession::marker_count)
    }

    /// La vista se monta
    pub fn mount(&self) {
        if self.phase() != MapPhase::Unmounted {
            log::debug!("🗺️ Mapa ya montado ({:?}), ignorando", self.phase());
            return;
        }

        let ticket = LoadTicket::new();
        *self.inner.ticket.borrow_mut() = Some(ticket.clone());
        self.inner.phase.set(MapPhase::Loading);

        let loader = &self.inner.loader;
        if loader.is_loaded() {
            log::info!("🗺️ Google Maps ya cargado, inicializando directamente");
            self.initialize();
            return;
        }

        if !loader.has_api_key() {
            log::warn!("⚠️ Google Maps API key not found. Map will not load.");
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let callback_ticket = ticket;
        let installed = loader.host().install_callback(
            &self.inner.callback_name,
            Box::new(move || {
                if !callback_ticket.is_alive() {
                    log::info!("🗺️ Callback de Google Maps tras desmontar, ignorado");
                    return;
                }
                if let Some(inner) = weak.upgrade() {
                    MapLifecycle { inner }.on_sdk_loaded();
                }
            }),
        );
        if let Err(e) = installed {
            log::error!("❌ No se pudo registrar el callback de Google Maps: {}", e);
            return;
        }

        let script = loader.start(&self.inner.callback_name);
        *self.inner.script.borrow_mut() = script;
    }

    /// Callback del SDK: Loading → Initializing si la vista sigue montada
    pub fn on_sdk_loaded(&self) {
        self.inner.loader.on_loaded();
        if !self.is_mounted() {
            log::info!("🗺️ SDK cargado pero la vista ya no está montada");
            return;
        }
        self.initialize();
    }

    /// Construir el mapa y colocar un marcador por parceiro
    ///
    /// Devuelve false si ya estaba inicializando/listo o si falló la
    /// construcción (se vuelve a Loading con el placeholder visible).
    pub fn initialize(&self) -> bool {
        let inner = &self.inner;
        if inner.initializing.get() || self.phase() == MapPhase::Ready {
            log::debug!("🗺️ Mapa ya inicializado o inicializando, saltando");
            return false;
        }
        if !self.is_mounted() {
            return false;
        }

        inner.initializing.set(true);
        inner.phase.set(MapPhase::Initializing);
        log::info!("🗺️ Inicializando mapa");

        let config = &inner.config;
        let Some(map) = inner.sdk.init_map(&config.element_id, config.center, config.zoom) else {
            log::error!("❌ Failed to initialize map (#{})", config.element_id);
            inner.phase.set(MapPhase::Loading);
            inner.initializing.set(false);
            return false;
        };

        let mut session = MapSession::new(map);
        for partner in &inner.partners {
            let Some(marker) = inner.sdk.add_marker(
                session.map(),
                partner.position(),
                &partner.name,
                partner.marker_color(),
            ) else {
                log::warn!("⚠️ No se pudo crear el marcador de {}", partner.name);
                continue;
            };

            let info_window = inner.sdk.create_info_window(&partner.info_window_html());
            let weak = Rc::downgrade(inner);
            let partner_id = partner.id.clone();
            let listener = inner.sdk.on_marker_click(
                &marker,
                Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        MapLifecycle { inner }.select_partner(&partner_id);
                    }
                }),
            );

            session.insert(
                partner.id.clone(),
                PlacedMarker {
                    marker,
                    info_window,
                    listener,
                },
            );
        }

        let count = session.marker_count();
        *inner.session.borrow_mut() = Some(session);
        inner.phase.set(MapPhase::Ready);
        inner.initializing.set(false);
        log::info!("✅ Mapa listo con {} marcadores", count);

        let on_ready = inner.on_ready.borrow().clone();
        if let Some(on_ready) = on_ready {
            on_ready();
        }
        true
    }

    /// Click en un marcador: cerrar el info window anterior, abrir este y
    /// marcar el parceiro como activo
    pub fn select_partner(&self, partner_id: &str) {
        if !self.is_mounted() {
            return;
        }
        {
            let mut session = self.inner.session.borrow_mut();
            if let Some(session) = session.as_mut() {
                session.open_info_for(&self.inner.sdk, partner_id);
            }
        }
        self.notify_select(partner_id);
    }

    /// "Ver no mapa": centrar en el marcador, zoom de foco y abrir su info window
    ///
    /// Sin mapa listo solo cambia la selección.
    pub fn focus_partner(&self, partner_id: &str) {
        let inner = &self.inner;
        let target = {
            let session = inner.session.borrow();
            session.as_ref().and_then(|s| {
                if !s.has_marker(partner_id) {
                    return None;
                }
                inner
                    .partners
                    .iter()
                    .find(|p| p.id == partner_id)
                    .map(|p| (s.map().clone(), p.position()))
            })
        };

        match target {
            Some((map, position)) => {
                inner.sdk.pan_to(&map, position, inner.config.focus_zoom);
                self.select_partner(partner_id);
            }
            None => self.notify_select(partner_id),
        }
    }

    fn notify_select(&self, partner_id: &str) {
        let on_select = self.inner.on_select.borrow().clone();
        if let Some(on_select) = on_select {
            on_select(partner_id.to_string());
        }
    }

    /// Desmontaje: seguro desde cualquier estado e idempotente
    pub fn unmount(&self) {
        let inner = &self.inner;
        if let Some(ticket) = inner.ticket.borrow_mut().take() {
            ticket.cancel();
        }

        let session = inner.session.borrow_mut().take();
        if let Some(session) = session {
            session.teardown(&inner.sdk);
        }

        inner.loader.host().remove_callback(&inner.callback_name);
        let script = inner.script.borrow_mut().take();
        inner.loader.remove_script(script.as_ref());

        inner.initializing.set(false);
        inner.phase.set(MapPhase::Unmounted);
        log::info!("🧹 Mapa de parceiros desmontado");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::testing::FakeBrowser;
    use crate::models::seed_partners;
    use std::cell::RefCell;

    const CALLBACK: &str = "initGoogleMap_test";

    struct Harness {
        browser: FakeBrowser,
        lifecycle: MapLifecycle<FakeBrowser, FakeBrowser>,
        ready_calls: Rc<Cell<usize>>,
        selected: Rc<RefCell<Vec<String>>>,
    }

    fn harness(api_key: Option<&str>) -> Harness {
        let browser = FakeBrowser::new();
        browser.add_element("map-container");
        let loader = ScriptLoader::new(browser.clone(), api_key.map(str::to_string));
        let config = MapViewConfig::from(&MapConfig::default());
        let lifecycle = MapLifecycle::new(browser.clone(), loader, config, seed_partners(), CALLBACK);

        let ready_calls = Rc::new(Cell::new(0));
        let selected = Rc::new(RefCell::new(Vec::new()));
        {
            let ready_calls = ready_calls.clone();
            lifecycle.set_on_ready(move || ready_calls.set(ready_calls.get() + 1));
            let selected = selected.clone();
            lifecycle.set_on_select(move |id| selected.borrow_mut().push(id));
        }
        Harness { browser, lifecycle, ready_calls, selected }
    }

    #[test]
    fn full_load_goes_from_loading_to_ready() {
        let h = harness(Some("KEY"));
        assert_eq!(h.lifecycle.phase(), MapPhase::Unmounted);

        h.lifecycle.mount();
        assert_eq!(h.lifecycle.phase(), MapPhase::Loading);
        assert!(h.browser.has_callback(h.lifecycle.callback_name()));
        let scripts = h.browser.scripts_in_document();
        assert_eq!(scripts.len(), 1);
        let src = h.browser.script_src(scripts[0]).unwrap();
        assert!(src.ends_with(&format!("callback={}", h.lifecycle.callback_name())));

        h.browser.finish_sdk_load(CALLBACK);

        assert_eq!(h.lifecycle.phase(), MapPhase::Ready);
        assert_eq!(h.lifecycle.marker_count(), 4);
        assert_eq!(h.browser.maps_created(), 1);
        assert_eq!(h.ready_calls.get(), 1);
    }

    #[test]
    fn markers_use_featured_accent() {
        let h = harness(Some("KEY"));
        h.lifecycle.mount();
        h.browser.finish_sdk_load(CALLBACK);

        let featured = h.browser.marker_for("Posto São João").unwrap();
        let standard = h.browser.marker_for("Supermercado Express").unwrap();
        assert_eq!(h.browser.marker_color(featured).unwrap(), "#FACC15");
        assert_eq!(h.browser.marker_color(standard).unwrap(), "#3B82F6");
    }

    #[test]
    fn sdk_already_present_skips_script_injection() {
        let h = harness(Some("KEY"));
        h.browser.set_sdk_present(true);

        h.lifecycle.mount();

        assert_eq!(h.lifecycle.phase(), MapPhase::Ready);
        assert!(h.browser.scripts_in_document().is_empty());
        assert!(!h.browser.has_callback(CALLBACK));
    }

    #[test]
    fn missing_key_stays_loading_without_dom_changes() {
        let h = harness(None);

        h.lifecycle.mount();

        assert_eq!(h.lifecycle.phase(), MapPhase::Loading);
        assert_eq!(h.browser.dom_mutations(), 0);
        assert!(!h.browser.has_callback(CALLBACK));
        assert_eq!(h.ready_calls.get(), 0);
    }

    #[test]
    fn missing_container_falls_back_to_loading() {
        let browser = FakeBrowser::new();
        browser.set_sdk_present(true);
        let loader = ScriptLoader::new(browser.clone(), Some("KEY".to_string()));
        let lifecycle = MapLifecycle::new(
            browser.clone(),
            loader,
            MapViewConfig::from(&MapConfig::default()),
            seed_partners(),
            CALLBACK,
        );

        lifecycle.mount();

        assert_eq!(lifecycle.phase(), MapPhase::Loading);
        assert_eq!(browser.maps_created(), 0);
        // Reintento posible una vez exista el contenedor
        browser.add_element("map-container");
        assert!(lifecycle.initialize());
        assert!(lifecycle.is_ready());
    }

    #[test]
    fn duplicate_callback_does_not_initialize_twice() {
        let h = harness(Some("KEY"));
        h.lifecycle.mount();

        h.browser.finish_sdk_load(CALLBACK);
        assert!(h.browser.has_callback(CALLBACK));
        h.browser.invoke_callback(CALLBACK);
        h.browser.invoke_callback(CALLBACK);
        assert!(!h.lifecycle.initialize());

        assert_eq!(h.browser.maps_created(), 1);
        assert_eq!(h.browser.markers_on_map(), 4);
        assert_eq!(h.ready_calls.get(), 1);
    }

    #[test]
    fn reentrant_initialize_is_a_noop() {
        let h = harness(Some("KEY"));
        h.browser.set_sdk_present(true);
        let reentrant = h.lifecycle.clone();
        let attempts = Rc::new(Cell::new(None));
        {
            let attempts = attempts.clone();
            // on_ready corre dentro de initialize(); el flag ya está limpio
            // y la fase es Ready, así que el segundo intento no hace nada
            h.lifecycle.set_on_ready(move || attempts.set(Some(reentrant.initialize())));
        }

        h.lifecycle.mount();

        assert_eq!(attempts.get(), Some(false));
        assert_eq!(h.browser.maps_created(), 1);
    }

    #[test]
    fn marker_click_opens_one_info_window_and_selects_partner() {
        let h = harness(Some("KEY"));
        h.lifecycle.mount();
        h.browser.finish_sdk_load(CALLBACK);

        let first = h.browser.marker_for("Posto São João").unwrap();
        let second = h.browser.marker_for("Bar do Zé").unwrap();
        h.browser.click(first);
        h.browser.click(second);

        assert_eq!(h.browser.open_info_windows(), 1);
        assert!(h.browser.open_info_contents()[0].contains("Bar do Zé"));
        assert_eq!(h.lifecycle.open_info(), Some("4".to_string()));
        assert_eq!(h.lifecycle.active_partner(), Some("4".to_string()));
        assert_eq!(*h.selected.borrow(), vec!["1".to_string(), "4".to_string()]);
    }

    #[test]
    fn focus_pans_with_focus_zoom_and_opens_info() {
        let h = harness(Some("KEY"));
        h.lifecycle.mount();
        h.browser.finish_sdk_load(CALLBACK);

        h.lifecycle.focus_partner("3");

        let pans = h.browser.pans();
        assert_eq!(pans.len(), 1);
        assert_eq!(pans[0].0, LatLng { lat: -23.5708, lng: -46.6752 });
        assert_eq!(pans[0].1, 15.0);
        assert_eq!(h.lifecycle.open_info(), Some("3".to_string()));
        assert_eq!(*h.selected.borrow(), vec!["3".to_string()]);
    }

    #[test]
    fn focus_before_ready_only_changes_selection() {
        let h = harness(Some("KEY"));
        h.lifecycle.mount();

        h.lifecycle.focus_partner("2");

        assert!(h.browser.pans().is_empty());
        assert_eq!(*h.selected.borrow(), vec!["2".to_string()]);
    }

    #[test]
    fn unmount_releases_everything() {
        let h = harness(Some("KEY"));
        h.lifecycle.mount();
        h.browser.finish_sdk_load(CALLBACK);
        h.browser.click(h.browser.marker_for("Conveniência 24h").unwrap());

        h.lifecycle.unmount();

        assert_eq!(h.lifecycle.phase(), MapPhase::Unmounted);
        assert_eq!(h.browser.markers_on_map(), 0);
        assert_eq!(h.browser.active_listeners(), 0);
        assert_eq!(h.browser.open_info_windows(), 0);
        assert!(h.browser.scripts_in_document().is_empty());
        assert!(!h.browser.has_callback(CALLBACK));
        assert_eq!(h.lifecycle.marker_count(), 0);
    }

    #[test]
    fn unmount_before_callback_ignores_late_load() {
        let h = harness(Some("KEY"));
        h.lifecycle.mount();
        let mut late_callback = h.browser.retain_callback(CALLBACK).unwrap();

        h.lifecycle.unmount();
        assert!(h.browser.scripts_in_document().is_empty());
        assert!(!h.browser.has_callback(CALLBACK));

        h.browser.set_sdk_present(true);
        late_callback();

        assert_eq!(h.lifecycle.phase(), MapPhase::Unmounted);
        assert_eq!(h.browser.maps_created(), 0);
        assert_eq!(h.ready_calls.get(), 0);
    }

    #[test]
    fn late_callback_after_drop_is_harmless() {
        let h = harness(Some("KEY"));
        h.lifecycle.mount();
        let mut late_callback = h.browser.retain_callback(CALLBACK).unwrap();
        let Harness { browser, lifecycle, .. } = h;
        drop(lifecycle);

        browser.set_sdk_present(true);
        late_callback();

        assert_eq!(browser.maps_created(), 0);
    }

    #[test]
    fn unmount_is_safe_from_any_state_and_twice() {
        let h = harness(None);
        h.lifecycle.unmount();
        h.lifecycle.unmount();
        assert_eq!(h.lifecycle.phase(), MapPhase::Unmounted);

        let h = harness(Some("KEY"));
        h.lifecycle.mount();
        h.lifecycle.unmount();
        h.lifecycle.unmount();
        assert_eq!(h.lifecycle.phase(), MapPhase::Unmounted);
    }

    #[test]
    fn click_after_unmount_is_ignored() {
        let h = harness(Some("KEY"));
        h.lifecycle.mount();
        h.browser.finish_sdk_load(CALLBACK);
        let marker = h.browser.marker_for("Bar do Zé").unwrap();
        let stale = h.lifecycle.clone();

        h.lifecycle.unmount();
        stale.select_partner("4");
        h.browser.click(marker);

        assert!(h.selected.borrow().is_empty());
        assert_eq!(h.browser.open_info_windows(), 0);
    }

    #[test]
    fn remount_loads_again() {
        let h = harness(Some("KEY"));
        h.lifecycle.mount();
        h.lifecycle.unmount();

        h.lifecycle.mount();

        assert_eq!(h.lifecycle.phase(), MapPhase::Loading);
        assert_eq!(h.browser.scripts_in_document().len(), 1);
        h.browser.finish_sdk_load(CALLBACK);
        assert!(h.lifecycle.is_ready());
    }
}
