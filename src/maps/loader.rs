// ============================================================================
// SCRIPT LOADER - Carga única del SDK de Google Maps
// ============================================================================
// Una sola instancia por página (se comparte vía contexto Yew). Como mucho
// una carga en curso; el flag `loading` hace de sección crítica porque la
// ejecución es de un solo hilo.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use super::traits::ScriptHost;
use super::MapError;

pub const MAPS_SCRIPT_URL: &str = "https://maps.googleapis.com/maps/api/js";

struct LoadState<S> {
    loading: bool,
    script: Option<S>,
}

impl<S> Default for LoadState<S> {
    fn default() -> Self {
        Self {
            loading: false,
            script: None,
        }
    }
}

struct LoaderInner<H: ScriptHost> {
    host: H,
    api_key: Option<String>,
    state: RefCell<LoadState<H::Script>>,
}

impl<H: ScriptHost> LoaderInner<H> {
    fn reset(&self) {
        *self.state.borrow_mut() = LoadState::default();
    }
}

/// Cargador del script del SDK
pub struct ScriptLoader<H: ScriptHost> {
    inner: Rc<LoaderInner<H>>,
}

impl<H: ScriptHost> Clone for ScriptLoader<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Igualdad por instancia (requerido por `ContextProvider`)
impl<H: ScriptHost> PartialEq for ScriptLoader<H> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<H: ScriptHost + 'static> ScriptLoader<H> {
    pub fn new(host: H, api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        Self {
            inner: Rc::new(LoaderInner {
                host,
                api_key,
                state: RefCell::new(LoadState::default()),
            }),
        }
    }

    pub fn host(&self) -> &H {
        &self.inner.host
    }

    pub fn has_api_key(&self) -> bool {
        self.inner.api_key.is_some()
    }

    /// El SDK ya está en el scope global
    pub fn is_loaded(&self) -> bool {
        self.inner.host.sdk_present()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().loading
    }

    /// Script inyectado y todavía no retirado
    pub fn current_script(&self) -> Option<H::Script> {
        self.inner.state.borrow().script.clone()
    }

    /// Inyectar el script del SDK (`loadScript`)
    ///
    /// Devuelve `None` sin tocar el DOM si no hay clave o si el SDK ya está
    /// cargado; si hay una carga en curso devuelve el mismo script.
    pub fn start(&self, callback_name: &str) -> Option<H::Script> {
        let Some(api_key) = self.inner.api_key.as_deref() else {
            log::warn!("⚠️ {}. El mapa no se cargará.", MapError::MissingApiKey);
            return None;
        };

        if self.is_loaded() {
            log::debug!("🗺️ Google Maps ya cargado, no se inyecta script");
            return None;
        }

        {
            let state = self.inner.state.borrow();
            if state.loading {
                if let Some(script) = state.script.as_ref() {
                    log::debug!("⏳ Carga de Google Maps en curso, reutilizando script");
                    return Some(script.clone());
                }
            }
        }

        let src = script_url(api_key, callback_name);
        let weak = Rc::downgrade(&self.inner);
        let on_error = Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                log::error!("❌ Error cargando el script de Google Maps");
                let failed = inner.state.borrow_mut().script.take();
                if let Some(script) = failed {
                    inner.host.remove_script(&script);
                }
                inner.reset();
            }
        });

        match self.inner.host.inject_script(&src, on_error) {
            Ok(script) => {
                let mut state = self.inner.state.borrow_mut();
                state.loading = true;
                state.script = Some(script.clone());
                log::info!("📜 Script de Google Maps añadido (callback: {})", callback_name);
                Some(script)
            }
            Err(e) => {
                log::error!("❌ No se pudo inyectar el script de Google Maps: {}", e);
                self.reset();
                None
            }
        }
    }

    /// El SDK invocó el callback global
    pub fn on_loaded(&self) {
        self.inner.state.borrow_mut().loading = false;
        log::info!("✅ Google Maps API cargada");
    }

    pub fn reset(&self) {
        self.inner.reset();
    }

    /// Quitar el script (`removeScript`); idempotente
    ///
    /// El reset final es incondicional para que un `loading` atascado no
    /// sobreviva al desmontaje.
    pub fn remove_script(&self, script: Option<&H::Script>) {
        if let Some(script) = script {
            self.inner.host.remove_script(script);
        }
        self.reset();
    }
}

/// URL del SDK con clave y nombre del callback global
pub fn script_url(api_key: &str, callback_name: &str) -> String {
    format!("{}?key={}&callback={}", MAPS_SCRIPT_URL, api_key, callback_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::testing::FakeBrowser;

    fn loader(browser: &FakeBrowser, key: Option<&str>) -> ScriptLoader<FakeBrowser> {
        ScriptLoader::new(browser.clone(), key.map(str::to_string))
    }

    #[test]
    fn builds_sdk_url_with_key_and_callback() {
        assert_eq!(
            script_url("KEY", "initGoogleMap_1"),
            "https://maps.googleapis.com/maps/api/js?key=KEY&callback=initGoogleMap_1"
        );
    }

    #[test]
    fn missing_key_returns_none_without_dom_mutation() {
        let browser = FakeBrowser::new();
        for key in [None, Some(""), Some("  ")] {
            let loader = loader(&browser, key);
            assert!(!loader.has_api_key());
            assert_eq!(loader.start("cb"), None);
            assert!(!loader.is_loading());
        }
        assert_eq!(browser.dom_mutations(), 0);
    }

    #[test]
    fn is_loaded_tracks_sdk_global() {
        let browser = FakeBrowser::new();
        let loader = loader(&browser, Some("KEY"));
        assert!(!loader.is_loaded());
        browser.set_sdk_present(true);
        assert!(loader.is_loaded());
    }

    #[test]
    fn start_is_noop_when_sdk_already_loaded() {
        let browser = FakeBrowser::new();
        browser.set_sdk_present(true);
        let loader = loader(&browser, Some("KEY"));

        assert_eq!(loader.start("cb"), None);
        assert_eq!(browser.dom_mutations(), 0);
        assert!(!loader.is_loading());
    }

    #[test]
    fn start_injects_once_and_reuses_in_flight_script() {
        let browser = FakeBrowser::new();
        let loader = loader(&browser, Some("KEY"));

        let first = loader.start("cb_a").unwrap();
        assert!(loader.is_loading());
        let second = loader.start("cb_b").unwrap();

        assert_eq!(first, second);
        assert_eq!(browser.scripts_in_document().len(), 1);
        assert_eq!(browser.script_src(first).unwrap(), script_url("KEY", "cb_a"));
    }

    #[test]
    fn shared_clones_see_the_same_load() {
        let browser = FakeBrowser::new();
        let a = loader(&browser, Some("KEY"));
        let b = a.clone();
        assert!(a == b);

        let script = a.start("cb").unwrap();
        assert!(b.is_loading());
        assert_eq!(b.start("cb").unwrap(), script);
        assert_eq!(browser.scripts_in_document().len(), 1);
    }

    #[test]
    fn script_error_resets_state_for_retry() {
        let browser = FakeBrowser::new();
        let loader = loader(&browser, Some("KEY"));
        let script = loader.start("cb").unwrap();

        browser.fail_script(script);

        assert!(!loader.is_loading());
        assert!(loader.current_script().is_none());
        assert!(browser.scripts_in_document().is_empty());

        let retry = loader.start("cb").unwrap();
        assert_ne!(retry, script);
        assert!(loader.is_loading());
    }

    #[test]
    fn injection_failure_leaves_loader_idle() {
        let browser = FakeBrowser::new();
        browser.set_document_available(false);
        let loader = loader(&browser, Some("KEY"));

        assert_eq!(loader.start("cb"), None);
        assert!(!loader.is_loading());
    }

    #[test]
    fn on_loaded_clears_in_progress_flag_but_keeps_handle() {
        let browser = FakeBrowser::new();
        let loader = loader(&browser, Some("KEY"));
        let script = loader.start("cb").unwrap();

        loader.on_loaded();

        assert!(!loader.is_loading());
        assert_eq!(loader.current_script(), Some(script));
    }

    #[test]
    fn remove_script_is_idempotent() {
        let browser = FakeBrowser::new();
        let loader = loader(&browser, Some("KEY"));
        let script = loader.start("cb").unwrap();

        loader.remove_script(Some(&script));
        loader.remove_script(Some(&script));
        loader.remove_script(None);

        assert!(browser.scripts_in_document().is_empty());
        assert!(!loader.is_loading());
        assert!(loader.current_script().is_none());
    }

    #[test]
    fn remove_script_without_handle_still_resets_flags() {
        let browser = FakeBrowser::new();
        let loader = loader(&browser, Some("KEY"));
        loader.start("cb").unwrap();

        loader.remove_script(None);

        assert!(!loader.is_loading());
        // Con los flags limpios se puede volver a cargar
        assert!(loader.start("cb").is_some());
    }
}
