// ============================================================================
// GSAP FFI - Bindings a `gsap` y `ScrollTrigger` (scripts de la página)
// ============================================================================
// Si GSAP no está cargado todas las llamadas son no-op.
// ============================================================================

use std::sync::Once;

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = registerPlugin)]
    fn register_plugin(plugin: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = context)]
    fn gsap_context(func: &js_sys::Function, scope: &Element) -> Result<GsapContext, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = from)]
    fn gsap_from(target: &JsValue, vars: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = to)]
    fn gsap_to(target: &JsValue, vars: &JsValue) -> Result<JsValue, JsValue>;

    /// Resultado de `gsap.context()`
    pub type GsapContext;

    #[wasm_bindgen(catch, method)]
    fn revert(this: &GsapContext) -> Result<(), JsValue>;
}

static REGISTER_SCROLL_TRIGGER: Once = Once::new();

fn global(name: &str) -> Option<JsValue> {
    let value = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name)).ok()?;
    (!value.is_undefined() && !value.is_null()).then_some(value)
}

/// `window.gsap` existe
pub fn is_gsap_loaded() -> bool {
    global("gsap").is_some()
}

/// `gsap.registerPlugin(ScrollTrigger)` una sola vez por página
pub fn register_scroll_trigger() {
    if !is_gsap_loaded() {
        return;
    }
    REGISTER_SCROLL_TRIGGER.call_once(|| match global("ScrollTrigger") {
        Some(plugin) => match register_plugin(&plugin) {
            Ok(()) => log::debug!("🎬 ScrollTrigger registrado"),
            Err(e) => log::warn!("⚠️ No se pudo registrar ScrollTrigger: {:?}", e),
        },
        None => log::warn!("⚠️ ScrollTrigger no está cargado"),
    });
}

/// `gsap.context(func, scope)`; None si GSAP no está o lanza
pub fn context(scope: &Element, body: impl FnOnce() + 'static) -> Option<GsapContext> {
    if !is_gsap_loaded() {
        log::debug!("🎬 GSAP no cargado, sin animaciones");
        return None;
    }
    let func: js_sys::Function = Closure::once_into_js(body).into();
    gsap_context(&func, scope)
        .map_err(|e| log::warn!("⚠️ gsap.context falló: {:?}", e))
        .ok()
}

pub fn from(target: &JsValue, vars: &JsValue) {
    if let Err(e) = gsap_from(target, vars) {
        log::warn!("⚠️ gsap.from falló: {:?}", e);
    }
}

pub fn to(target: &JsValue, vars: &JsValue) {
    if let Err(e) = gsap_to(target, vars) {
        log::warn!("⚠️ gsap.to falló: {:?}", e);
    }
}

impl GsapContext {
    /// Deshacer todas las animaciones creadas en el contexto
    pub fn revert_all(&self) {
        if let Err(e) = self.revert() {
            log::warn!("⚠️ No se pudo revertir el contexto GSAP: {:?}", e);
        }
    }
}
