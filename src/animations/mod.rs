// Capa de animación: tweens declarativos ejecutados en un `gsap.context`

pub mod tween;

pub use tween::{ScrollTriggerSpec, Target, TweenKind, TweenSpec};

use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::utils::gsap_ffi::{self, GsapContext};

fn play(root: &Element, tween: &TweenSpec) {
    let target: JsValue = match &tween.target {
        Target::Root => root.clone().into(),
        Target::Selector(selector) => JsValue::from_str(selector),
    };
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let vars = match tween.vars_json().serialize(&serializer) {
        Ok(vars) => vars,
        Err(e) => {
            log::warn!("⚠️ Vars de animación inválidos: {}", e);
            return;
        }
    };
    match tween.kind {
        TweenKind::From => gsap_ffi::from(&target, &vars),
        TweenKind::To => gsap_ffi::to(&target, &vars),
    }
}

/// Ejecutar los tweens con alcance en `root`; el contexto devuelto se
/// revierte al desmontar
pub fn run(root: &Element, tweens: Vec<TweenSpec>) -> Option<GsapContext> {
    gsap_ffi::register_scroll_trigger();
    let scope = root.clone();
    gsap_ffi::context(root, move || {
        for tween in &tweens {
            play(&scope, tween);
        }
    })
}

/// Tween suelto sobre un elemento (efectos de hover)
pub fn animate(element: &Element, tween: &TweenSpec) {
    if gsap_ffi::is_gsap_loaded() {
        play(element, tween);
    }
}
