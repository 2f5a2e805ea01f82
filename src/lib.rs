// ============================================================================
// BATS ENERGY - LANDING PAGE + PANEL ADMIN (YEW + WASM)
// ============================================================================
// Arquitectura:
// - Views/Components: renderizado Yew
// - Hooks: estado de componente y ciclo de vida (mapa, CRUD, animaciones)
// - ViewModels: lógica del formulario admin
// - Stores: colección en memoria de parceiros
// - Maps: carga del SDK de Google Maps y sesión del mapa
// - Animations: tweens declarativos sobre GSAP
// ============================================================================

pub mod animations;
pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod maps;
pub mod models;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;

use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

/// Punto de entrada: panic hook, logging y render de la app
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));

    log::info!("🚀 BATS Energy ({})", CONFIG.environment);
    if CONFIG.maps_api_key().is_none() {
        log::warn!("⚠️ GOOGLE_MAPS_API_KEY no configurada, el mapa no se cargará");
    }

    yew::Renderer::<App>::new().render();
}
