// ============================================================================
// USE MAP HOOK - Mapa de parceiros de la landing
// ============================================================================
// Hook nativo de Yew - El ciclo de vida del mapa vive en MapLifecycle; el
// efecto lo monta y su cleanup lo desmonta.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::maps::web::{web_script_loader, GoogleMapsSdk, WebMapLifecycle, WebScriptLoader};
use crate::maps::{MapLifecycle, MapViewConfig};
use crate::models::Partner;

/// Handle del hook
#[derive(Clone)]
pub struct UseMapHandle {
    /// Mapa construido: se oculta el placeholder "Carregando mapa..."
    pub map_loaded: bool,
    pub active_partner: Option<String>,
    pub container_id: String,
    /// "Ver no mapa"
    pub focus_partner: Callback<String>,
}

#[hook]
pub fn use_map(partners: Vec<Partner>) -> UseMapHandle {
    // Estados separados: los closures del lifecycle no leen el valor actual
    let map_loaded = use_state(|| false);
    let active_partner = use_state(|| None::<String>);
    let loader = use_context::<WebScriptLoader>();
    let lifecycle: Rc<RefCell<Option<WebMapLifecycle>>> = use_mut_ref(|| None);
    let config = MapViewConfig::from(&CONFIG.map_config);
    let container_id = config.element_id.clone();

    {
        let map_loaded = map_loaded.setter();
        let active_partner = active_partner.setter();
        let lifecycle = lifecycle.clone();
        use_effect_with((), move |_| {
            let loader = loader.unwrap_or_else(|| {
                log::warn!("⚠️ Sin ScriptLoader en el contexto, creando uno local");
                web_script_loader()
            });
            let map = MapLifecycle::new(
                GoogleMapsSdk,
                loader,
                config,
                partners,
                WebMapLifecycle::callback_name_now(),
            );

            map.set_on_ready(move || map_loaded.set(true));
            map.set_on_select(move |id| {
                log::debug!("📍 Parceiro ativo: {}", id);
                active_partner.set(Some(id));
            });

            *lifecycle.borrow_mut() = Some(map.clone());
            map.mount();

            move || {
                lifecycle.borrow_mut().take();
                map.unmount();
            }
        });
    }

    let focus_partner = {
        let active_partner = active_partner.setter();
        Callback::from(move |id: String| {
            let map = lifecycle.borrow().clone();
            match map {
                Some(map) => map.focus_partner(&id),
                None => active_partner.set(Some(id)),
            }
        })
    };

    UseMapHandle {
        map_loaded: *map_loaded,
        active_partner: (*active_partner).clone(),
        container_id,
        focus_partner,
    }
}
