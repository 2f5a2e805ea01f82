// ============================================================================
// USE PARTNERS HOOK - CRUD del panel admin
// ============================================================================
// Hook nativo de Yew - Delega validación y mutaciones al ViewModel/Store
// ============================================================================

use yew::prelude::*;

use crate::models::{admin_seed_partners, Partner};
use crate::stores::PartnerStore;
use crate::viewmodels::{FormField, PartnerFormViewModel};

/// Handle del hook
#[derive(Clone)]
pub struct UsePartnersHandle {
    pub store: UseStateHandle<PartnerStore>,
    pub form: UseStateHandle<PartnerFormViewModel>,
    /// Parceiro pendiente de confirmar su borrado
    pub pending_delete: UseStateHandle<Option<Partner>>,
    pub open_new: Callback<()>,
    pub open_edit: Callback<String>,
    pub cancel: Callback<()>,
    pub change: Callback<(FormField, String)>,
    pub set_featured: Callback<bool>,
    pub set_logo: Callback<Option<String>>,
    pub save: Callback<()>,
    pub request_delete: Callback<String>,
    pub confirm_delete: Callback<()>,
    pub cancel_delete: Callback<()>,
}

/// Alerta bloqueante del navegador
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("❌ No se pudo mostrar la alerta: {:?}", e);
        }
    }
}

#[hook]
pub fn use_partners() -> UsePartnersHandle {
    let store = use_state(|| PartnerStore::new(admin_seed_partners()));
    let form = use_state(PartnerFormViewModel::new);
    let pending_delete = use_state(|| None::<Partner>);

    let open_new = {
        let form = form.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.open_new();
            form.set(next);
        })
    };

    let open_edit = {
        let form = form.clone();
        let store = store.clone();
        Callback::from(move |id: String| {
            let Some(partner) = store.get(&id) else {
                log::warn!("⚠️ Parceiro {} não encontrado para edição", id);
                return;
            };
            let mut next = (*form).clone();
            next.open_edit(partner);
            form.set(next);
        })
    };

    let cancel = {
        let form = form.clone();
        Callback::from(move |_| form.set(PartnerFormViewModel::new()))
    };

    let change = {
        let form = form.clone();
        Callback::from(move |(field, value): (FormField, String)| {
            let mut next = (*form).clone();
            next.apply(field, value);
            form.set(next);
        })
    };

    let set_featured = {
        let form = form.clone();
        Callback::from(move |featured: bool| {
            let mut next = (*form).clone();
            next.set_featured(featured);
            form.set(next);
        })
    };

    let set_logo = {
        let form = form.clone();
        Callback::from(move |logo: Option<String>| {
            let mut next = (*form).clone();
            next.set_logo(logo);
            form.set(next);
        })
    };

    let save = {
        let form = form.clone();
        let store = store.clone();
        Callback::from(move |_| {
            let mut next_form = (*form).clone();
            let mut next_store = (*store).clone();
            match next_form.save(&mut next_store) {
                Ok(_) => {
                    store.set(next_store);
                    form.set(next_form);
                }
                Err(e) => {
                    log::warn!("⚠️ Parceiro não salvo: {}", e);
                    alert(&e.to_string());
                }
            }
        })
    };

    let request_delete = {
        let store = store.clone();
        let pending_delete = pending_delete.clone();
        Callback::from(move |id: String| {
            pending_delete.set(store.get(&id).cloned());
        })
    };

    let confirm_delete = {
        let store = store.clone();
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| {
            let Some(partner) = (*pending_delete).clone() else {
                return;
            };
            let mut next = (*store).clone();
            match next.delete(&partner.id) {
                Ok(_) => store.set(next),
                Err(e) => log::error!("❌ {}", e),
            }
            pending_delete.set(None);
        })
    };

    let cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    UsePartnersHandle {
        store,
        form,
        pending_delete,
        open_new,
        open_edit,
        cancel,
        change,
        set_featured,
        set_logo,
        save,
        request_delete,
        confirm_delete,
        cancel_delete,
    }
}
