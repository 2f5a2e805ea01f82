// ============================================================================
// ADMIN PAGE - Panel de gestión de parceiros
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::admin::{AdminPartnerCard, ConfirmDialog, PartnerForm};
use crate::hooks::use_partners;

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let partners = use_partners();
    let form = (*partners.form).clone();
    let open_new = partners.open_new.reform(|_: MouseEvent| ());

    html! {
        <div class="min-h-screen bg-gradient-to-br from-blue-950 to-black text-white p-4 md:p-8">
            <div class="max-w-7xl mx-auto">
                <header class="flex flex-col md:flex-row justify-between items-center mb-8 gap-4">
                    <div>
                        <h1 class="text-3xl font-bold">{"Painel Admin - BATS Energy"}</h1>
                        <p class="text-blue-300">{"Gerencie os parceiros e pontos de venda"}</p>
                    </div>
                    <div class="flex gap-2">
                        <Link<Route> to={Route::Landing} classes="rounded-md px-4 py-2 border border-blue-500 text-blue-300 hover:bg-blue-900">
                            {"Ver Site"}
                        </Link<Route>>
                        <button onclick={open_new} class="rounded-md px-4 py-2 bg-yellow-500 hover:bg-yellow-600 text-black font-semibold">
                            {"+ Adicionar Parceiro"}
                        </button>
                    </div>
                </header>

                if form.visible {
                    <PartnerForm
                        {form}
                        on_change={partners.change.clone()}
                        on_featured={partners.set_featured.clone()}
                        on_logo={partners.set_logo.clone()}
                        on_cancel={partners.cancel.clone()}
                        on_save={partners.save.clone()}
                    />
                }

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                    { for partners.store.partners().iter().map(|partner| html! {
                        <AdminPartnerCard
                            key={partner.id.clone()}
                            partner={partner.clone()}
                            on_edit={partners.open_edit.clone()}
                            on_delete={partners.request_delete.clone()}
                        />
                    }) }
                </div>
            </div>

            if let Some(partner) = &*partners.pending_delete {
                <ConfirmDialog
                    partner_name={partner.name.clone()}
                    on_confirm={partners.confirm_delete.clone()}
                    on_cancel={partners.cancel_delete.clone()}
                />
            }
        </div>
    }
}
