// ============================================================================
// PARTNERS SECTION - "Onde encontrar": mapa de Google y tarjetas
// ============================================================================
// El div del mapa queda vacío para Google Maps; el placeholder va encima
// como hermano y desaparece cuando el mapa está listo.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::animations::tween::partners_tweens;
use crate::app::Route;
use crate::hooks::{use_map, use_scroll_animations};
use crate::models::{seed_partners, Partner};

#[derive(Properties, PartialEq)]
pub struct PartnerCardProps {
    pub partner: Partner,
    pub active: bool,
    pub on_view: Callback<String>,
}

#[function_component(PartnerCard)]
pub fn partner_card(props: &PartnerCardProps) -> Html {
    let partner = &props.partner;
    let onclick = {
        let on_view = props.on_view.clone();
        let id = partner.id.clone();
        Callback::from(move |_: MouseEvent| on_view.emit(id.clone()))
    };

    html! {
        <div class={classes!(
            "partner-card", "bg-blue-900/30", "border", "border-blue-800/50", "rounded-xl", "overflow-hidden",
            "transition-all", "duration-300", "hover:border-yellow-500/50",
            partner.featured.then_some("col-span-1 sm:col-span-2"),
            props.active.then_some("ring-2 ring-yellow-400"),
        )}>
            <div class="p-4">
                if let Some(logo) = &partner.logo {
                    <div class="mb-4 bg-blue-950/50 rounded-lg overflow-hidden aspect-[3/1]">
                        <img src={logo.clone()} alt={format!("{} logo", partner.name)} class="object-contain w-full h-full p-2" />
                    </div>
                }
                <h3 class="text-xl font-bold text-white mb-2">{&partner.name}</h3>
                <p class="text-blue-200 text-sm">{&partner.address}</p>
            </div>
            <div class="p-4 pt-0">
                <button
                    class="w-full border border-blue-500 text-blue-300 hover:bg-blue-800 rounded-lg py-2"
                    {onclick}
                >
                    {"📍 Ver no mapa"}
                </button>
            </div>
        </div>
    }
}

#[function_component(Partners)]
pub fn partners() -> Html {
    let partners = use_memo((), |_| seed_partners());
    let section_ref = use_node_ref();
    let map = use_map((*partners).clone());
    use_scroll_animations(section_ref.clone(), partners_tweens);

    html! {
        <section ref={section_ref} class="py-20 relative bg-gradient-to-b from-black to-blue-950 overflow-hidden">
            <svg class="absolute inset-0 w-full h-full z-0 opacity-10" viewBox="0 0 1440 800" preserveAspectRatio="none">
                <path d="M0,150 Q720,350 1440,150 L1440,650 Q720,450 0,650 Z" stroke="#3b82f6" stroke-width="2" fill="none" stroke-dasharray="10,15" class="animate-pulse" />
                <path d="M0,200 Q720,50 1440,200 L1440,600 Q720,750 0,600 Z" stroke="#facc15" stroke-width="1" fill="none" stroke-dasharray="5,10" class="animate-pulse" />
            </svg>

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center mb-16">
                    <h2 class="partners-title text-3xl md:text-5xl font-bold text-white mb-4">{"ONDE ENCONTRAR"}</h2>
                    <p class="text-blue-300 text-lg max-w-3xl mx-auto">
                        {"Descubra onde encontrar o energético BATS perto de você"}
                    </p>
                    <div class="mt-4">
                        <Link<Route> to={Route::Admin} classes="text-yellow-400 hover:text-yellow-300 underline text-sm">
                            {"Acesso Administrativo"}
                        </Link<Route>>
                    </div>
                </div>

                <div class="map-frame mb-16 rounded-2xl overflow-hidden h-[400px] bg-blue-950 border border-blue-800/30 relative">
                    <div id={map.container_id.clone()} class="w-full h-full bg-blue-950"></div>
                    if !map.map_loaded {
                        <div class="absolute inset-0 flex items-center justify-center pointer-events-none">
                            <p class="text-blue-300">{"Carregando mapa..."}</p>
                        </div>
                    }
                </div>

                <div class="partners-list grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    { for partners.iter().map(|partner| html! {
                        <PartnerCard
                            key={partner.id.clone()}
                            partner={partner.clone()}
                            active={map.active_partner.as_deref() == Some(partner.id.as_str())}
                            on_view={map.focus_partner.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
