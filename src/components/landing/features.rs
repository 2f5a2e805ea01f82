use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::animations::{self, tween::{feature_icon_hover, features_tweens}};
use crate::hooks::use_scroll_animations;

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    accent: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "⚡",
        title: "Alta Performance",
        text: "Formulado com vitaminas B, taurina e compostos energéticos que aumentam seu desempenho físico e mental instantaneamente.",
        accent: "blue",
    },
    Feature {
        icon: "🚀",
        title: "Estilo de Vida Ativo",
        text: "Perfeito para quem busca energia para treinos, trabalho intenso, estudos ou noites longas. A energia que acompanha seu ritmo.",
        accent: "yellow",
    },
    Feature {
        icon: "📈",
        title: "Design Inovador",
        text: "Embalagem futurista que reflete nossa identidade tecnológica e a potência do produto. Destaque-se com BATS Energy.",
        accent: "blue",
    },
];

/// Tween de hover sobre el icono de la tarjeta que disparó el evento
///
/// Yew delega los eventos, así que la tarjeta se busca desde `target`.
fn tilt_icon(event: MouseEvent, active: bool) {
    let icon = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(".feature-card").ok().flatten())
        .and_then(|card| card.query_selector(".feature-icon").ok().flatten());
    if let Some(icon) = icon {
        animations::animate(&icon, &feature_icon_hover(active));
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    let section_ref = use_node_ref();
    use_scroll_animations(section_ref.clone(), features_tweens);

    html! {
        <section ref={section_ref} class="py-20 relative bg-gradient-to-b from-black to-blue-950 overflow-hidden">
            <div class="features-bg-pulse absolute left-1/4 top-1/2 w-96 h-96 rounded-full bg-yellow-500 opacity-10" style="filter: blur(100px);"></div>
            <div class="features-bg-pulse absolute right-1/4 top-1/3 w-80 h-80 rounded-full bg-blue-500 opacity-10" style="filter: blur(80px);"></div>

            <div class="absolute inset-0 overflow-hidden opacity-10">
                <div class="absolute h-0.5 bg-blue-400 top-1/4 left-0 right-0"></div>
                <div class="absolute h-0.5 bg-yellow-400 top-2/3 left-0 right-0"></div>
                <div class="absolute w-0.5 bg-blue-400 left-1/4 top-0 bottom-0"></div>
                <div class="absolute w-0.5 bg-yellow-400 left-3/4 top-0 bottom-0"></div>
            </div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-5xl font-bold text-white mb-4">{"DIFERENCIAIS"}</h2>
                    <p class="text-blue-300 text-lg max-w-3xl mx-auto">
                        {"Nossa fórmula integra ciência de ponta e ingredientes premium para maximizar seu potencial"}
                    </p>
                </div>

                <div class="features-grid grid grid-cols-1 md:grid-cols-3 gap-8">
                    { for FEATURES.iter().map(|feature| html! {
                        <div
                            class={format!(
                                "feature-card bg-gradient-to-br from-{0}-900/50 to-blue-950/90 p-8 rounded-2xl border border-{0}-800/30 shadow-lg transition-all duration-300 group",
                                feature.accent
                            )}
                            onmouseenter={Callback::from(|e: MouseEvent| tilt_icon(e, true))}
                            onmouseleave={Callback::from(|e: MouseEvent| tilt_icon(e, false))}
                        >
                            <div class={format!(
                                "feature-icon w-16 h-16 rounded-full bg-{}-500/20 flex items-center justify-center mb-6 mx-auto text-3xl",
                                feature.accent
                            )}>
                                {feature.icon}
                            </div>
                            <h3 class="text-2xl font-bold text-white text-center mb-4">{feature.title}</h3>
                            <p class="text-blue-200 text-center">{feature.text}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
