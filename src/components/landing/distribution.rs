use yew::prelude::*;

use crate::animations::tween::distribution_tweens;
use crate::hooks::use_scroll_animations;

#[derive(Properties, PartialEq)]
struct DistributionCardProps {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    action: &'static str,
    card_class: &'static str,
    button_class: &'static str,
}

#[function_component(DistributionCard)]
fn distribution_card(props: &DistributionCardProps) -> Html {
    html! {
        <div class={classes!("p-8", "rounded-2xl", "border", "flex", "flex-col", "items-center", "text-center", "transition-all", "duration-300", props.card_class)}>
            <div class="text-5xl mb-4">{props.icon}</div>
            <h3 class="text-xl font-bold text-white mb-3">{props.title}</h3>
            <p class="text-blue-200 mb-6">{props.text}</p>
            <button class={classes!("dist-button", "w-full", "py-3", "rounded-lg", "font-bold", props.button_class)}>
                {props.action}
            </button>
        </div>
    }
}

#[function_component(Distribution)]
pub fn distribution() -> Html {
    let section_ref = use_node_ref();
    use_scroll_animations(section_ref.clone(), distribution_tweens);

    html! {
        <section ref={section_ref} class="py-20 relative bg-gradient-to-b from-blue-950 to-black overflow-hidden">
            <svg class="absolute inset-0 w-full h-full z-0 opacity-20" viewBox="0 0 1440 800" preserveAspectRatio="none">
                <path
                    class="circuit-line"
                    d="M0,100 Q720,200 1440,100 L1440,700 Q720,600 0,700 Z"
                    stroke="url(#circuitGradient)"
                    stroke-width="2"
                    fill="none"
                    stroke-dasharray="5000"
                    stroke-dashoffset="5000"
                />
                <defs>
                    <linearGradient id="circuitGradient" x1="0%" y1="0%" x2="100%" y2="0%">
                        <stop offset="0%" stop-color="#3b82f6" />
                        <stop offset="50%" stop-color="#facc15" />
                        <stop offset="100%" stop-color="#3b82f6" />
                    </linearGradient>
                </defs>
            </svg>

            <div class="distribution-content container mx-auto px-4 relative z-10">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-5xl font-bold text-white mb-4">{"DISTRIBUIÇÃO"}</h2>
                    <p class="text-blue-300 text-lg max-w-3xl mx-auto">
                        {"Entre para o time BATS e faça parte da revolução energética"}
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    <DistributionCard
                        icon="🏪"
                        title="Quero Vender"
                        text="Torne-se um revendedor e ofereça BATS Energy aos seus clientes."
                        action="REVENDER"
                        card_class="bg-gradient-to-br from-blue-900/30 to-black border-blue-800/30 hover:border-blue-500/50"
                        button_class="bg-blue-600 hover:bg-blue-500 text-white"
                    />
                    <DistributionCard
                        icon="🚚"
                        title="Quero Distribuir"
                        text="Seja um distribuidor regional e amplie sua rede de negócios."
                        action="DISTRIBUIR"
                        card_class="bg-gradient-to-br from-yellow-900/30 to-black border-yellow-800/30 hover:border-yellow-500/50"
                        button_class="bg-yellow-600 hover:bg-yellow-500 text-black"
                    />
                    <DistributionCard
                        icon="📞"
                        title="Fale Conosco"
                        text="Tire dúvidas ou faça pedidos especiais para sua empresa."
                        action="CONTATO"
                        card_class="bg-gradient-to-br from-blue-900/30 to-black border-blue-800/30 hover:border-blue-500/50"
                        button_class="border border-blue-600 text-blue-400 hover:bg-blue-900/30"
                    />
                </div>
            </div>
        </section>
    }
}
