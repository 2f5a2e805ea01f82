// ============================================================================
// HERO SECTION - Título letra a letra, lata con pulso y partículas
// ============================================================================

use yew::prelude::*;

use crate::animations::tween::hero_tweens;
use crate::hooks::use_scroll_animations;

const HEADLINE: &str = "⚡ Beba a Energia que Move o Futuro";
const PARTICLE_COUNT: usize = 20;

/// Posición aleatoria (top%, left%) de cada partícula, fija durante la vida del componente
fn particle_positions() -> Vec<(f64, f64)> {
    (0..PARTICLE_COUNT)
        .map(|_| (js_sys::Math::random() * 100.0, js_sys::Math::random() * 100.0))
        .collect()
}

/// Letras del título; los espacios pasan a NBSP para que el span no colapse
pub fn headline_letters(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| if c == ' ' { '\u{00A0}'.to_string() } else { c.to_string() })
        .collect()
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let section_ref = use_node_ref();
    let particles = use_memo((), |_| particle_positions());
    use_scroll_animations(section_ref.clone(), hero_tweens);

    html! {
        <section
            ref={section_ref}
            class="min-h-screen relative flex items-center justify-center overflow-hidden py-20 bg-gradient-to-br from-gray-900 via-blue-900 to-black"
        >
            { for particles.iter().map(|(top, left)| html! {
                <div
                    class="energy-particle absolute w-2 h-2 rounded-full bg-yellow-400 opacity-70"
                    style={format!(
                        "top: {:.2}%; left: {:.2}%; filter: blur(2px); box-shadow: 0 0 10px 2px rgba(255, 230, 0, 0.8);",
                        top, left
                    )}
                />
            }) }

            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between relative z-10">
                <div class="md:w-1/2 text-center md:text-left mb-10 md:mb-0">
                    <h2 class="text-blue-400 text-xl md:text-2xl font-bold mb-4 tracking-wider">{"ENERGIA INOVADORA"}</h2>
                    <h1 class="text-4xl md:text-6xl font-extrabold mb-6 text-white" aria-label={HEADLINE}>
                        { for headline_letters(HEADLINE).into_iter().map(|letter| html! {
                            <span class="hero-letter" style="display: inline-block; opacity: 0;" aria-hidden="true">{letter}</span>
                        }) }
                    </h1>
                    <p class="text-blue-200 text-lg md:text-xl mb-8">
                        {"Desperte seu potencial máximo com o energético que revoluciona seu desempenho e estilo."}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center md:justify-start">
                        <button class="bg-yellow-500 hover:bg-yellow-400 text-black font-bold px-8 py-4 rounded-full text-lg transition-all duration-300 transform hover:scale-105">
                            {"COMPRE AGORA"}
                        </button>
                        <button class="border border-blue-500 text-blue-400 hover:bg-blue-900/30 font-bold px-8 py-4 rounded-full text-lg">
                            {"SAIBA MAIS"}
                        </button>
                    </div>
                </div>

                <div class="hero-can md:w-1/2 flex justify-center items-center relative">
                    <div class="relative w-64 h-80 md:w-80 md:h-96">
                        <div class="absolute inset-0 bg-blue-500 rounded-full opacity-20 animate-pulse" style="filter: blur(40px);"></div>
                        <div class="h-full w-full flex items-center justify-center">
                            <div class="bg-gray-800 w-40 h-72 md:w-48 md:h-80 rounded-3xl relative overflow-hidden shadow-lg">
                                <div class="absolute inset-0 bg-gradient-to-b from-blue-600 via-blue-700 to-blue-900"></div>
                                <div class="absolute inset-0 flex items-center justify-center">
                                    <div class="text-center">
                                        <div class="text-yellow-500 font-bold text-5xl">{"BATS"}</div>
                                        <div class="text-white text-lg">{"ENERGY"}</div>
                                        <div class="mt-4 text-xs text-blue-200">{"ULTRA POTÊNCIA"}</div>
                                    </div>
                                </div>
                                <div class="absolute bottom-0 w-full h-1/4 bg-gradient-to-t from-black/40 to-transparent"></div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-0 left-0 right-0 h-20 bg-gradient-to-br from-blue-900 to-black transform -skew-y-3 translate-y-10"></div>
        </section>
    }
}
