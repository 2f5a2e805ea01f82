use chrono::Datelike;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::animations::tween::footer_tweens;
use crate::hooks::use_scroll_animations;

const QUICK_LINKS: [&str; 4] = ["Sobre Nós", "Nossa Fórmula", "Onde Comprar", "Contato"];
const SOCIAL_LINKS: [(&str, &str); 3] = [("Instagram", "📸"), ("Twitter", "🐦"), ("Facebook", "📘")];

fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn copyright(year: i32) -> String {
    format!("© {} BATS Energy. Todos os direitos reservados.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_ref = use_node_ref();
    use_scroll_animations(footer_ref.clone(), footer_tweens);
    let year = chrono::Local::now().year();

    html! {
        <footer ref={footer_ref} class="bg-black py-16 relative overflow-hidden">
            <div class="footer-glow absolute bottom-0 left-1/2 transform -translate-x-1/2 w-1/2 h-32 bg-blue-500 opacity-20 rounded-full" style="filter: blur(80px);"></div>
            <div class="absolute bottom-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-blue-500 to-transparent opacity-20"></div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-10">
                    <div>
                        <h2 class="text-2xl md:text-3xl font-bold text-white mb-4">{"BATS ENERGY"}</h2>
                        <p class="text-blue-300 mb-6">
                            {"O futuro da energia está aqui. Experimente e revolucione sua performance diária."}
                        </p>
                        <div class="flex space-x-4">
                            { for SOCIAL_LINKS.iter().map(|(name, icon)| html! {
                                <a href="#" aria-label={*name} class="social-icon w-10 h-10 rounded-full bg-blue-900/50 flex items-center justify-center transition-colors hover:bg-blue-800">
                                    {*icon}
                                </a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold text-white mb-4">{"Links Rápidos"}</h3>
                        <ul class="space-y-3 text-blue-300">
                            { for QUICK_LINKS.iter().map(|label| html! {
                                <li><a href="#" class="hover:text-blue-100 transition-colors">{*label}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold text-white mb-4">{"Fique por dentro"}</h3>
                        <p class="text-blue-300 mb-4">{"Receba novidades, promoções e conteúdos exclusivos."}</p>
                        <div class="flex">
                            <input
                                type="email"
                                placeholder="Seu e-mail"
                                class="flex-1 rounded-md px-3 py-2 bg-blue-900/20 border border-blue-800 text-blue-100 focus:border-blue-500"
                            />
                            <button type="submit" class="ml-2 px-4 rounded-md bg-blue-600 hover:bg-blue-500 text-white">{"➤"}</button>
                        </div>
                    </div>
                </div>

                <div class="flex flex-col md:flex-row justify-between items-center mt-16 pt-6 border-t border-blue-900/50">
                    <p class="text-blue-400 text-sm mb-4 md:mb-0">{copyright(year)}</p>
                    <button
                        onclick={Callback::from(|_| scroll_to_top())}
                        aria-label="Voltar ao topo"
                        class="w-10 h-10 rounded-full border border-blue-800 text-blue-400 hover:bg-blue-900/30"
                    >
                        {"↑"}
                    </button>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright(2026), "© 2026 BATS Energy. Todos os direitos reservados.");
    }
}
