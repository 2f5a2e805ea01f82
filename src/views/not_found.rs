use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();
    use_effect_with((), move |_| {
        let path = location.map(|l| l.path().to_string()).unwrap_or_default();
        log::warn!("⚠️ 404: ruta inexistente {}", path);
        || ()
    });

    html! {
        <div class="min-h-screen flex items-center justify-center bg-black text-white">
            <div class="text-center">
                <h1 class="text-4xl font-bold mb-4">{"404"}</h1>
                <p class="text-xl text-blue-300 mb-4">{"Oops! Página não encontrada"}</p>
                <Link<Route> to={Route::Landing} classes="text-yellow-400 hover:text-yellow-300 underline">
                    {"Voltar para o início"}
                </Link<Route>>
            </div>
        </div>
    }
}
