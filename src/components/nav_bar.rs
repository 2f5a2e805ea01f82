use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Navegación fija arriba a la derecha, presente en todas las páginas
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    html! {
        <nav class="fixed top-4 right-4 z-40 flex gap-2 text-sm">
            <Link<Route> to={Route::Landing} classes="rounded-full px-3 py-1 bg-black/60 text-blue-300 hover:text-white">
                {"Início"}
            </Link<Route>>
            <Link<Route> to={Route::Admin} classes="rounded-full px-3 py-1 bg-black/60 text-yellow-400 hover:text-yellow-300">
                {"Admin"}
            </Link<Route>>
        </nav>
    }
}
