// ============================================================================
// APP - Router y contexto compartido
// ============================================================================
// El ScriptLoader de Google Maps se crea una vez aquí y se inyecta por
// contexto: todas las vistas comparten el mismo estado de carga.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::NavBar;
use crate::maps::web::{web_script_loader, WebScriptLoader};
use crate::views::{AdminPage, LandingPage, NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <LandingPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let loader = use_memo((), |_| web_script_loader());

    html! {
        <ContextProvider<WebScriptLoader> context={(*loader).clone()}>
            <BrowserRouter>
                <NavBar />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<WebScriptLoader>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve_from_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Landing));
        assert_eq!(Route::recognize("/admin"), Some(Route::Admin));
        assert_eq!(Route::recognize("/qualquer/coisa"), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Landing.to_path(), "/");
        assert_eq!(Route::Admin.to_path(), "/admin");
    }
}
