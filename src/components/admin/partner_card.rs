use yew::prelude::*;

use crate::models::Partner;

#[derive(Properties, PartialEq)]
pub struct AdminPartnerCardProps {
    pub partner: Partner,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
}

/// "Coordenadas: lat, lng"
pub fn coordinates_label(partner: &Partner) -> String {
    format!(
        "Coordenadas: {}, {}",
        partner.coordinates.latitude, partner.coordinates.longitude
    )
}

#[function_component(AdminPartnerCard)]
pub fn admin_partner_card(props: &AdminPartnerCardProps) -> Html {
    let partner = &props.partner;
    let on_edit = {
        let id = partner.id.clone();
        props.on_edit.reform(move |_: MouseEvent| id.clone())
    };
    let on_delete = {
        let id = partner.id.clone();
        props.on_delete.reform(move |_: MouseEvent| id.clone())
    };

    html! {
        <div class={classes!(
            "rounded-xl", "bg-blue-900/30", "border", "border-blue-800/40", "hover:border-blue-600/60",
            "transition-all", "duration-300", "p-4",
            partner.featured.then_some("ring-2 ring-yellow-500/50"),
        )}>
            <div class="flex justify-between items-start pb-2">
                <div>
                    <h3 class="text-xl font-semibold">{&partner.name}</h3>
                    <p class="text-blue-300 flex items-center gap-1">{"📍 "}{&partner.address}</p>
                </div>
                if partner.featured {
                    <span class="bg-yellow-500 text-xs font-bold text-black px-2 py-1 rounded-full">{"Destaque"}</span>
                }
            </div>
            <div class="py-2">
                if let Some(logo) = &partner.logo {
                    <div class="h-16 mb-2 bg-blue-950/50 rounded flex items-center justify-center p-2">
                        <img src={logo.clone()} alt={format!("{} logo", partner.name)} class="max-h-full object-contain" />
                    </div>
                }
                <p class="text-xs text-blue-200">{coordinates_label(partner)}</p>
            </div>
            <div class="flex justify-between pt-2">
                <button onclick={on_edit} class="rounded-md px-3 py-1 text-blue-400 hover:text-blue-300 hover:bg-blue-800/50">
                    {"✏️ Editar"}
                </button>
                <button onclick={on_delete} class="rounded-md px-3 py-1 text-red-400 hover:text-red-300 hover:bg-red-900/30">
                    {"Excluir"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_partners;

    #[test]
    fn coordinates_show_latitude_first() {
        let partner = &seed_partners()[0];
        assert_eq!(coordinates_label(partner), "Coordenadas: -23.5646, -46.6546");
    }
}
