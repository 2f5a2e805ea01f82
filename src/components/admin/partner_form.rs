// ============================================================================
// PARTNER FORM - Alta/edición de parceiro en el panel admin
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, Url};
use yew::prelude::*;

use crate::viewmodels::{FormField, PartnerFormViewModel};

#[derive(Properties, PartialEq)]
pub struct PartnerFormProps {
    pub form: PartnerFormViewModel,
    pub on_change: Callback<(FormField, String)>,
    pub on_featured: Callback<bool>,
    pub on_logo: Callback<Option<String>>,
    pub on_cancel: Callback<()>,
    pub on_save: Callback<()>,
}

fn input_value(e: &Event) -> Option<HtmlInputElement> {
    e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
}

/// Object URL del primer fichero elegido (solo vive en esta página)
fn selected_logo_url(input: &HtmlInputElement) -> Option<String> {
    let file = input.files()?.get(0)?;
    match Url::create_object_url_with_blob(&file) {
        Ok(url) => Some(url),
        Err(e) => {
            log::error!("❌ No se pudo leer la imagen: {:?}", e);
            None
        }
    }
}

#[function_component(PartnerForm)]
pub fn partner_form(props: &PartnerFormProps) -> Html {
    let file_input = use_node_ref();
    let form = &props.form;

    let field = |field: FormField, id: &'static str, label: &'static str, placeholder: &'static str, value: &str, numeric: bool| {
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            if let Some(input) = input_value(&e) {
                on_change.emit((field, input.value()));
            }
        });
        html! {
            <div class="space-y-2">
                <label for={id} class="block text-sm">{label}</label>
                <input
                    {id}
                    name={id}
                    type={if numeric { "number" } else { "text" }}
                    step={numeric.then_some("0.0001")}
                    value={value.to_string()}
                    {oninput}
                    {placeholder}
                    class="w-full rounded-md px-3 py-2 bg-blue-950/50 border border-blue-700 text-white placeholder:text-blue-500"
                />
            </div>
        }
    };

    let pick_logo = {
        let file_input = file_input.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file = {
        let on_logo = props.on_logo.clone();
        Callback::from(move |e: Event| {
            if let Some(url) = input_value(&e).as_ref().and_then(selected_logo_url) {
                on_logo.emit(Some(url));
            }
        })
    };

    let on_featured = {
        let on_featured = props.on_featured.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = input_value(&e) {
                on_featured.emit(input.checked());
            }
        })
    };

    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());
    let on_save = props.on_save.reform(|_: MouseEvent| ());

    html! {
        <div class="mb-8 rounded-xl bg-blue-900/50 border border-blue-700 p-6">
            <div class="mb-4">
                <h2 class="text-2xl font-semibold">{form.title()}</h2>
                <p class="text-blue-300">{form.description()}</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                { field(FormField::Name, "name", "Nome do Parceiro", "Ex: Posto São João", &form.name, false) }
                { field(FormField::Address, "address", "Endereço", "Ex: Av. Paulista, 1000, São Paulo", &form.address, false) }
                { field(FormField::Longitude, "longitude", "Longitude", "Ex: -46.6546", &form.longitude, true) }
                { field(FormField::Latitude, "latitude", "Latitude", "Ex: -23.5646", &form.latitude, true) }

                <div class="space-y-2">
                    <label for="logo" class="block text-sm">{"Logo (opcional)"}</label>
                    <button type="button" onclick={pick_logo} class="w-full rounded-md py-2 border border-blue-700 text-blue-300">
                        {"Selecionar Imagem"}
                    </button>
                    <input ref={file_input} id="logo" name="logo" type="file" accept="image/*" onchange={on_file} class="hidden" />
                    if let Some(logo) = &form.logo {
                        <div class="mt-2 p-2 bg-blue-950/80 rounded border border-blue-800 h-20 flex items-center justify-center">
                            <img src={logo.clone()} alt="Preview" class="max-h-full max-w-full object-contain" />
                        </div>
                    }
                </div>

                <div class="flex items-center space-x-2">
                    <input
                        id="featured"
                        name="featured"
                        type="checkbox"
                        checked={form.featured}
                        onchange={on_featured}
                        class="h-4 w-4 rounded border-blue-700 text-yellow-500"
                    />
                    <label for="featured" class="text-sm font-medium">{"Exibir como Destaque"}</label>
                </div>
            </div>

            <div class="flex justify-between mt-6">
                <button onclick={on_cancel} class="rounded-md px-4 py-2 border border-red-800 text-red-400 hover:bg-red-950">
                    {"Cancelar"}
                </button>
                <button onclick={on_save} class="rounded-md px-4 py-2 bg-green-600 hover:bg-green-700">
                    {"Salvar"}
                </button>
            </div>
        </div>
    }
}
