// ============================================================================
// CONFIRM DIALOG - Confirmación de borrado de parceiro
// ============================================================================

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub partner_name: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

pub struct ConfirmDialog;

pub enum Msg {
    Confirm,
    Cancel,
}

pub fn confirm_message(partner_name: &str) -> String {
    format!(
        "Tem certeza que deseja excluir o parceiro {}? Esta ação não pode ser desfeita.",
        partner_name
    )
}

impl Component for ConfirmDialog {
    type Message = Msg;
    type Properties = ConfirmDialogProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Confirm => ctx.props().on_confirm.emit(()),
            Msg::Cancel => ctx.props().on_cancel.emit(()),
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="fixed inset-0 z-50 flex items-center justify-center" role="alertdialog" aria-modal="true">
                <div class="absolute inset-0 bg-black/70" onclick={ctx.link().callback(|_| Msg::Cancel)}></div>
                <div
                    class="relative bg-blue-950 border border-blue-800 rounded-xl p-6 max-w-md w-full mx-4"
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <h2 class="text-lg font-semibold mb-2">{"Confirmar exclusão"}</h2>
                    <p class="text-blue-300 mb-6">{confirm_message(&props.partner_name)}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            class="rounded-md px-4 py-2 bg-transparent border border-blue-700 text-blue-300 hover:bg-blue-900"
                            onclick={ctx.link().callback(|_| Msg::Cancel)}
                        >
                            {"Cancelar"}
                        </button>
                        <button
                            class="rounded-md px-4 py-2 bg-red-600 text-white hover:bg-red-700"
                            onclick={ctx.link().callback(|_| Msg::Confirm)}
                        >
                            {"Excluir"}
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_partner() {
        let message = confirm_message("Bar do Zé");
        assert!(message.contains("parceiro Bar do Zé?"));
        assert!(message.ends_with("não pode ser desfeita."));
    }
}
