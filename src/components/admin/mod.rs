// Componentes del panel admin

pub mod confirm_dialog;
pub mod partner_card;
pub mod partner_form;

pub use confirm_dialog::ConfirmDialog;
pub use partner_card::AdminPartnerCard;
pub use partner_form::PartnerForm;
