pub mod partner_form_viewmodel;

pub use partner_form_viewmodel::{parse_coordinate, FormField, PartnerFormViewModel};
