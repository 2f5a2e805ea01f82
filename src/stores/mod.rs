pub mod partner_store;

pub use partner_store::{PartnerError, PartnerStore};
