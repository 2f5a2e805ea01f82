pub mod use_map;
pub mod use_partners;
pub mod use_scroll_animations;

pub use use_map::{use_map, UseMapHandle};
pub use use_partners::{use_partners, UsePartnersHandle};
pub use use_scroll_animations::use_scroll_animations;
