pub mod location;
pub mod partner;
pub mod testimonial;

pub use location::{Coordinates, LatLng};
pub use partner::{Partner, PartnerDraft, admin_seed_partners, maps_url, seed_partners};
pub use testimonial::{Testimonial, TESTIMONIALS};
