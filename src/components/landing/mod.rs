// Secciones de la landing page

pub mod distribution;
pub mod features;
pub mod footer;
pub mod hero;
pub mod partners;
pub mod testimonials;

pub use distribution::Distribution;
pub use features::Features;
pub use footer::Footer;
pub use hero::HeroSection;
pub use partners::Partners;
pub use testimonials::Testimonials;
