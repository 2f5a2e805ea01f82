// Páginas de la app (una por ruta)

pub mod admin_page;
pub mod landing_page;
pub mod not_found;

pub use admin_page::AdminPage;
pub use landing_page::LandingPage;
pub use not_found::NotFound;
