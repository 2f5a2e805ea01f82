pub mod admin;
pub mod landing;
pub mod nav_bar;

pub use nav_bar::NavBar;
