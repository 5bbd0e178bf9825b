pub mod app;
pub mod nav;
pub mod home;
pub mod about;
pub mod faq;
pub mod contact;
pub mod not_found;

pub use app::{render_app, render_view};
pub use nav::{render_nav, render_route_link};
pub use home::render_home;
pub use about::render_about;
pub use faq::render_faq;
pub use contact::render_contact;
pub use not_found::render_not_found;
