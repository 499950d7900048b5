pub mod contact;
pub mod health;
pub mod messages;
pub mod pages;
pub mod seo;

pub use contact::submit_contact;
pub use health::health;
pub use messages::get_messages;
pub use pages::page_context;
pub use seo::{robots, sitemap};
