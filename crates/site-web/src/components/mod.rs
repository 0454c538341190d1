//! UI Components

mod cards;
mod footer;
mod nav;
mod scroll;

pub use cards::{AboutCard, PlanCard, ServiceCard};
pub use footer::Footer;
pub use nav::Navbar;
pub use scroll::ScrollToTop;
