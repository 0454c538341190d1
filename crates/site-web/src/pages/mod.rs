//! Page Components

mod about;
mod contact;
mod home;
mod plans;
mod services;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use plans::PlansPage;
pub use services::ServicesPage;
