//! UI components for the portfolio shell.

mod contact_form;
mod footer;
mod hero;
mod lightbox;
mod nav_header;
mod portfolio;
mod slideshow;
mod spotlight;

pub use contact_form::ContactForm;
pub use footer::Footer;
pub use hero::Hero;
pub use lightbox::Lightbox;
pub use nav_header::NavHeader;
pub use portfolio::PortfolioSection;
pub use slideshow::Slideshow;
pub use spotlight::SpotlightSection;
