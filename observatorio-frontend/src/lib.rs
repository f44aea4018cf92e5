mod components;
mod error;
pub mod navigation;

pub use components::{RedirectTo, RedirectView, PLACEHOLDER};
pub use error::Error;
