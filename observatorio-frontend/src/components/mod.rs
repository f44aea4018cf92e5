#![allow(non_snake_case)]

mod redirect;

pub use redirect::{RedirectTo, RedirectView, PLACEHOLDER};
