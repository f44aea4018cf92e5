use leptos::html;
use leptos::prelude::*;

use crate::navigation::{Browser, Navigate, Redirect};

pub const PLACEHOLDER: &str = "Redirecting...";

/// Sends the browser to the map page once mounted.
pub fn RedirectView() -> impl IntoView {
    RedirectTo(Browser)
}

pub fn RedirectTo<N: Navigate + 'static>(navigator: N) -> impl IntoView {
    let mut redirect = Redirect::new(navigator);
    // Effects only run after the view is attached, never while it is being built.
    Effect::new(move |_| redirect.mounted());

    html::div().child(html::p().child(PLACEHOLDER))
}
