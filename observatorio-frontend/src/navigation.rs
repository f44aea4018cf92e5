//! Full page navigation of the current browsing context.
//!
//! [`Redirect`] holds the lifecycle of a one shot redirect: it starts
//! [`State::Mounted`] and moves to [`State::Navigated`] the first time
//! [`Redirect::mounted`] is called. Later calls do nothing, so the host
//! is asked to navigate exactly once whatever the number of re-runs.

use observatorio_api::constant;

use crate::Error;

pub trait Navigate {
    fn navigate(&self, target: &str) -> Result<(), Error>;
}

/// Navigates through `window.location.href`, replacing the current page.
#[derive(Debug, Clone, Copy, Default)]
pub struct Browser;

impl Navigate for Browser {
    fn navigate(&self, target: &str) -> Result<(), Error> {
        leptos::prelude::window().location().set_href(target).map_err(|reason| {
            Error::Navigation { target: target.to_owned(), reason: format!("{reason:?}") }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Mounted,
    Navigated,
}

#[derive(Debug)]
pub struct Redirect<N> {
    navigator: N,
    target: &'static str,
    state: State,
}

impl<N: Navigate> Redirect<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator, target: constant::MAP_PAGE, state: State::Mounted }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn mounted(&mut self) {
        if self.state == State::Navigated {
            return;
        }
        self.state = State::Navigated;

        leptos::logging::log!("redirecting to {}", self.target);
        // A failed navigation leaves the placeholder on screen, nothing is retried.
        if let Err(error) = self.navigator.navigate(self.target) {
            leptos::logging::error!("{error}");
        }
    }
}
