//! Application header: title links, play link and the login/logout trigger.
//!
//! DESIGN
//! ======
//! Login calls `authenticate()` as soon as it is clicked. There is no
//! credential check behind it yet; a real one would run first and only call
//! `authenticate()` on success.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::sink::NavigationStrategy;
use crate::state::session::SessionState;

/// A header link target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const TITLE_LINK: NavLink = NavLink { label: "YNPN Do-Gooder Games", href: "/" };
pub const SUBTITLE_LINK: NavLink = NavLink { label: "Trivia", href: "/" };
pub const PLAY_LINK: NavLink = NavLink { label: "Let's Play", href: "/play" };

/// Session action offered by the header button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionAction {
    Login,
    Logout,
}

impl SessionAction {
    /// The action available from the current session state.
    #[must_use]
    pub fn for_session(session: &SessionState) -> Self {
        if session.is_authenticated() { Self::Logout } else { Self::Login }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Logout => "Logout",
        }
    }

    /// Apply the action to `session`.
    pub fn apply(self, session: &mut SessionState) {
        match self {
            Self::Login => session.authenticate(),
            Self::Logout => session.signout(),
        }
    }
}

#[component]
pub fn Header(strategy: NavigationStrategy) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let action = Memo::new(move |_| session.with(SessionAction::for_session));

    let on_click = move |_| {
        let current = action.get_untracked();
        session.update(|state| current.apply(state));
    };

    view! {
        <div class="App-header">
            <h1>{nav_link(TITLE_LINK, strategy)}</h1>
            <h2>{nav_link(SUBTITLE_LINK, strategy)}</h2>
            <button class="session-button" on:click=on_click>
                {move || action.get().label()}
            </button>
            <br/>
            <h2>{nav_link(PLAY_LINK, strategy)}</h2>
        </div>
    }
}

/// Router link for in-app navigation, plain external anchor for reloads.
fn nav_link(link: NavLink, strategy: NavigationStrategy) -> AnyView {
    if strategy.preserves_session() {
        view! { <A href=link.href>{link.label}</A> }.into_any()
    } else {
        view! { <a href=link.href rel="external">{link.label}</a> }.into_any()
    }
}
