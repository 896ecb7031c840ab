//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Routing deals only in [`ViewId`] values; [`render`] is the single place
//! that turns one into a component.

pub mod add_question;
pub mod play;
pub mod questions;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use self::{add_question::AddQuestionPage, play::PlayPage, questions::QuestionsPage};

/// Identifier of a renderable page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    /// Paginated question list, the default view.
    Questions,
    /// Question submission form.
    AddQuestion,
    /// Quiz play view.
    Play,
}

/// Render the page for `view`.
pub fn render(view: ViewId) -> AnyView {
    match view {
        ViewId::Questions => view! { <QuestionsPage/> }.into_any(),
        ViewId::AddQuestion => view! { <AddQuestionPage/> }.into_any(),
        ViewId::Play => view! { <PlayPage/> }.into_any(),
    }
}
