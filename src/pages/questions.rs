//! Question list page.

use leptos::prelude::*;

/// Default view. Question browsing is provided by the questions API client.
#[component]
pub fn QuestionsPage() -> impl IntoView {
    view! {
        <div class="questions-page">
            <h2>"Questions"</h2>
        </div>
    }
}
