//! Quiz play page.

use leptos::prelude::*;

#[component]
pub fn PlayPage() -> impl IntoView {
    view! {
        <div class="quiz-play-holder">
            <h2>"Choose Category"</h2>
        </div>
    }
}
