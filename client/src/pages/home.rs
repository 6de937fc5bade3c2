//! Landing page hosting the floating coach widget.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <h1 class="home__title">"Job-Navigator"</h1>
            <p class="home__lead">"자소서와 면접 준비를 AI 코치와 함께하세요."</p>
        </main>
        <ChatWidget/>
    }
}
