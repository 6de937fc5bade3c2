//! Floating coach widget: action button, chat panel, and prompt input.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget owns one `ConversationState` signal for its lifetime. Sends go
//! through `begin_submit` inside a signal update, the request runs on a local
//! task, and `settle` lands the answer (or the fallback) in a second update.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use conversation::{ConversationState, Locale, Message, Role};
use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::net::api::post_coach;

/// Chat widget pinned to the bottom-right corner of the page.
#[component]
pub fn ChatWidget(#[prop(optional)] locale: Locale) -> impl IntoView {
    let conversation = RwSignal::new(ConversationState::with_locale(locale));
    let strings = conversation.with_untracked(ConversationState::strings);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        conversation.with(|c| {
            let _ = c.messages().len();
            let _ = c.is_pending();
            let _ = c.is_open();
        });

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(submission) = conversation
            .try_update(ConversationState::begin_submit)
            .and_then(Result::ok)
        else {
            return;
        };

        leptos::task::spawn_local(async move {
            let outcome = post_coach(submission.text()).await;
            conversation.update(|c| {
                c.settle(submission, outcome);
            });
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if submits_on_key(&ev.key(), ev.shift_key(), ev.is_composing()) {
            ev.prevent_default();
            do_send();
        }
    };

    let is_open = move || conversation.with(ConversationState::is_open);
    let is_pending = move || conversation.with(ConversationState::is_pending);
    let can_send = move || conversation.with(|c| !c.is_pending() && !c.draft_input().trim().is_empty());

    view! {
        <div class="chat-widget">
            <Show when=is_open>
                <div class="chat-widget__panel">
                    <div class="chat-widget__header">
                        <span class="chat-widget__title">
                            <span class="chat-widget__badge">"🎓"</span>
                            {strings.title}
                        </span>
                        <button
                            class="chat-widget__close"
                            on:click=move |_| conversation.update(ConversationState::close)
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="chat-widget__messages" node_ref=messages_ref>
                        {move || {
                            conversation
                                .with(|c| c.messages().iter().map(message_view).collect::<Vec<_>>())
                                .into_any()
                        }}

                        {move || {
                            is_pending()
                                .then(|| {
                                    view! {
                                        <div class="chat-widget__row chat-widget__row--assistant">
                                            <div class="chat-widget__pending">
                                                <span>{strings.pending}</span>
                                                <span class="chat-widget__spinner">"⏳"</span>
                                            </div>
                                        </div>
                                    }
                                })
                        }}
                    </div>

                    <div class="chat-widget__input-row">
                        <input
                            class="chat-widget__input"
                            type="text"
                            placeholder=strings.placeholder
                            prop:value=move || conversation.with(|c| c.draft_input().to_owned())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                conversation.update(|c| c.set_draft(text));
                            }
                            on:keydown=on_keydown
                        />
                        <button class="chat-widget__send" on:click=on_click disabled=move || !can_send()>
                            "➤"
                        </button>
                    </div>
                </div>
            </Show>

            <button
                class=move || fab_class(is_open())
                on:click=move |_| conversation.update(ConversationState::toggle_open)
            >
                {move || if is_open() { "➕" } else { "🤖" }}
            </button>
        </div>
    }
}

fn message_view(msg: &Message) -> AnyView {
    let body = match msg.role {
        Role::Assistant => {
            let rendered = render_markdown_html(&msg.text);
            view! { <div class="chat-widget__markdown" inner_html=rendered></div> }.into_any()
        }
        Role::User => view! { <p class="chat-widget__text">{msg.text.clone()}</p> }.into_any(),
    };

    view! {
        <div class=row_class(msg.role)>
            <div class=bubble_class(msg.role)>{body}</div>
        </div>
    }
    .into_any()
}

/// Enter submits; Shift+Enter and Enter while an IME is composing do not.
pub(crate) fn submits_on_key(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

fn row_class(role: Role) -> &'static str {
    match role {
        Role::User => "chat-widget__row chat-widget__row--user",
        Role::Assistant => "chat-widget__row chat-widget__row--assistant",
    }
}

fn bubble_class(role: Role) -> &'static str {
    match role {
        Role::User => "chat-widget__bubble chat-widget__bubble--user",
        Role::Assistant => "chat-widget__bubble chat-widget__bubble--assistant",
    }
}

fn fab_class(open: bool) -> &'static str {
    if open { "chat-widget__fab chat-widget__fab--open" } else { "chat-widget__fab" }
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Drop raw HTML from coach output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::SoftBreak => Some(Event::HardBreak),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
