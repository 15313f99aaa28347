//! Notification banner shown after a submit attempt.
//!
//! Holds at most one notice; a new one replaces the previous. Each notice
//! is cleared after [`NOTICE_TIMEOUT_MS`] unless it was replaced first
//! (notices are told apart by `id`).

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::{Notice, NOTICE_TIMEOUT_MS};

#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    create_effect(move |_| {
        if let Some(current) = notice.get() {
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                notice.update(|slot| {
                    if slot.as_ref().map(|n| n.id) == Some(current.id) {
                        *slot = None;
                    }
                });
            });
        }
    });

    view! {
        {move || notice.get().map(|n| view! {
            <div class=n.level.css_class() role="alert">
                <span class="notice-time">"[" {n.timestamp.clone()} "] "</span>
                {n.level.emoji()} " " {n.message.clone()}
                <button class="notice-close" type="button" on:click=move |_| notice.set(None)>
                    "×"
                </button>
            </div>
        })}
    }
}
