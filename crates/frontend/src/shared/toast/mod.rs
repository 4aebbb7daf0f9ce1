//! Toast notifications.
//!
//! `ToastService` is provided via context; `ToastHost` renders the queue.
//! Toasts keep message keys, not strings, so they follow language changes.

use crate::shared::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::shared::i18n::use_locale;
use crate::shared::icons::icon;
use contracts::shared::i18n::MessageKey;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};
use wasm_bindgen_futures::spawn_local;

const TOAST_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastIntent {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub intent: ToastIntent,
    pub title: MessageKey,
    pub body: MessageKey,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Show a toast; it disappears after a timeout or when dismissed.
    pub fn push(&self, intent: ToastIntent, title: MessageKey, body: MessageKey) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|list| {
            list.push(Toast {
                id,
                intent,
                title,
                body,
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            svc.dismiss(id);
        });

        id
    }

    pub fn success(&self, title: MessageKey, body: MessageKey) -> u64 {
        self.push(ToastIntent::Success, title, body)
    }

    pub fn error(&self, title: MessageKey, body: MessageKey) -> u64 {
        self.push(ToastIntent::Error, title, body)
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found")
}

/// Renders active toasts in a fixed corner container.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toast();
    let locale = use_locale();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let intent = match toast.intent {
                        ToastIntent::Success => MessageBarIntent::Success,
                        ToastIntent::Error => MessageBarIntent::Error,
                    };
                    let id = toast.id;
                    let title = toast.title;
                    let body = toast.body;
                    view! {
                        <div class="toast-host__item">
                            <MessageBar intent=intent>
                                <div class="toast">
                                    <div class="toast__text">
                                        <strong class="toast__title">{move || locale.t(title)}</strong>
                                        <span class="toast__body">{move || locale.t(body)}</span>
                                    </div>
                                    <Button
                                        variant=ButtonVariant::Ghost
                                        size=ButtonSize::Small
                                        class="toast__close"
                                        aria_label=Signal::derive(move || locale.t(MessageKey::Dismiss).to_string())
                                        on_click=Callback::new(move |_| svc.dismiss(id))
                                    >
                                        {icon("x")}
                                    </Button>
                                </div>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
