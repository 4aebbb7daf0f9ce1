pub mod header;

use crate::shared::toast::ToastHost;
use header::Header;
use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------+
/// |  Header (title, language)    |
/// +------------------------------+
/// |            Content           |
/// +------------------------------+
/// ```
///
/// Toasts are rendered on top of everything.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
            <ToastHost />
        </div>
    }
}
