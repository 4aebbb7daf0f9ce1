use crate::domain::a001_booking_request::ui::BookingFormPage;
use crate::layout::Shell;
use crate::shared::i18n::LocaleProvider;
use crate::shared::toast::ToastService;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Toast queue for the whole app
    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <LocaleProvider>
                <Shell>
                    <BookingFormPage />
                </Shell>
            </LocaleProvider>
        </ConfigProvider>
    }
}
