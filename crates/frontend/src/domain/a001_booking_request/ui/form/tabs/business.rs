//! Business information tab: contact fields and logo upload

use super::super::view_model::BookingFormVm;
use super::{error_text, TabHeader};
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::i18n::{tr, tr_signal};
use crate::shared::icons::icon;
use contracts::domain::a001_booking_request::{BookingRequestDto, FormField};
use contracts::shared::config::config;
use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

type Getter = fn(&BookingRequestDto) -> String;
type Setter = fn(&mut BookingRequestDto, String);

/// Single-line or multi-line input bound to one form field
#[component]
fn FieldInput(
    vm: BookingFormVm,
    field: FormField,
    label: MessageKey,
    placeholder: MessageKey,
    get: Getter,
    set: Setter,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = Signal::derive(move || vm.form.with(get));
    let on_input = Callback::new(move |text: String| vm.update(Some(field), |f| set(f, text)));
    let id = field.input_id();

    if multiline {
        view! {
            <Textarea
                id=id
                label=tr_signal(label)
                placeholder=tr_signal(placeholder)
                value=value
                on_input=on_input
                error=error_text(vm, field)
            />
        }
        .into_any()
    } else {
        view! {
            <Input
                id=id
                label=tr_signal(label)
                placeholder=tr_signal(placeholder)
                input_type=input_type.unwrap_or("text")
                value=value
                on_input=on_input
                error=error_text(vm, field)
            />
        }
        .into_any()
    }
}

#[component]
pub fn BusinessTab(vm: BookingFormVm) -> impl IntoView {
    view! {
        <div class="card">
            <TabHeader title=MessageKey::BusinessTitle description=MessageKey::BusinessDescription />
            <div class="card__content">
                <FieldInput
                    vm=vm
                    field=FormField::BusinessName
                    label=MessageKey::BusinessNameLabel
                    placeholder=MessageKey::BusinessNamePlaceholder
                    get=|f| f.business_name.clone()
                    set=|f, v| f.business_name = v
                />
                <FieldInput
                    vm=vm
                    field=FormField::BusinessType
                    label=MessageKey::BusinessTypeLabel
                    placeholder=MessageKey::BusinessTypePlaceholder
                    get=|f| f.business_type.clone()
                    set=|f, v| f.business_type = v
                />
                <FieldInput
                    vm=vm
                    field=FormField::BusinessAddress
                    label=MessageKey::BusinessAddressLabel
                    placeholder=MessageKey::BusinessAddressPlaceholder
                    get=|f| f.business_address.clone()
                    set=|f, v| f.business_address = v
                    multiline=true
                />
                <div class="form__row">
                    <FieldInput
                        vm=vm
                        field=FormField::PhoneNumber
                        label=MessageKey::PhoneLabel
                        placeholder=MessageKey::PhonePlaceholder
                        get=|f| f.phone_number.clone()
                        set=|f, v| f.phone_number = v
                        input_type="tel"
                    />
                    <FieldInput
                        vm=vm
                        field=FormField::Email
                        label=MessageKey::EmailLabel
                        placeholder=MessageKey::EmailPlaceholder
                        get=|f| f.email.clone()
                        set=|f, v| f.email = v
                        input_type="email"
                    />
                </div>
                <FieldInput
                    vm=vm
                    field=FormField::SocialLink
                    label=MessageKey::SocialLinkLabel
                    placeholder=MessageKey::SocialLinkPlaceholder
                    get=|f| f.social_link.clone()
                    set=|f, v| f.social_link = v
                    input_type="url"
                />
                <LogoUpload vm=vm />
            </div>
        </div>
    }
}

#[component]
fn LogoUpload(vm: BookingFormVm) -> impl IntoView {
    let accept = config().logo.accepted_types.join(", ");

    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            vm.select_logo(file);
        }
        // allow choosing the same file again
        input.set_value("");
    };

    let preview = move || {
        vm.logo
            .get()
            .and_then(|logo| logo.preview_url)
            .map(|url| view! { <img class="logo-upload__preview" src=url alt="" /> })
    };

    view! {
        <div class="form__group">
            <span class="form__label">{tr(MessageKey::LogoLabel)}</span>
            <div class="logo-upload">
                <label for="logo-upload" class="logo-upload__drop">
                    <Show
                        when=move || vm.logo.with(|l| l.as_ref().is_some_and(|l| l.preview_url.is_some()))
                        fallback=|| view! {
                            <div class="logo-upload__placeholder">
                                {icon("upload")}
                                <span>{tr(MessageKey::LogoUpload)}</span>
                            </div>
                        }
                    >
                        {preview}
                    </Show>
                    <input
                        id="logo-upload"
                        type="file"
                        accept=accept
                        class="sr-only"
                        on:change=on_change
                    />
                </label>
                <div class="logo-upload__hints">
                    <p>{tr(MessageKey::LogoHintFormat)}</p>
                    <p>{tr(MessageKey::LogoHintSize)}</p>
                    {move || vm.logo.get().map(|logo| view! {
                        <p class="logo-upload__file">
                            <span>{logo.info.name}</span>
                            <button
                                type="button"
                                class="button button--ghost button--small"
                                on:click=move |_| vm.remove_logo()
                            >
                                {icon("x")}
                                {tr(MessageKey::LogoRemove)}
                            </button>
                        </p>
                    })}
                </div>
            </div>
        </div>
    }
}
