use leptos::prelude::*;

/// Textarea component with label support
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Error message
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Hint shown under the textarea
    #[prop(optional, into)]
    description: MaybeProp<String>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                name=textarea_id
                class=move || {
                    if has_error() {
                        format!("form__textarea form__textarea--error {}", additional_class())
                    } else {
                        format!("form__textarea {}", additional_class())
                    }
                }
                placeholder=textarea_placeholder
                rows=textarea_rows
                aria-invalid=move || has_error().to_string()
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
            {move || description.get().map(|d| view! {
                <p class="form__hint">{d}</p>
            })}
            {move || error.get().map(|e| view! {
                <p class="form__error" role="alert">{e}</p>
            })}
        </div>
    }
}
