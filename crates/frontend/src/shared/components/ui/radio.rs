use leptos::prelude::*;

/// Radio button component
#[component]
pub fn Radio(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Radio value
    #[prop(into)]
    value: String,
    /// Current selected value
    #[prop(into)]
    checked_value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// ID for the radio element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Extra content under the label (e.g. plan features)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let value_for_check = value.clone();
    let value_for_change = value.clone();

    let radio_id = id.get().unwrap_or_else(|| format!("{}-{}", name, value));
    let is_checked = move || checked_value.get() == value_for_check;

    view! {
        <div class="form__radio-wrapper">
            <input
                id=radio_id.clone()
                type="radio"
                class="form__radio"
                name=name
                value=value
                prop:checked=is_checked
                on:change=move |_| {
                    if let Some(handler) = on_change {
                        handler.run(value_for_change.clone());
                    }
                }
            />
            <div class="form__radio-text">
                <label class="form__radio-label" for=radio_id>
                    {label}
                </label>
                {children.map(|c| c())}
            </div>
        </div>
    }
}

/// Radio group component
#[component]
pub fn RadioGroup(
    /// Label for the group
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current selected value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Options: (value, reactive label)
    options: Vec<(String, Signal<String>)>,
) -> impl IntoView {
    view! {
        <div class="form__group" role="radiogroup">
            {move || label.get().map(|l| view! {
                <span class="form__label">{l}</span>
            })}
            <div class="form__radio-group">
                {options
                    .into_iter()
                    .map(|(val, lbl)| {
                        view! {
                            <Radio
                                label=lbl
                                value=val
                                checked_value=value
                                on_change=Callback::new(move |new_val: String| {
                                    if let Some(handler) = on_change {
                                        handler.run(new_val);
                                    }
                                })
                                name=name.clone()
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
