use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    /// Borderless, for header and toast controls
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button--primary",
            ButtonVariant::Secondary => "button--secondary",
            ButtonVariant::Ghost => "button--ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Medium,
    Small,
}

fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let mut classes = vec!["button", variant.class()];
    if size == ButtonSize::Small {
        classes.push("button--small");
    }
    if let Some(extra) = extra.filter(|c| !c.is_empty()) {
        classes.push(extra);
    }
    classes.join(" ")
}

/// Form button. Plain `type="button"` unless `submit` is set, so pressing
/// a control inside the booking form never submits it.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: MaybeProp<String>,
    /// Render as the form's submit button
    #[prop(optional)]
    submit: bool,
    /// Accessible name for icon-only buttons
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=move || button_class(variant, size, class.get().as_deref())
            aria-label=move || aria_label.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class() {
        assert_eq!(
            button_class(ButtonVariant::default(), ButtonSize::default(), None),
            "button button--primary"
        );
        assert_eq!(
            button_class(ButtonVariant::Ghost, ButtonSize::Small, Some("toast__close")),
            "button button--ghost button--small toast__close"
        );
        assert_eq!(
            button_class(ButtonVariant::Secondary, ButtonSize::Medium, Some("")),
            "button button--secondary"
        );
    }
}
