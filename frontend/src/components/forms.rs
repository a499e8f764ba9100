use leptos::*;

const INPUT_CLASSES: &str = "appearance-none rounded-md relative block w-full px-3 py-2 border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border focus:z-10 sm:text-sm";

fn input_classes(invalid: bool) -> String {
    if invalid {
        format!("{} border-status-error-border is-invalid", INPUT_CLASSES)
    } else {
        format!("{} border-form-control-border", INPUT_CLASSES)
    }
}

/// Labelled input bound to `value`. The error is shown once the field has
/// been touched (blurred, or every field on submit).
#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    value: RwSignal<String>,
    touched: RwSignal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let visible_error = move || {
        if touched.get() {
            error.get()
        } else {
            None
        }
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium leading-6 text-fg">
                {label}
            </label>
            <input
                id=id
                name=id
                type=input_type
                autocomplete=autocomplete
                class=move || input_classes(visible_error().is_some())
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:blur=move |_| touched.set(true)
            />
            {move || {
                visible_error()
                    .map(|msg| {
                        view! { <div class="invalid-feedback mt-1 text-sm text-status-error-text">{msg}</div> }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_inputs_get_error_border() {
        assert!(input_classes(true).contains("is-invalid"));
        assert!(!input_classes(false).contains("is-invalid"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(touched: bool) -> String {
        render_to_string(move || {
            let value = create_rw_signal("abc".to_string());
            let touched = create_rw_signal(touched);
            let error = Signal::derive(|| Some("Password is required".to_string()));
            view! {
                <FormField
                    id="password"
                    label="Password"
                    input_type="password"
                    value=value
                    touched=touched
                    error=error
                />
            }
        })
    }

    #[test]
    fn untouched_field_hides_error() {
        let html = render(false);
        assert!(html.contains("Password"));
        assert!(!html.contains("Password is required"));
    }

    #[test]
    fn touched_field_shows_error() {
        let html = render(true);
        assert!(html.contains("Password is required"));
        assert!(html.contains("is-invalid"));
    }
}
