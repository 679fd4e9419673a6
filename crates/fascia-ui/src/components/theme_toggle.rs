use fascia_core::theme::Theme;
use web_sys::MouseEvent;
use yew::{Callback, Html, Properties, classes, function_component, html, use_context};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();

    html! {
        <button
            type="button"
            class={classes!(
                "theme-toggle",
                (theme == Theme::Dark).then_some("is-dark")
            )}
            onclick={props.on_toggle.clone()}
        >
            <span class="sr-only">{ "Toggle theme" }</span>
            <span class="theme-toggle-knob"></span>
        </button>
    }
}
