use shared::constants::{EMPTY_WHEEL_MESSAGE, WINNER_HEADING};
use shared::view::LegendRow;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::styles;

pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

/// Shortens a label to `max_chars` characters, marking the cut with an
/// ellipsis.
pub fn fit_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let kept: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// Colour legend with a remove button per option
#[derive(Properties, PartialEq)]
pub struct OptionLegendProps {
    pub rows: Vec<LegendRow>,
    pub editing_enabled: bool,
    pub on_remove: Callback<usize>,
}

#[function_component(OptionLegend)]
pub fn option_legend(props: &OptionLegendProps) -> Html {
    html! {
        <div class="mb-8">
            <h2 class="text-lg font-semibold mb-3">{"Options"}</h2>
            { for props.rows.iter().map(|row| {
                let on_remove = props.on_remove.clone();
                let index = row.index;
                html! {
                    <div key={row.index} class={styles::LEGEND_ROW}>
                        <div
                            class="w-4 h-4 rounded-full"
                            style={format!("background-color: {}", row.color)}
                        />
                        <span class="flex-1">{&row.label}</span>
                        <button
                            onclick={Callback::from(move |_: MouseEvent| on_remove.emit(index))}
                            class={styles::BUTTON_REMOVE}
                            disabled={!props.editing_enabled}
                            title="Remove option"
                        >
                            {"✕"}
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}

// Text input plus add button; Enter submits too
#[derive(Properties, PartialEq)]
pub struct OptionFormProps {
    pub value: String,
    pub editing_enabled: bool,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(OptionForm)]
pub fn option_form(props: &OptionFormProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let onkeypress = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_submit_key(&e.key()) {
                on_submit.emit(());
            }
        })
    };

    let onclick = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    html! {
        <div class="flex gap-3 mb-8">
            <input
                type="text"
                value={props.value.clone()}
                {oninput}
                {onkeypress}
                placeholder="Add new option"
                class={styles::INPUT_OPTION}
                disabled={!props.editing_enabled}
            />
            <button
                {onclick}
                class={styles::BUTTON_ADD}
                disabled={!props.editing_enabled}
                title="Add option"
            >
                {"+"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub label: &'static str,
    pub enabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_class = if props.enabled {
        styles::BUTTON_SPIN
    } else {
        styles::BUTTON_SPIN_DISABLED
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={!props.enabled}
            class={button_class}
        >
            {props.label}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct WinnerBannerProps {
    pub winner: Option<String>,
}

#[function_component(WinnerBanner)]
pub fn winner_banner(props: &WinnerBannerProps) -> Html {
    match &props.winner {
        Some(winner) => html! {
            <div class="mt-8 p-6 bg-green-50 rounded-lg text-center">
                <h2 class="text-xl font-semibold mb-2">{WINNER_HEADING}</h2>
                <p class="text-2xl text-green-600 font-bold">{winner}</p>
            </div>
        },
        None => html! {},
    }
}

#[function_component(EmptyWheel)]
pub fn empty_wheel() -> Html {
    html! {
        <div class={styles::EMPTY_WHEEL}>
            <p class="text-xl text-gray-500 font-medium text-center px-8">
                {EMPTY_WHEEL_MESSAGE}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_label() {
        assert_eq!(fit_label("Pizza", 10), "Pizza");
        assert_eq!(fit_label("Pizza", 5), "Pizza");
        assert_eq!(fit_label("Margherita", 5), "Marg…");
        assert_eq!(fit_label("Crème brûlée", 4), "Crè…");
    }

    #[test]
    fn test_only_enter_submits() {
        assert!(is_submit_key("Enter"));
        assert!(!is_submit_key("a"));
        assert!(!is_submit_key("Tab"));
    }
}
