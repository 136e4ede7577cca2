mod wheel_canvas;
mod wheel_utils;

use shared::view::WheelView;
use yew::prelude::*;

use crate::components::{ConfettiCanvas, GradientBackground};
use crate::config::WheelConfig;
use crate::hooks::{use_wheel, WheelAction};
use crate::styles;

use wheel_canvas::WheelCanvas;
use wheel_utils::{EmptyWheel, OptionForm, OptionLegend, SpinButton, WinnerBanner};

#[derive(Properties, PartialEq)]
pub struct WheelOfFortuneProps {
    #[prop_or_default]
    pub config: WheelConfig,
}

#[function_component(WheelOfFortune)]
pub fn wheel_of_fortune(props: &WheelOfFortuneProps) -> Html {
    let state = use_wheel(props.config.storage_key.clone());
    let new_option = use_state(String::new);
    let view = WheelView::project(&state.game);

    // Blocking alert for refusals the user has to see
    use_effect_with(state.notice.clone(), |notice| {
        if let Some(notice) = notice {
            gloo::dialogs::alert(&notice.message);
        }
        || ()
    });

    // Clear the input once its option made it onto the wheel
    {
        let new_option = new_option.clone();
        use_effect_with(state.additions, move |additions| {
            if *additions > 0 {
                new_option.set(String::new());
            }
            || ()
        });
    }

    let on_input = {
        let new_option = new_option.clone();
        Callback::from(move |value: String| new_option.set(value))
    };

    let on_submit = {
        let state = state.clone();
        let new_option = new_option.clone();
        Callback::from(move |_: ()| state.dispatch(WheelAction::Add((*new_option).clone())))
    };

    let on_remove = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(WheelAction::Remove(index)))
    };

    let on_spin = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(WheelAction::Spin))
    };

    let on_stop_spinning = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(WheelAction::SpinFinished))
    };

    let show_placeholder = view.show_placeholder();

    html! {
        <GradientBackground>
            <h1 class={styles::TEXT_H1}>{"Wheel of Fortune"}</h1>

            <div class={styles::PAGE_GRID}>
                <div>
                    <OptionLegend
                        rows={view.legend}
                        editing_enabled={view.editing_enabled}
                        {on_remove}
                    />
                    <OptionForm
                        value={(*new_option).clone()}
                        editing_enabled={view.editing_enabled}
                        {on_input}
                        {on_submit}
                    />
                    <SpinButton
                        label={view.spin_label}
                        enabled={view.spin_enabled}
                        onclick={on_spin}
                    />
                    <WinnerBanner winner={view.winner} />
                </div>

                <div class={styles::WHEEL_SECTION}>
                    <div class="w-full">
                        if show_placeholder {
                            <EmptyWheel />
                        } else {
                            <WheelCanvas
                                segments={view.segments}
                                must_start_spinning={view.must_start_spinning}
                                prize_number={view.prize_number}
                                spin_duration_ms={props.config.spin_duration_ms}
                                style={props.config.style.clone()}
                                {on_stop_spinning}
                            />
                        }
                    </div>
                </div>
            </div>

            <ConfettiCanvas trigger={state.celebrations} config={props.config.burst} />
        </GradientBackground>
    }
}
