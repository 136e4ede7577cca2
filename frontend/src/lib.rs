pub mod animation;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod storage;
pub mod styles;

use yew::prelude::*;

use crate::config::WheelConfig;
use crate::pages::wheel_of_fortune::WheelOfFortune;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: WheelConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <WheelOfFortune config={props.config.clone()} />
    }
}
