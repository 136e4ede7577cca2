use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradientBackgroundProps {
    #[prop_or_default]
    pub children: Html,
}

/// Soft purple-to-blue page background with a centred card for the content.
#[function_component(GradientBackground)]
pub fn gradient_background(props: &GradientBackgroundProps) -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-br from-purple-50 to-blue-50 p-8">
            <div class="max-w-5xl mx-auto bg-white rounded-xl shadow-lg p-12">
                {props.children.clone()}
            </div>
        </div>
    }
}
