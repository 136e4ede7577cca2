use shared::confetti::{Burst, BurstConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::animation::AnimationLoop;

#[derive(Properties, PartialEq)]
pub struct ConfettiCanvasProps {
    /// Every new value fires one burst; 0 never does.
    pub trigger: u32,
    pub config: BurstConfig,
}

/// Full-window overlay that plays a confetti burst and clears itself.
#[function_component(ConfettiCanvas)]
pub fn confetti_canvas(props: &ConfettiCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let burst_loop = use_mut_ref(|| None::<AnimationLoop>);

    {
        let canvas_ref = canvas_ref.clone();
        let config = props.config;
        use_effect_with(props.trigger, move |trigger| {
            if *trigger > 0 {
                match fire(&canvas_ref, config) {
                    Ok(running) => *burst_loop.borrow_mut() = Some(running),
                    Err(err) => log::error!("Failed to start confetti: {:?}", err),
                }
            }
            || ()
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="fixed inset-0 w-full h-full pointer-events-none z-50"
        />
    }
}

fn fire(canvas_ref: &NodeRef, config: BurstConfig) -> Result<AnimationLoop, JsValue> {
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or_else(|| JsValue::from_str("confetti canvas not mounted"))?;
    let window = window().ok_or_else(|| JsValue::from_str("No window object available"))?;

    let width = window.inner_width()?.as_f64().unwrap_or(800.0);
    let height = window.inner_height()?.as_f64().unwrap_or(600.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let mut burst = Burst::new(config, width, height, &mut rand::thread_rng());
    log::debug!("Firing {} confetti particles", burst.particles().len());

    Ok(AnimationLoop::start(move |_| {
        let alive = burst.step();
        context.clear_rect(0.0, 0.0, width, height);
        if alive {
            if let Err(err) = draw_burst(&context, &burst) {
                log::error!("Failed to draw confetti: {:?}", err);
                return false;
            }
        }
        alive
    }))
}

fn draw_burst(context: &CanvasRenderingContext2d, burst: &Burst) -> Result<(), JsValue> {
    context.set_global_alpha(burst.opacity());
    for particle in burst.particles() {
        context.save();
        context.translate(particle.x + particle.wobble.cos() * 4.0, particle.y)?;
        context.rotate(particle.tilt)?;
        context.set_fill_style_str(particle.color);
        context.fill_rect(-5.0, -3.0, 10.0, 6.0 * particle.wobble.sin().abs().max(0.3));
        context.restore();
    }
    context.set_global_alpha(1.0);
    Ok(())
}
