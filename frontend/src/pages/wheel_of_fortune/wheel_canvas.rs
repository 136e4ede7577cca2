use std::f64::consts::PI;

use shared::view::WheelSegment;
use shared::wheel_motion::{slot_angle, SpinAnimation};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::wheel_utils::fit_label;
use crate::animation::AnimationLoop;
use crate::config::WheelStyle;

const CANVAS_SIZE: u32 = 450;
const POINTER_WIDTH: f64 = 16.0;
const POINTER_HEIGHT: f64 = 26.0;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub segments: Vec<WheelSegment>,
    pub must_start_spinning: bool,
    pub prize_number: usize,
    pub spin_duration_ms: f64,
    pub style: WheelStyle,
    pub on_stop_spinning: Callback<()>,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let rotation = use_state(|| 0.0f64);
    let spin_loop = use_mut_ref(|| None::<AnimationLoop>);

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (*rotation, props.segments.clone(), props.style.clone()),
            move |(rotation, segments, style)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(err) = draw_wheel(&canvas, *rotation, segments, style) {
                        log::error!("Failed to draw wheel: {:?}", err);
                    }
                }
                || ()
            },
        );
    }

    {
        let rotation = rotation.clone();
        let spin_loop = spin_loop.clone();
        let on_stop = props.on_stop_spinning.clone();
        let slots = props.segments.len();
        let duration = props.spin_duration_ms;

        use_effect_with(
            (props.must_start_spinning, props.prize_number),
            move |(must_start, prize)| {
                if *must_start && slots > 0 {
                    let animation = SpinAnimation::towards(*rotation, *prize, slots, &mut rand::thread_rng())
                        .with_duration(duration);
                    let started = js_sys::Date::now();

                    *spin_loop.borrow_mut() = Some(AnimationLoop::start(move |_| {
                        let elapsed = js_sys::Date::now() - started;
                        rotation.set(animation.rotation_at(elapsed));
                        if animation.is_finished(elapsed) {
                            on_stop.emit(());
                            false
                        } else {
                            true
                        }
                    }));
                }
                || ()
            },
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={CANVAS_SIZE.to_string()}
            height={CANVAS_SIZE.to_string()}
            class="w-full max-w-[450px] h-auto mx-auto"
        />
    }
}

fn draw_wheel(
    canvas: &HtmlCanvasElement,
    rotation: f64,
    segments: &[WheelSegment],
    style: &WheelStyle,
) -> Result<(), JsValue> {
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - POINTER_HEIGHT;
    let inner_radius = radius * style.inner_radius;

    context.clear_rect(0.0, 0.0, width, height);
    if segments.is_empty() {
        return Ok(());
    }

    let wedge = slot_angle(segments.len()).to_radians();
    let offset = rotation.to_radians();

    for (i, segment) in segments.iter().enumerate() {
        let start = offset + i as f64 * wedge;
        let end = start + wedge;

        context.begin_path();
        context.set_fill_style_str(segment.background);
        context.move_to(center_x, center_y);
        context.arc(center_x, center_y, radius, start, end)?;
        context.close_path();
        context.fill();

        // Divider along the leading edge of the wedge
        if segments.len() > 1 {
            context.begin_path();
            context.set_stroke_style_str(&style.radius_line_color);
            context.set_line_width(style.radius_line_width);
            context.move_to(
                center_x + inner_radius * start.cos(),
                center_y + inner_radius * start.sin(),
            );
            context.line_to(center_x + radius * start.cos(), center_y + radius * start.sin());
            context.stroke();
        }
    }

    if inner_radius > 0.0 {
        context.begin_path();
        context.set_fill_style_str("#ffffff");
        context.arc(center_x, center_y, inner_radius, 0.0, 2.0 * PI)?;
        context.fill();
    }

    // Labels run along the middle of each wedge, right-aligned near the rim.
    let max_chars = label_capacity(radius - inner_radius, style.font_size);
    context.set_fill_style_str(&style.text_color);
    context.set_font(&format!("bold {}px sans-serif", style.font_size));
    context.set_text_align("right");
    context.set_text_baseline("middle");
    for (i, segment) in segments.iter().enumerate() {
        context.save();
        context.translate(center_x, center_y)?;
        context.rotate(offset + (i as f64 + 0.5) * wedge)?;
        context.fill_text(&fit_label(&segment.label, max_chars), radius - 12.0, 0.0)?;
        context.restore();
    }

    context.begin_path();
    context.set_stroke_style_str(&style.outer_border_color);
    context.set_line_width(style.outer_border_width);
    context.arc(center_x, center_y, radius, 0.0, 2.0 * PI)?;
    context.stroke();

    draw_pointer(&context, center_x, center_y - radius);
    Ok(())
}

/// Downward triangle resting on the rim at 12 o'clock.
fn draw_pointer(context: &CanvasRenderingContext2d, tip_x: f64, tip_y: f64) {
    context.begin_path();
    context.move_to(tip_x, tip_y + 8.0);
    context.line_to(tip_x - POINTER_WIDTH, tip_y - POINTER_HEIGHT + 8.0);
    context.line_to(tip_x + POINTER_WIDTH, tip_y - POINTER_HEIGHT + 8.0);
    context.close_path();
    context.set_fill_style_str("#f59e0b");
    context.fill();
    context.set_stroke_style_str("#1a1a1a");
    context.set_line_width(1.5);
    context.stroke();
}

/// Rough number of characters that fit between the hub and the rim.
fn label_capacity(length: f64, font_size: u32) -> usize {
    let glyph = font_size as f64 * 0.6;
    ((length - 24.0) / glyph).max(1.0) as usize
}
