use std::f64::consts::PI;

use shared::segments::SegmentTable;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub rotation: f64,
    pub segments: SegmentTable,
    pub spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let rotation = props.rotation;
        let segments = props.segments.clone();
        let spinning = props.spinning;

        use_effect_with((rotation, segments, spinning), move |(rotation, segments, spinning)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let ctx = canvas
                    .get_context("2d")
                    .unwrap()
                    .unwrap()
                    .dyn_into::<CanvasRenderingContext2d>()
                    .unwrap();
                draw_wheel(&ctx, &canvas, *rotation, segments, *spinning);
            }
            || ()
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            width="340"
            height="340"
            class={styles::WHEEL_CANVAS}
        />
    }
}

fn draw_wheel(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    rotation: f64,
    segments: &SegmentTable,
    spinning: bool,
) {
    let w = canvas.width() as f64;
    let cx = w / 2.0;
    let cy = w / 2.0;
    let radius = cx - 6.0;
    let arc = segments.arc_size();

    ctx.clear_rect(0.0, 0.0, w, w);

    for (i, seg) in segments.segments().iter().enumerate() {
        let start = rotation + i as f64 * arc;
        let end = start + arc;

        // Radial gradient fill per wedge.
        if let Ok(grad) = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, radius) {
            let _ = grad.add_color_stop(0.3, &seg.colors[0]);
            let _ = grad.add_color_stop(1.0, &seg.colors[1]);
            ctx.set_fill_style_canvas_gradient(&grad);
        } else {
            ctx.set_fill_style_str(&seg.colors[0]);
        }
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();
        ctx.fill();
        ctx.set_stroke_style_str("rgba(0,0,0,.22)");
        ctx.set_line_width(2.0);
        ctx.stroke();

        // Label along the wedge centerline, anchored near the rim.
        ctx.save();
        let _ = ctx.translate(cx, cy);
        let _ = ctx.rotate(start + arc / 2.0);
        ctx.set_text_align("right");
        ctx.set_font(&format!(
            "700 {}px 'Hind Siliguri', sans-serif",
            w * 0.082
        ));
        ctx.set_fill_style_str("#ffffff");
        ctx.set_shadow_color("rgba(0,0,0,.75)");
        ctx.set_shadow_blur(8.0);
        let _ = ctx.fill_text(&seg.label, radius - 12.0, 7.0);
        ctx.restore();
    }

    // Off-center shine overlay.
    if let Ok(shine) =
        ctx.create_radial_gradient(cx - radius * 0.22, cy - radius * 0.22, 0.0, cx, cy, radius)
    {
        let _ = shine.add_color_stop(0.0, "rgba(255,255,255,.13)");
        let _ = shine.add_color_stop(0.5, "rgba(255,255,255,0)");
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, radius, 0.0, 2.0 * PI);
        ctx.set_fill_style_canvas_gradient(&shine);
        ctx.fill();
    }

    // Center hub.
    if let Ok(hub) = ctx.create_radial_gradient(cx - 6.0, cy - 6.0, 1.0, cx, cy, 20.0) {
        let _ = hub.add_color_stop(0.0, "#ffffff");
        let _ = hub.add_color_stop(1.0, "#4fadff");
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, 20.0, 0.0, 2.0 * PI);
        ctx.set_fill_style_canvas_gradient(&hub);
        ctx.fill();
        ctx.set_stroke_style_str("#071430");
        ctx.set_line_width(3.0);
        ctx.stroke();
    }

    // Pointer at the top; slightly brighter while spinning.
    ctx.begin_path();
    ctx.move_to(cx, cy - radius + 18.0);
    ctx.line_to(cx - 13.0, cy - radius - 2.0);
    ctx.line_to(cx + 13.0, cy - radius - 2.0);
    ctx.close_path();
    ctx.set_fill_style_str(if spinning { "#ffd700" } else { "#ffc940" });
    ctx.fill();
    ctx.set_stroke_style_str("#071430");
    ctx.set_line_width(1.5);
    ctx.stroke();
}
