use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::styles;

const COLORS: [&str; 7] = [
    "#4fadff", "#ffc940", "#a855f7", "#21c95e", "#e94560", "#00d4ff", "#f87c1f",
];

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    /// Monotonic burst counter; each increment fires one burst.
    /// Zero means "never fired".
    pub burst: u32,
    #[prop_or(180)]
    pub piece_count: usize,
}

struct Piece {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: &'static str,
    rot: f64,
    vx: f64,
    vy: f64,
    vr: f64,
    alpha: f64,
}

fn spawn(count: usize, width: f64, rng: &mut SmallRng) -> Vec<Piece> {
    (0..count)
        .map(|_| Piece {
            x: rng.gen::<f64>() * width,
            y: -20.0 - rng.gen::<f64>() * 100.0,
            w: rng.gen::<f64>() * 9.0 + 4.0,
            h: rng.gen::<f64>() * 4.0 + 2.0,
            color: COLORS[rng.gen_range(0..COLORS.len())],
            rot: rng.gen::<f64>() * 360.0,
            vx: (rng.gen::<f64>() - 0.5) * 5.0,
            vy: rng.gen::<f64>() * 5.0 + 2.5,
            vr: (rng.gen::<f64>() - 0.5) * 9.0,
            alpha: 1.0,
        })
        .collect()
}

fn animate(
    raf: Rc<RefCell<Option<AnimationFrame>>>,
    ctx: CanvasRenderingContext2d,
    pieces: Rc<RefCell<Vec<Piece>>>,
    width: f64,
    height: f64,
) {
    let slot = raf.clone();
    let handle = request_animation_frame(move |_ts| {
        ctx.clear_rect(0.0, 0.0, width, height);
        let mut pieces_ref = pieces.borrow_mut();
        pieces_ref.retain(|p| p.alpha > 0.03);
        for p in pieces_ref.iter_mut() {
            ctx.save();
            ctx.set_global_alpha(p.alpha);
            let _ = ctx.translate(p.x, p.y);
            let _ = ctx.rotate(p.rot * std::f64::consts::PI / 180.0);
            ctx.set_fill_style_str(p.color);
            ctx.fill_rect(-p.w / 2.0, -p.h / 2.0, p.w, p.h);
            ctx.restore();
            p.x += p.vx;
            p.y += p.vy;
            p.rot += p.vr;
            // Fade out once a piece falls past most of the viewport.
            if p.y > height * 0.72 {
                p.alpha -= 0.016;
            }
        }
        let finished = pieces_ref.is_empty();
        drop(pieces_ref);
        if finished {
            ctx.clear_rect(0.0, 0.0, width, height);
            raf.borrow_mut().take();
        } else {
            animate(raf, ctx, pieces, width, height);
        }
    });
    *slot.borrow_mut() = Some(handle);
}

/// One-shot celebration burst over the whole viewport. Runs until the
/// last piece fades, then clears its canvas and stops scheduling.
#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    let canvas_ref = use_node_ref();
    let raf = use_mut_ref(|| None::<AnimationFrame>);

    {
        let canvas_ref = canvas_ref.clone();
        let raf = raf.clone();
        let piece_count = props.piece_count;

        use_effect_with(props.burst, move |&burst| {
            if burst > 0 {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let (width, height) = super::particle_background::viewport_size();
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);
                    let ctx = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
                    if let Some(ctx) = ctx {
                        let mut rng = SmallRng::from_entropy();
                        let pieces = Rc::new(RefCell::new(spawn(piece_count, width, &mut rng)));
                        animate(raf.clone(), ctx, pieces, width, height);
                    }
                }
            }
            move || {
                raf.borrow_mut().take();
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} class={styles::DECOR_CANVAS} />
    }
}
