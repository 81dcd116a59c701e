use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ParticleBackgroundProps {
    pub desktop_count: usize,
    pub mobile_count: usize,
    pub pause_when_hidden: bool,
}

struct Particle {
    x: f64,
    y: f64,
    r: f64,
    dx: f64,
    dy: f64,
    alpha: f64,
}

struct Field {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl Field {
    fn new(count: usize, width: f64, height: f64, rng: &mut SmallRng) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen::<f64>() * width,
                y: rng.gen::<f64>() * height,
                r: rng.gen::<f64>() * 1.7 + 0.4,
                dx: (rng.gen::<f64>() - 0.5) * 0.27,
                dy: (rng.gen::<f64>() - 0.5) * 0.27,
                alpha: rng.gen::<f64>() * 0.45 + 0.08,
            })
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    fn step_and_draw(&mut self, ctx: &CanvasRenderingContext2d) {
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        for p in &mut self.particles {
            ctx.begin_path();
            let _ = ctx.arc(p.x, p.y, p.r, 0.0, std::f64::consts::TAU);
            ctx.set_fill_style_str(&format!("rgba(79,173,255,{})", p.alpha));
            ctx.fill();
            p.x += p.dx;
            p.y += p.dy;
            // Wrap around the viewport edges.
            if p.x < 0.0 {
                p.x = self.width;
            }
            if p.x > self.width {
                p.x = 0.0;
            }
            if p.y < 0.0 {
                p.y = self.height;
            }
            if p.y > self.height {
                p.y = 0.0;
            }
        }
    }
}

pub(crate) fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (0.0, 0.0);
    };
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

fn schedule(
    raf: Rc<RefCell<Option<AnimationFrame>>>,
    ctx: CanvasRenderingContext2d,
    field: Rc<RefCell<Field>>,
    hidden: Rc<Cell<bool>>,
) {
    let slot = raf.clone();
    let handle = request_animation_frame(move |_ts| {
        if !hidden.get() {
            field.borrow_mut().step_and_draw(&ctx);
        }
        schedule(raf, ctx, field, hidden);
    });
    // Replacing the previous handle here is fine: it already fired.
    *slot.borrow_mut() = Some(handle);
}

/// Slow-drifting dot field behind the whole page. Purely decorative:
/// it holds no widget state and the spin logic never waits on it.
#[function_component(ParticleBackground)]
pub fn particle_background(props: &ParticleBackgroundProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let desktop_count = props.desktop_count;
        let mobile_count = props.mobile_count;
        let pause_when_hidden = props.pause_when_hidden;

        use_effect_with((), move |_| {
            let mut cleanup: Vec<EventListener> = Vec::new();
            let raf: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let (width, height) = viewport_size();
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);

                // Mobile viewports get a lighter particle budget.
                let count = if width < 640.0 { mobile_count } else { desktop_count };
                let mut rng = SmallRng::from_entropy();
                let field = Rc::new(RefCell::new(Field::new(count, width, height, &mut rng)));
                let hidden = Rc::new(Cell::new(false));

                let ctx = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());

                if let Some(ctx) = ctx {
                    if let Some(win) = window() {
                        let resize_canvas = canvas.clone();
                        let resize_field = field.clone();
                        cleanup.push(EventListener::new(&win, "resize", move |_| {
                            let (w, h) = viewport_size();
                            resize_canvas.set_width(w as u32);
                            resize_canvas.set_height(h as u32);
                            let mut f = resize_field.borrow_mut();
                            f.width = w;
                            f.height = h;
                        }));

                        if pause_when_hidden {
                            if let Some(doc) = win.document() {
                                let hidden_flag = hidden.clone();
                                let watched = doc.clone();
                                cleanup.push(EventListener::new(&doc, "visibilitychange", move |_| {
                                    hidden_flag.set(watched.hidden());
                                }));
                            }
                        }
                    }

                    schedule(raf.clone(), ctx, field, hidden);
                }
            }

            move || {
                // Dropping the frame handle cancels the loop; dropping
                // the listeners detaches them.
                raf.borrow_mut().take();
                drop(cleanup);
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} class={styles::DECOR_CANVAS} />
    }
}
