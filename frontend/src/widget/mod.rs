mod wheel_canvas;
mod widget_utils;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::screenshot::{ScreenshotCountdown, ScreenshotPhase};
use shared::session::WheelSession;
use shared::spin_lock::{generate_session_id, LockState, SpinRecord};
use shared::variants::VariantConfig;

use crate::audio::WheelAudio;
use crate::components::Confetti;
use crate::storage::LocalStore;
use crate::styles;
use wheel_canvas::WheelCanvas;
use widget_utils::{format_clock, format_lock_time, format_spin_date, ResultDisplay, SpinButton};

const STATUS_READY: &str = "Spin the wheel and win your discount!";
const STATUS_SPINNING: &str = "Spinning...";
const STATUS_LOCKED: &str = "Spin used — come back when the timer runs out.";

#[derive(Properties, PartialEq)]
pub struct SpinWidgetProps {
    pub config: VariantConfig,
}

type IntervalSlot = Rc<RefCell<Option<Interval>>>;

/// The spin-the-wheel page. All durable state lives in local storage
/// behind [`LockState`]; all in-memory spin state lives in one
/// [`WheelSession`]. Each phase owns its timers through the interval
/// slots below, and every transition drops the previous phase's
/// timers before arming new ones.
#[function_component(SpinWidget)]
pub fn spin_widget(props: &SpinWidgetProps) -> Html {
    let config = props.config.clone();
    let lock_ms = config.lock_ms;

    let session = {
        let config = config.clone();
        use_mut_ref(move || WheelSession::new(config))
    };
    let lock_state = use_mut_ref(|| LockState::new(LocalStore::new(), lock_ms));
    let audio = use_mut_ref(WheelAudio::new);

    let rotation = use_state(|| 0.0_f64);
    let spinning = use_state(|| false);
    let locked = use_state(|| false);
    let lock_remaining_ms = use_state(|| 0_i64);
    let record = use_state(|| None::<SpinRecord>);
    let suspense = use_state(|| false);
    let show_result = use_state(|| false);
    let ss_phase = use_state(|| None::<ScreenshotPhase>);
    let clock_text = use_state(String::new);
    let sound_on = use_state(|| true);
    let burst = use_state(|| 0_u32);
    let status = use_state(|| STATUS_READY);

    let lock_iv: IntervalSlot = use_mut_ref(|| None);
    let ss_iv: IntervalSlot = use_mut_ref(|| None);
    let clock_iv: IntervalSlot = use_mut_ref(|| None);
    let tick_iv: IntervalSlot = use_mut_ref(|| None);

    // Reveal sequencing: optional suspense beat, then the win text,
    // live clock and screenshot countdown.
    let reveal: Rc<dyn Fn(SpinRecord, bool)> = {
        let suspense = suspense.clone();
        let show_result = show_result.clone();
        let ss_phase = ss_phase.clone();
        let clock_text = clock_text.clone();
        let ss_iv = ss_iv.clone();
        let clock_iv = clock_iv.clone();
        let screenshot_secs = config.screenshot_secs;
        let suspense_ms = config.suspense_ms;
        Rc::new(move |rec: SpinRecord, skip_suspense: bool| {
            show_result.set(true);
            // Countdown and clock from any previous reveal must die
            // before this one arms its own.
            ss_iv.borrow_mut().take();
            clock_iv.borrow_mut().take();
            if skip_suspense {
                reveal_outcome(
                    &rec,
                    screenshot_secs,
                    &suspense,
                    &ss_phase,
                    &clock_text,
                    &ss_iv,
                    &clock_iv,
                );
            } else {
                suspense.set(true);
                let rec = rec.clone();
                let suspense = suspense.clone();
                let ss_phase = ss_phase.clone();
                let clock_text = clock_text.clone();
                let ss_iv = ss_iv.clone();
                let clock_iv = clock_iv.clone();
                spawn_local(async move {
                    TimeoutFuture::new(suspense_ms).await;
                    reveal_outcome(
                        &rec,
                        screenshot_secs,
                        &suspense,
                        &ss_phase,
                        &clock_text,
                        &ss_iv,
                        &clock_iv,
                    );
                });
            }
        })
    };

    // Lock expiry path: wipe storage, reset the session, drop every
    // timer and put the UI back in its pristine Idle form.
    let reset_all: Rc<dyn Fn()> = {
        let session = session.clone();
        let lock_state = lock_state.clone();
        let spinning = spinning.clone();
        let locked = locked.clone();
        let lock_remaining_ms = lock_remaining_ms.clone();
        let record = record.clone();
        let suspense = suspense.clone();
        let show_result = show_result.clone();
        let ss_phase = ss_phase.clone();
        let status = status.clone();
        let lock_iv = lock_iv.clone();
        let ss_iv = ss_iv.clone();
        let clock_iv = clock_iv.clone();
        let tick_iv = tick_iv.clone();
        Rc::new(move || {
            lock_state.borrow_mut().clear();
            session.borrow_mut().reset();
            for slot in [&lock_iv, &ss_iv, &clock_iv, &tick_iv] {
                slot.borrow_mut().take();
            }
            spinning.set(false);
            locked.set(false);
            lock_remaining_ms.set(0);
            record.set(None);
            suspense.set(false);
            show_result.set(false);
            ss_phase.set(None);
            status.set(STATUS_READY);
            log::debug!("lock expired, widget reset");
        })
    };

    let start_lock_countdown: Rc<dyn Fn(i64)> = {
        let lock_remaining_ms = lock_remaining_ms.clone();
        let lock_iv = lock_iv.clone();
        let reset_all = reset_all.clone();
        Rc::new(move |unlock_at: i64| {
            lock_iv.borrow_mut().take();
            lock_remaining_ms.set(unlock_at - js_sys::Date::now() as i64);
            let lock_remaining_ms = lock_remaining_ms.clone();
            let reset_all = reset_all.clone();
            let handle = Interval::new(1000, move || {
                let remaining = unlock_at - js_sys::Date::now() as i64;
                if remaining <= 0 {
                    reset_all();
                } else {
                    lock_remaining_ms.set(remaining);
                }
            });
            *lock_iv.borrow_mut() = Some(handle);
        })
    };

    let start_spin = {
        let session = session.clone();
        let lock_state = lock_state.clone();
        let audio = audio.clone();
        let rotation = rotation.clone();
        let spinning = spinning.clone();
        let locked = locked.clone();
        let status = status.clone();
        let record = record.clone();
        let burst = burst.clone();
        let tick_iv = tick_iv.clone();
        let start_lock_countdown = start_lock_countdown.clone();
        let reveal = reveal.clone();
        let tick_sample_ms = config.tick_sample_ms;

        Callback::from(move |_| {
            if *spinning || *locked || !session.borrow().can_spin() {
                return;
            }

            let mut rng = SmallRng::from_entropy();
            if session
                .borrow_mut()
                .begin_spin(&mut rng, js_sys::Date::now())
                .is_none()
            {
                return;
            }
            spinning.set(true);
            status.set(STATUS_SPINNING);

            // Boundary-crossing sampler on its own cadence, feeding
            // the tick sound only.
            tick_iv.borrow_mut().take();
            {
                let session = session.clone();
                let audio = audio.clone();
                *tick_iv.borrow_mut() = Some(Interval::new(tick_sample_ms, move || {
                    if session.borrow_mut().sample_tick(js_sys::Date::now()) {
                        audio.borrow_mut().play_tick();
                    }
                }));
            }

            // Render loop: self-scheduling animation frame callback.
            let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            let g = f.clone();

            let session = session.clone();
            let lock_state = lock_state.clone();
            let audio = audio.clone();
            let rotation = rotation.clone();
            let spinning = spinning.clone();
            let locked = locked.clone();
            let status = status.clone();
            let record = record.clone();
            let burst = burst.clone();
            let tick_iv = tick_iv.clone();
            let start_lock_countdown = start_lock_countdown.clone();
            let reveal = reveal.clone();

            *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let frame = session.borrow_mut().frame(js_sys::Date::now());
                rotation.set(frame.rotation);

                let Some(seg_idx) = frame.landed else {
                    if let Some(window) = web_sys::window() {
                        let _ = window.request_animation_frame(
                            f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                        );
                    }
                    return;
                };

                // Landed: stop tick sampling, persist, lock, reveal.
                tick_iv.borrow_mut().take();
                let label = session
                    .borrow()
                    .config()
                    .segments
                    .get(seg_idx)
                    .map(|s| s.label.clone())
                    .unwrap_or_default();
                let mut rng = SmallRng::from_entropy();
                let session_id = generate_session_id(&mut rng);
                let now = js_sys::Date::now() as i64;
                let rec = lock_state.borrow_mut().write(&label, &session_id, now);
                session.borrow_mut().complete_spin(rec.clone());
                log::info!("spin landed on segment {seg_idx} ({label}), session {session_id}");

                spinning.set(false);
                locked.set(true);
                status.set(STATUS_LOCKED);
                record.set(Some(rec.clone()));
                audio.borrow_mut().play_win();
                burst.set(*burst + 1);
                start_lock_countdown(now + lock_ms);
                reveal(rec, false);
            }) as Box<dyn FnMut()>));

            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(
                    g.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                );
            }
        })
    };

    let toggle_sound = {
        let sound_on = sound_on.clone();
        let audio = audio.clone();
        Callback::from(move |_| {
            let on = !*sound_on;
            audio.borrow_mut().set_enabled(on);
            sound_on.set(on);
        })
    };

    // Mount: resume a persisted lock, or start Idle. Unmount: every
    // timer dies with the widget.
    {
        let session = session.clone();
        let lock_state = lock_state.clone();
        let locked = locked.clone();
        let status = status.clone();
        let record = record.clone();
        let start_lock_countdown = start_lock_countdown.clone();
        let reveal = reveal.clone();
        let lock_iv = lock_iv.clone();
        let ss_iv = ss_iv.clone();
        let clock_iv = clock_iv.clone();
        let tick_iv = tick_iv.clone();

        use_effect_with((), move |_| {
            let now = js_sys::Date::now() as i64;
            if let Some(rec) = lock_state.borrow_mut().initialize(now) {
                log::debug!("resuming locked state from storage, session {}", rec.session_id);
                session.borrow_mut().resume(rec.clone());
                locked.set(true);
                status.set(STATUS_LOCKED);
                record.set(Some(rec.clone()));
                start_lock_countdown(rec.spin_time + lock_ms);
                reveal(rec, true);
            }
            move || {
                for slot in [lock_iv, ss_iv, clock_iv, tick_iv] {
                    slot.borrow_mut().take();
                }
            }
        });
    }

    let (discount, session_id, spin_date) = match &*record {
        Some(rec) => (
            rec.discount_label.clone(),
            rec.session_id.clone(),
            format_spin_date(rec.spin_time),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    html! {
        <>
            <Confetti burst={*burst} />
            <div class={styles::CARD}>
                <h1 class={styles::TITLE}>{"Spin & Win"}</h1>
                <p class={styles::STATUS}>{ *status }</p>
                <div class={styles::WHEEL_WRAP}>
                    <button class={styles::SOUND_BUTTON} onclick={toggle_sound}>
                        { if *sound_on { "🔊" } else { "🔇" } }
                    </button>
                    <WheelCanvas
                        rotation={*rotation}
                        segments={config.segments.clone()}
                        spinning={*spinning}
                    />
                </div>
                if *locked && *lock_remaining_ms > 0 {
                    <div class={styles::LOCK_TIMER}>
                        { format!("🔒 Unlocks in {}", format_lock_time(*lock_remaining_ms)) }
                    </div>
                }
                <SpinButton spinning={*spinning} locked={*locked} onclick={start_spin} />
                <ResultDisplay
                    visible={*show_result}
                    suspense={*suspense}
                    {discount}
                    {session_id}
                    {spin_date}
                    clock={(*clock_text).clone()}
                    screenshot={*ss_phase}
                />
            </div>
        </>
    }
}

/// Post-suspense reveal: arm the live clock and the screenshot
/// countdown from the persisted `screenshot_start`, showing "expired"
/// straight away when the window has already passed.
fn reveal_outcome(
    rec: &SpinRecord,
    screenshot_secs: i64,
    suspense: &UseStateHandle<bool>,
    ss_phase: &UseStateHandle<Option<ScreenshotPhase>>,
    clock_text: &UseStateHandle<String>,
    ss_iv: &IntervalSlot,
    clock_iv: &IntervalSlot,
) {
    suspense.set(false);

    clock_text.set(format_clock());
    let clock_handle = {
        let clock_text = clock_text.clone();
        Interval::new(1000, move || clock_text.set(format_clock()))
    };
    *clock_iv.borrow_mut() = Some(clock_handle);

    let countdown = ScreenshotCountdown::with_duration(rec.screenshot_start, screenshot_secs);
    let phase = countdown.phase(js_sys::Date::now() as i64);
    ss_phase.set(Some(phase));
    if phase != ScreenshotPhase::Expired {
        let ss_phase = ss_phase.clone();
        let ss_slot = ss_iv.clone();
        let handle = Interval::new(1000, move || {
            let phase = countdown.phase(js_sys::Date::now() as i64);
            ss_phase.set(Some(phase));
            if phase == ScreenshotPhase::Expired {
                ss_slot.borrow_mut().take();
            }
        });
        *ss_iv.borrow_mut() = Some(handle);
    }
}
