use chrono::{Local, TimeZone};
use shared::screenshot::ScreenshotPhase;
use yew::prelude::*;

use crate::styles;

/// `HH:MM:SS` with zero padding, clamped at zero.
pub fn format_lock_time(remaining_ms: i64) -> String {
    let total_secs = remaining_ms.max(0) / 1000;
    format!(
        "{:02}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    )
}

/// Locale-ish date string for the metadata grid.
pub fn format_spin_date(epoch_ms: i64) -> String {
    match Local.timestamp_millis_opt(epoch_ms).single() {
        Some(dt) => dt.format("%B %d, %Y").to_string(),
        None => String::new(),
    }
}

/// Current wall-clock time for the live clock line.
pub fn format_clock() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub spinning: bool,
    pub locked: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let label = if props.spinning {
        "Spinning..."
    } else if props.locked {
        "Locked"
    } else {
        "Spin the Wheel"
    };

    html! {
        <button
            class={styles::SPIN_BUTTON}
            disabled={props.spinning || props.locked}
            onclick={props.onclick.clone()}
        >
            { label }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub visible: bool,
    pub suspense: bool,
    pub discount: String,
    pub session_id: String,
    pub spin_date: String,
    pub clock: String,
    pub screenshot: Option<ScreenshotPhase>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    if !props.visible {
        return html! {};
    }

    if props.suspense {
        return html! {
            <div class={styles::RESULT_PANEL}>
                <p class={styles::SUSPENSE}>{"Calculating your reward..."}</p>
            </div>
        };
    }

    html! {
        <div class={styles::RESULT_PANEL}>
            <p class={styles::WIN_TEXT}>
                { format!("🎉 Congratulations! You won a {} discount!", props.discount) }
            </p>
            <div class={styles::META_GRID}>
                <div class={styles::META_CELL}>
                    <span class={styles::META_LABEL}>{"Session"}</span>
                    { &props.session_id }
                </div>
                <div class={styles::META_CELL}>
                    <span class={styles::META_LABEL}>{"Date"}</span>
                    { &props.spin_date }
                </div>
                <div class={styles::META_CELL}>
                    <span class={styles::META_LABEL}>{"Time"}</span>
                    { &props.clock }
                </div>
            </div>
            { screenshot_view(props.screenshot) }
        </div>
    }
}

fn screenshot_view(phase: Option<ScreenshotPhase>) -> Html {
    match phase {
        Some(ScreenshotPhase::Active(secs)) => html! {
            <p class={styles::SS_WRAP}>
                {"Screenshot this offer within "}
                <span class={styles::SS_COUNT}>{ secs }</span>
                {" seconds"}
            </p>
        },
        Some(ScreenshotPhase::Urgent(secs)) => html! {
            <p class={styles::SS_WRAP}>
                {"Screenshot this offer within "}
                <span class={styles::SS_COUNT_DANGER}>{ secs }</span>
                {" seconds"}
            </p>
        },
        Some(ScreenshotPhase::Expired) => html! {
            <p class={styles::EXPIRED}>{"⌛ Screenshot window expired."}</p>
        },
        None => html! {},
    }
}
