pub mod audio;
pub mod components;
pub mod config;
pub mod storage;
pub mod styles;
pub mod widget;

use yew::prelude::*;

use crate::components::ParticleBackground;
use crate::widget::SpinWidget;

#[function_component(App)]
pub fn app() -> Html {
    // Variant resolution happens once; the widget tree never swaps
    // its config mid-session.
    let config = use_memo((), |_| config::resolve_variant());

    html! {
        <div class={styles::PAGE}>
            <ParticleBackground
                desktop_count={config.desktop_particles}
                mobile_count={config.mobile_particles}
                pause_when_hidden={config.pause_when_hidden}
            />
            <SpinWidget config={(*config).clone()} />
        </div>
    }
}
