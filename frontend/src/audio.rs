use web_sys::{AudioContext, OscillatorType};

/// Synthetic tick and win sounds over the Web Audio API. Every
/// failure path is silent: a blocked or unsupported audio context
/// just means the wheel spins without sound.
pub struct WheelAudio {
    ctx: Option<AudioContext>,
    enabled: bool,
}

impl WheelAudio {
    pub fn new() -> Self {
        Self {
            ctx: None,
            enabled: true,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The context is created lazily, on the first sound after a user
    /// gesture, so autoplay policies don't leave it permanently
    /// suspended.
    fn context(&mut self) -> Option<&AudioContext> {
        if self.ctx.is_none() {
            self.ctx = AudioContext::new().ok();
        }
        self.ctx.as_ref()
    }

    /// Short square-wave blip for a segment boundary crossing.
    pub fn play_tick(&mut self) {
        if !self.enabled {
            return;
        }
        if let Some(ctx) = self.context() {
            let _ = tone(ctx, OscillatorType::Square, 1200.0, 0.0, 0.06, 0.035, 0.038);
        }
    }

    /// Ascending five-note arpeggio on reveal.
    pub fn play_win(&mut self) {
        if !self.enabled {
            return;
        }
        if let Some(ctx) = self.context() {
            for (freq, offset) in [
                (523.0, 0.0),
                (659.0, 0.1),
                (784.0, 0.2),
                (1047.0, 0.32),
                (1319.0, 0.46),
            ] {
                let _ = tone(ctx, OscillatorType::Sine, freq, offset, 0.2, 0.4, 0.45);
            }
        }
    }
}

impl Default for WheelAudio {
    fn default() -> Self {
        Self::new()
    }
}

fn tone(
    ctx: &AudioContext,
    shape: OscillatorType,
    freq: f32,
    offset: f64,
    gain: f32,
    decay: f64,
    stop: f64,
) -> Option<()> {
    let osc = ctx.create_oscillator().ok()?;
    let amp = ctx.create_gain().ok()?;
    osc.connect_with_audio_node(&amp).ok()?;
    amp.connect_with_audio_node(&ctx.destination()).ok()?;
    osc.set_type(shape);

    let at = ctx.current_time() + offset;
    osc.frequency().set_value_at_time(freq, at).ok()?;
    amp.gain().set_value_at_time(gain, at).ok()?;
    amp.gain()
        .exponential_ramp_to_value_at_time(0.001, at + decay)
        .ok()?;
    osc.start_with_when(at).ok()?;
    osc.stop_with_when(at + stop).ok()?;
    Some(())
}
