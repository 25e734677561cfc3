use crate::constants::{CUE_ATTACK_SEC, CUE_MASTER_GAIN};
use std::cell::RefCell;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Named feedback sounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Add,
    Remove,
    Balance,
}

struct Tone {
    wave: web::OscillatorType,
    start_hz: f32,
    end_hz: f32,
    offset_sec: f64,
    duration_sec: f64,
    level: f32,
}

fn tones(cue: Cue) -> &'static [Tone] {
    const ADD: &[Tone] = &[Tone {
        wave: web::OscillatorType::Sine,
        start_hz: 440.0,
        end_hz: 660.0,
        offset_sec: 0.0,
        duration_sec: 0.12,
        level: 0.8,
    }];
    const REMOVE: &[Tone] = &[Tone {
        wave: web::OscillatorType::Triangle,
        start_hz: 330.0,
        end_hz: 165.0,
        offset_sec: 0.0,
        duration_sec: 0.16,
        level: 0.8,
    }];
    // C5 then E5, a small major-third chime
    const BALANCE: &[Tone] = &[
        Tone {
            wave: web::OscillatorType::Sine,
            start_hz: 523.0,
            end_hz: 523.0,
            offset_sec: 0.0,
            duration_sec: 0.14,
            level: 0.7,
        },
        Tone {
            wave: web::OscillatorType::Sine,
            start_hz: 659.0,
            end_hz: 659.0,
            offset_sec: 0.12,
            duration_sec: 0.22,
            level: 0.7,
        },
    ];
    match cue {
        Cue::Add => ADD,
        Cue::Remove => REMOVE,
        Cue::Balance => BALANCE,
    }
}

/// Lazily created audio graph. The context is only built on first use,
/// which always follows a user gesture, so autoplay policy lets it run.
/// Every failure is logged and dropped.
#[derive(Default)]
pub struct AudioCues {
    graph: RefCell<Option<(web::AudioContext, web::GainNode)>>,
}

impl AudioCues {
    fn ensure_graph(&self) -> Option<(web::AudioContext, web::GainNode)> {
        if let Some(g) = self.graph.borrow().as_ref() {
            return Some(g.clone());
        }
        let ctx = match web::AudioContext::new() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("[audio] AudioContext unavailable: {:?}", e);
                return None;
            }
        };
        let master = match web::GainNode::new(&ctx) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("[audio] master GainNode error: {:?}", e);
                return None;
            }
        };
        master.gain().set_value(CUE_MASTER_GAIN);
        _ = master.connect_with_audio_node(&ctx.destination());
        *self.graph.borrow_mut() = Some((ctx.clone(), master.clone()));
        Some((ctx, master))
    }

    fn resume(ctx: &web::AudioContext) {
        if ctx.state() == web::AudioContextState::Running {
            return;
        }
        if let Ok(promise) = ctx.resume() {
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] resume blocked: {:?}", e);
                }
            });
        }
    }

    pub fn play(&self, cue: Cue) {
        let Some((ctx, master)) = self.ensure_graph() else {
            return;
        };
        Self::resume(&ctx);
        let now = ctx.current_time();
        for tone in tones(cue) {
            trigger_tone(&ctx, &master, tone, now);
        }
    }
}

fn trigger_tone(ctx: &web::AudioContext, out: &web::GainNode, tone: &Tone, now: f64) {
    let Ok(src) = web::OscillatorNode::new(ctx) else {
        return;
    };
    let Ok(env) = web::GainNode::new(ctx) else {
        return;
    };
    let t0 = now + 0.005 + tone.offset_sec;
    let t1 = t0 + tone.duration_sec;
    src.set_type(tone.wave);
    _ = src.frequency().set_value_at_time(tone.start_hz, t0);
    if tone.end_hz != tone.start_hz {
        _ = src
            .frequency()
            .exponential_ramp_to_value_at_time(tone.end_hz, t1);
    }
    _ = env.gain().set_value_at_time(0.0, t0);
    _ = env
        .gain()
        .linear_ramp_to_value_at_time(tone.level, t0 + CUE_ATTACK_SEC);
    _ = env.gain().linear_ramp_to_value_at_time(0.0, t1);
    _ = src.connect_with_audio_node(&env);
    _ = env.connect_with_audio_node(out);
    _ = src.start_with_when(t0);
    _ = src.stop_with_when(t1 + 0.02);
}
