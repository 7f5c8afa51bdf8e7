use crate::core::{FADE_OUT_SEC, NOTE_DECAY_RATIO, NOTE_DECAY_SEC, OSC_HARMONICS, OSC_WEIGHTS};
use web_sys as web;

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

/// One active tone: a small additive bank of three oscillators (triangle
/// fundamental plus two sine partials an octave and two octaves up),
/// weighted and summed into a master gain.
///
/// The master fans out both to the shared reverb input and directly to
/// the destination, so the wet and dry paths run in parallel. Instances
/// are single-use: once stopped, the oscillators cannot be restarted.
pub struct ToneGenerator {
    audio_ctx: web::AudioContext,
    oscillators: [web::OscillatorNode; 3],
    master_gain: web::GainNode,
}

pub fn build_tone_generator(
    audio_ctx: &web::AudioContext,
    reverb_in: &web::ConvolverNode,
) -> Result<ToneGenerator, ()> {
    let shapes = [
        web::OscillatorType::Triangle,
        web::OscillatorType::Sine,
        web::OscillatorType::Sine,
    ];

    let mut oscillators: Vec<web::OscillatorNode> = Vec::with_capacity(shapes.len());
    let master_gain = create_gain(audio_ctx, 1.0, "master")?;

    for (i, shape) in shapes.iter().enumerate() {
        let osc = web::OscillatorNode::new(audio_ctx).map_err(|e| {
            log::error!("OscillatorNode error: {:?}", e);
        })?;
        osc.set_type(*shape);

        let partial = create_gain(audio_ctx, OSC_WEIGHTS[i], "partial")?;
        _ = osc.connect_with_audio_node(&partial);
        _ = partial.connect_with_audio_node(&master_gain);
        oscillators.push(osc);
    }

    // Parallel dry/wet: unity dry to the device, wet through the shared
    // convolver (which is already wired to the destination).
    _ = master_gain.connect_with_audio_node(reverb_in);
    _ = master_gain.connect_with_audio_node(&audio_ctx.destination());

    let oscillators: [web::OscillatorNode; 3] = match oscillators.try_into() {
        Ok(a) => a,
        Err(_) => return Err(()),
    };

    Ok(ToneGenerator {
        audio_ctx: audio_ctx.clone(),
        oscillators,
        master_gain,
    })
}

impl ToneGenerator {
    /// Start all oscillators. Call exactly once, before any frequency or
    /// envelope changes take audible effect.
    pub fn start(&self) {
        for osc in &self.oscillators {
            _ = osc.start();
        }
    }

    pub fn stop(&self) {
        for osc in &self.oscillators {
            _ = osc.stop();
        }
    }

    /// Set the fundamental; the two partials follow at their harmonic
    /// multiples. Takes effect at the current audio clock, not ramped.
    pub fn set_frequency(&self, freq: f32) {
        let now = self.audio_ctx.current_time();
        for (osc, mult) in self.oscillators.iter().zip(OSC_HARMONICS) {
            _ = osc.frequency().set_value_at_time(freq * mult, now);
        }
    }

    /// Per-note envelope: jump to `volume` now, then decay linearly to
    /// `volume * NOTE_DECAY_RATIO` for a percussive articulation.
    pub fn trigger(&self, volume: f32) {
        let now = self.audio_ctx.current_time();
        let gain = self.master_gain.gain();
        _ = gain.set_value_at_time(volume, now);
        _ = gain.linear_ramp_to_value_at_time(volume * NOTE_DECAY_RATIO, now + NOTE_DECAY_SEC);
    }

    /// Ramp the master gain to zero over `FADE_OUT_SEC`, then stop. The
    /// stop is issued immediately rather than after the ramp completes;
    /// the abrupt cutoff is kept as-is.
    pub fn fade_out(&self) {
        let now = self.audio_ctx.current_time();
        _ = self
            .master_gain
            .gain()
            .linear_ramp_to_value_at_time(0.0, now + FADE_OUT_SEC);
        self.stop();
    }
}
