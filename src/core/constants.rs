/// Mapping and synthesis tuning constants.
///
/// These constants express intended behavior (thresholds, envelope
/// timings, harmonic weights) and keep magic numbers out of the code.
// C major scale, C4..C5, as MIDI note numbers
pub const MAJOR_SCALE: [i32; 8] = [60, 62, 64, 65, 67, 69, 71, 72];

// Minimum pointer speed (px per event) that can trigger a note
pub const SPEED_THRESHOLD: f32 = 5.0;

// Minimum spacing between triggered notes (audio-clock seconds)
pub const MIN_NOTE_INTERVAL_SEC: f64 = 0.1;

// Vertical volume mapping: top of viewport -> VOLUME_MAX,
// bottom -> VOLUME_MAX - VOLUME_SPAN
pub const VOLUME_MAX: f32 = 0.8;
pub const VOLUME_SPAN: f32 = 0.6;

// Per-note envelope: full volume at the trigger instant, then linear
// decay to volume * NOTE_DECAY_RATIO over NOTE_DECAY_SEC
pub const NOTE_DECAY_RATIO: f32 = 0.3;
pub const NOTE_DECAY_SEC: f64 = 0.1;

// Master gain ramp length on pointer-leave (seconds)
pub const FADE_OUT_SEC: f64 = 0.1;

// Oscillator bank: partial amplitudes and frequency multiples relative
// to the fundamental (octave and two octaves up)
pub const OSC_WEIGHTS: [f32; 3] = [0.5, 0.2, 0.1];
pub const OSC_HARMONICS: [f32; 3] = [1.0, 2.0, 4.0];

// Impulse response for the shared convolution reverb
pub const IMPULSE_RESPONSE_URL: &str =
    "https://raw.githubusercontent.com/cwilso/AudioRecorder/master/sounds/impulse-responses/hall-reverb.wav";
