use super::constants::{
    MAJOR_SCALE, MIN_NOTE_INTERVAL_SEC, SPEED_THRESHOLD, VOLUME_MAX, VOLUME_SPAN,
};

/// Frequency and loudness for one triggered note.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoteParams {
    pub frequency_hz: f32,
    pub volume: f32,
}

pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}

#[inline]
pub fn move_speed(dx: f32, dy: f32) -> f32 {
    (dx * dx + dy * dy).sqrt()
}

/// Map a horizontal pixel position to an index into the scale.
///
/// The normalized position is clamped to [0, 1], so coordinates outside
/// the viewport select the nearest end of the scale rather than panicking.
/// Exact multiples of `viewport_w / 8` floor into the bucket they start.
pub fn scale_index(x: f32, viewport_w: f32) -> usize {
    let w = viewport_w.max(1.0);
    let u = (x / w).clamp(0.0, 1.0);
    let i = (u * MAJOR_SCALE.len() as f32).floor() as usize;
    i.min(MAJOR_SCALE.len() - 1)
}

/// Map a vertical pixel position to loudness: top of the viewport is
/// loudest (0.8), bottom is quietest (0.2), linear in between.
pub fn volume_for_y(y: f32, viewport_h: f32) -> f32 {
    let h = viewport_h.max(1.0);
    let v = (y / h).clamp(0.0, 1.0);
    VOLUME_MAX - v * VOLUME_SPAN
}

/// Pointer-to-tone state machine.
///
/// Tracks the playing flag and last-note timestamp; the event layer owns
/// one of these and turns its decisions into audio-graph calls. At most
/// one tone generator is alive at a time: `enter` reports creation only
/// when nothing is playing.
#[derive(Debug, Default)]
pub struct ToneMapper {
    playing: bool,
    last_note_time: f64,
}

impl ToneMapper {
    pub fn new() -> Self {
        Self {
            playing: false,
            last_note_time: 0.0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Pointer entered the viewport. Returns true when a generator should
    /// be created and started; false when already playing (idempotent).
    pub fn enter(&mut self) -> bool {
        if self.playing {
            return false;
        }
        self.playing = true;
        true
    }

    /// Pointer left the viewport. Returns true when the active generator
    /// should be faded out and stopped.
    pub fn leave(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        self.playing = false;
        true
    }

    /// Pointer moved. Gates on movement speed and note spacing, then maps
    /// position to note parameters. `now_sec` is the audio clock.
    pub fn on_move(
        &mut self,
        x: f32,
        y: f32,
        dx: f32,
        dy: f32,
        viewport_w: f32,
        viewport_h: f32,
        now_sec: f64,
    ) -> Option<NoteParams> {
        if !self.playing {
            return None;
        }
        let speed = move_speed(dx, dy);
        if speed <= SPEED_THRESHOLD || now_sec - self.last_note_time <= MIN_NOTE_INTERVAL_SEC {
            return None;
        }
        let note = MAJOR_SCALE[scale_index(x, viewport_w)];
        let params = NoteParams {
            frequency_hz: midi_to_hz(note as f32),
            volume: volume_for_y(y, viewport_h),
        };
        self.last_note_time = now_sec;
        Some(params)
    }
}
