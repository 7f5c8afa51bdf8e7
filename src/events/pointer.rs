use crate::audio::{self, ToneGenerator};
use crate::core::ToneMapper;
use crate::dom;
use crate::reverb::ReverbUnit;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub audio_ctx: web::AudioContext,
    pub reverb: ReverbUnit,
    pub mapper: Rc<RefCell<ToneMapper>>,
    pub generator: Rc<RefCell<Option<ToneGenerator>>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerenter(&w);
    wire_pointerleave(&w);
    wire_pointermove(&w);
}

fn wire_pointerenter(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        if !w.mapper.borrow_mut().enter() {
            return;
        }
        // Autoplay policies keep the context suspended until a gesture.
        _ = w.audio_ctx.resume();
        match audio::build_tone_generator(&w.audio_ctx, &w.reverb.convolver) {
            Ok(tone) => {
                tone.start();
                *w.generator.borrow_mut() = Some(tone);
                if w.reverb.buffer.borrow().is_none() {
                    log::info!("[pointer] enter: tone generator started (reverb not loaded yet, dry only)");
                } else {
                    log::info!("[pointer] enter: tone generator started");
                }
            }
            Err(_) => {
                // Keep the invariant consistent with the audible state.
                _ = w.mapper.borrow_mut().leave();
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(doc) = dom::window_document() {
        _ = doc.add_event_listener_with_callback("pointerenter", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        if !w.mapper.borrow_mut().leave() {
            return;
        }
        if let Some(tone) = w.generator.borrow_mut().take() {
            tone.fade_out();
            log::info!("[pointer] leave: tone generator released");
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(doc) = dom::window_document() {
        _ = doc.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (vw, vh) = dom::viewport_size();
        let now = w.audio_ctx.current_time();
        let params = w.mapper.borrow_mut().on_move(
            ev.client_x() as f32,
            ev.client_y() as f32,
            ev.movement_x() as f32,
            ev.movement_y() as f32,
            vw,
            vh,
            now,
        );
        if let Some(p) = params {
            if let Some(tone) = w.generator.borrow().as_ref() {
                tone.set_frequency(p.frequency_hz);
                tone.trigger(p.volume);
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(doc) = dom::window_document() {
        _ = doc.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
