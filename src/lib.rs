#![cfg(target_arch = "wasm32")]
use crate::core::ToneMapper;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod core;
mod dom;
mod events;
mod reverb;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pointer-tones starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // No audio subsystem means nothing to do; fatal at construction.
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = audio_ctx.resume();

    let reverb = reverb::build_reverb(&audio_ctx)
        .map_err(|_| anyhow::anyhow!("reverb construction failed"))?;
    reverb::spawn_impulse_response_load(audio_ctx.clone(), reverb.clone());

    let mapper = Rc::new(RefCell::new(ToneMapper::new()));
    let generator = Rc::new(RefCell::new(None));

    events::wire_input_handlers(events::InputWiring {
        audio_ctx,
        reverb,
        mapper,
        generator,
    });

    Ok(())
}
