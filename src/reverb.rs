use crate::core::IMPULSE_RESPONSE_URL;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Shared convolution reverb. One convolver is wired to the destination
/// for the process lifetime; every tone generator sends into it. The
/// `buffer` slot starts empty and is published once by the background
/// loader — until then the wet path is silent and generators are dry.
#[derive(Clone)]
pub struct ReverbUnit {
    pub convolver: web::ConvolverNode,
    pub buffer: Rc<RefCell<Option<web::AudioBuffer>>>,
}

pub fn build_reverb(audio_ctx: &web::AudioContext) -> Result<ReverbUnit, ()> {
    let convolver = web::ConvolverNode::new(audio_ctx).map_err(|e| {
        log::error!("ConvolverNode error: {:?}", e);
    })?;
    convolver.set_normalize(true);
    _ = convolver.connect_with_audio_node(&audio_ctx.destination());
    Ok(ReverbUnit {
        convolver,
        buffer: Rc::new(RefCell::new(None)),
    })
}

/// Fetch and decode the impulse response in the background. Nothing
/// awaits this: no retry, no timeout, and on failure the buffer stays
/// empty so output remains dry-only.
pub fn spawn_impulse_response_load(audio_ctx: web::AudioContext, reverb: ReverbUnit) {
    spawn_local(async move {
        match fetch_impulse_response(&audio_ctx).await {
            Ok(buf) => {
                reverb.convolver.set_buffer(Some(&buf));
                *reverb.buffer.borrow_mut() = Some(buf);
                log::info!("[reverb] impulse response loaded");
            }
            Err(e) => {
                log::warn!("[reverb] impulse response load failed: {:?}", e);
            }
        }
    });
}

async fn fetch_impulse_response(
    audio_ctx: &web::AudioContext,
) -> Result<web::AudioBuffer, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(IMPULSE_RESPONSE_URL)).await?;
    let resp: web::Response = resp_value.dyn_into()?;
    let array_buf_value = JsFuture::from(resp.array_buffer()?).await?;
    let array_buf: js_sys::ArrayBuffer = array_buf_value.dyn_into()?;
    let decoded = JsFuture::from(audio_ctx.decode_audio_data(&array_buf)?).await?;
    decoded.dyn_into::<web::AudioBuffer>()
}
