use crate::core::preload::{join_ready, PreloadReport};
use crate::core::SketchError;
use std::future::Future;
use std::pin::Pin;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

type Signal = Pin<Box<dyn Future<Output = Result<(), SketchError>>>>;

fn promise_signal(promise: Result<js_sys::Promise, wasm_bindgen::JsValue>, what: String) -> Signal {
    Box::pin(async move {
        let promise = promise.map_err(|e| SketchError::AssetLoadFailure(format!("{}: {:?}", what, e)))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| SketchError::AssetLoadFailure(format!("{}: {:?}", what, e)))
    })
}

/// Wait for web fonts and for every image to decode.
///
/// Index 0 of the report is the font signal; image `i` is at `i + 1`.
pub async fn fonts_and_images(document: &web::Document, images: &[web::HtmlImageElement]) -> PreloadReport {
    let mut signals: Vec<Signal> = Vec::with_capacity(images.len() + 1);
    signals.push(promise_signal(document.fonts().ready(), "document.fonts".to_string()));
    for img in images {
        signals.push(promise_signal(Ok(img.decode()), format!("image {}", img.src())));
    }
    let report = join_ready(signals).await;
    log::info!(
        "[preload] {} ready, {} failed",
        report.ready.len(),
        report.failed.len()
    );
    report
}
