use circle_core::share::{SHARE_TITLE, can_share, copy_text, share_text};
use js_sys::{Function, Object, Promise, Reflect};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, Window};

use crate::constants::{NOTIFICATION_ID, NOTIFICATION_MS};
use crate::utils::{element, log};

// Characters left alone by JavaScript's encodeURIComponent.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Show `message` in the notification banner for a couple of seconds.
pub fn show_notification(window: &Window, document: &Document, message: &str) {
    let Some(el) = element::<HtmlElement>(document, NOTIFICATION_ID) else {
        log(message);
        return;
    };
    el.set_inner_text(message);
    let _ = el.class_list().add_1("show");
    let hide = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let _ = el.class_list().remove_1("show");
    }));
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        hide.as_ref().unchecked_ref(),
        NOTIFICATION_MS,
    ) {
        log(&format!("Failed to schedule notification hide: {:?}", e));
    }
    hide.forget();
}

// Look up a method on `target`, if the browser provides it.
fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Share via the Web Share API, falling back to a tweet intent.
pub fn share_score(window: &Window, document: &Document, score: f64) -> Result<(), JsValue> {
    if !can_share(score) {
        show_notification(window, document, "Draw a circle first!");
        return Ok(());
    }
    let text = share_text(score);
    let nav = window.navigator();
    if let Some(share) = method(nav.as_ref(), "share") {
        let data = Object::new();
        Reflect::set(&data, &"title".into(), &SHARE_TITLE.into())?;
        Reflect::set(&data, &"text".into(), &text.as_str().into())?;
        Reflect::set(&data, &"url".into(), &window.location().href()?.into())?;
        let promise: Promise = share.call1(nav.as_ref(), &data)?.dyn_into()?;
        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => log("Shared successfully"),
                Err(e) => log(&format!("Error sharing: {:?}", e)),
            }
        });
    } else {
        let url = format!(
            "https://twitter.com/intent/tweet?text={}",
            utf8_percent_encode(&text, URI_COMPONENT)
        );
        window.open_with_url_and_target(&url, "_blank")?;
    }
    Ok(())
}

/// Copy the score message to the clipboard.
pub fn copy_score(window: &Window, document: &Document, score: f64) -> Result<(), JsValue> {
    if !can_share(score) {
        show_notification(window, document, "Draw a circle first!");
        return Ok(());
    }
    let text = copy_text(score);
    let clipboard = Reflect::get(window.navigator().as_ref(), &"clipboard".into())?;
    let Some(write_text) = method(&clipboard, "writeText") else {
        show_notification(window, document, "Failed to copy!");
        return Ok(());
    };
    let promise: Promise = write_text
        .call1(&clipboard, &text.as_str().into())?
        .dyn_into()?;
    let win = window.clone();
    let doc = document.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => show_notification(&win, &doc, "Copied to clipboard!"),
            Err(e) => {
                show_notification(&win, &doc, "Failed to copy!");
                log(&format!("Could not copy text: {:?}", e));
            }
        }
    });
    Ok(())
}
