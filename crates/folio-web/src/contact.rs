use folio_core::{
    check_endpoint, classify_response, ContactConfig, FormMethod, StatusMessage, SubmitError,
};
use gloo_net::http::Request;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::{dom, style};

fn show(status: Option<&web::HtmlElement>, message: &StatusMessage) {
    match status {
        Some(el) => {
            dom::set_styles(el, &style::status(message.tone));
            el.set_text_content(Some(&message.text));
        }
        None => log::info!("[contact] {}", message.text),
    }
}

async fn send(form: &web::HtmlFormElement, action: &str) -> Result<(), SubmitError> {
    let data = web::FormData::new_with_form(form)
        .map_err(|e| SubmitError::Transport(format!("{:?}", e)))?;
    let builder = match FormMethod::parse(&form.method()) {
        FormMethod::Get => Request::get(action),
        FormMethod::Post => Request::post(action),
    };
    let response = builder
        .header("Accept", "application/json")
        .body(data)
        .map_err(|e| SubmitError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    classify_response(status, &body)
}

async fn submit(
    form: web::HtmlFormElement,
    status: Option<web::HtmlElement>,
    cfg: Rc<ContactConfig>,
) {
    let action = form.action();
    if let Err(err) = check_endpoint(&action, &cfg.placeholder_token) {
        log::warn!("[contact] {}", err);
        show(status.as_ref(), &StatusMessage::for_outcome(&Err(err), &cfg.messages));
        return;
    }

    show(status.as_ref(), &StatusMessage::pending(&cfg.messages));
    let outcome = send(&form, &action).await;
    match &outcome {
        Ok(()) => {
            log::info!("[contact] message delivered");
            form.reset();
        }
        Err(err) => log::warn!("[contact] submit failed: {}", err),
    }
    show(status.as_ref(), &StatusMessage::for_outcome(&outcome, &cfg.messages));
}

pub fn install(document: &web::Document, cfg: &ContactConfig) -> bool {
    let Some(form) = document
        .get_element_by_id(&cfg.form_id)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::debug!("[contact] #{} missing", cfg.form_id);
        return false;
    };
    let status = document
        .get_element_by_id(&cfg.status_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());

    let cfg = Rc::new(cfg.clone());
    let form_submit = form.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        spawn_local(submit(form_submit.clone(), status.clone(), cfg.clone()));
    });
    true
}
