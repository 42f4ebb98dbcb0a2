use folio_core::{
    expansion_scale, ClientRect, CloneLifecycle, ClonePlacement, ExitTrigger, GalleryConfig,
};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{dom, style};

type ExitListener = Closure<dyn FnMut(web::Event)>;

// One per hover. The exit listeners hold an Rc back to this struct; the cycle
// is broken at teardown when they are taken out and dropped after removal.
struct ActiveClone {
    preview: web::HtmlImageElement,
    original: web::HtmlImageElement,
    lifecycle: CloneLifecycle,
    on_leave: Option<ExitListener>,
    on_scroll: Option<ExitListener>,
}

/// Wire the hover zoom on every gallery image; returns how many were wired.
pub fn install(document: &web::Document, cfg: &GalleryConfig) -> usize {
    let cfg = Rc::new(cfg.clone());
    let mut count = 0;
    for el in dom::query_all(document, &cfg.image_selector) {
        let Ok(img) = el.dyn_into::<web::HtmlImageElement>() else {
            continue;
        };
        let doc = document.clone();
        let cfg = cfg.clone();
        let original = img.clone();
        dom::listen(&img, "mouseenter", move |_ev| {
            if let Err(e) = expand(&doc, &original, &cfg) {
                log::warn!("[hover] {:?}", e);
            }
        });
        count += 1;
    }
    count
}

fn expand(
    document: &web::Document,
    original: &web::HtmlImageElement,
    cfg: &GalleryConfig,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;

    let r = original.get_bounding_client_rect();
    let rect = ClientRect::new(r.top(), r.left(), r.width(), r.height());
    let scale = expansion_scale(rect.width(), dom::viewport_width(&window), cfg);
    let placement = ClonePlacement::new(rect, scale);

    let clone: web::HtmlImageElement = document
        .create_element("img")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("created element is not an img"))?;
    clone.set_src(&original.src());
    clone.set_class_name(&cfg.clone_class);
    dom::set_styles(&clone, &style::clone_anchor(&placement));
    body.append_child(&clone)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Flush layout so the transform below animates instead of being the
    // clone's initial state.
    let _ = clone.offset_width();
    dom::set_styles(&clone, &style::clone_expanded(&placement));

    let mut lifecycle = CloneLifecycle::new();
    lifecycle.expand();
    let state = Rc::new(RefCell::new(ActiveClone {
        preview: clone.clone(),
        original: original.clone(),
        lifecycle,
        on_leave: None,
        on_scroll: None,
    }));

    {
        let mut active = state.borrow_mut();
        active.on_leave = Some(exit_listener(&state, ExitTrigger::PointerLeave, cfg.teardown_ms));
        active.on_scroll = Some(exit_listener(&state, ExitTrigger::Scroll, cfg.teardown_ms));
    }

    if let Err(e) = arm(&state, &window) {
        disarm(&state, &window);
        return Err(anyhow::anyhow!("exit listeners: {:?}", e));
    }
    log::debug!("[hover] clone at {:?} scale {:.3}", rect, scale);
    Ok(())
}

fn arm(state: &Rc<RefCell<ActiveClone>>, window: &web::Window) -> Result<(), JsValue> {
    let active = state.borrow();
    if let Some(cb) = &active.on_leave {
        active
            .preview
            .add_event_listener_with_callback("mouseleave", cb.as_ref().unchecked_ref())?;
    }
    if let Some(cb) = &active.on_scroll {
        let once = web::AddEventListenerOptions::new();
        once.set_once(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            cb.as_ref().unchecked_ref(),
            &once,
        )?;
    }
    Ok(())
}

// Undo a half-armed clone: detach whatever listeners made it on, drop them to
// break the cycle, and take the clone out of the page immediately.
fn disarm(state: &Rc<RefCell<ActiveClone>>, window: &web::Window) {
    let mut active = state.borrow_mut();
    if let Some(cb) = active.on_leave.take() {
        let _ = active
            .preview
            .remove_event_listener_with_callback("mouseleave", cb.as_ref().unchecked_ref());
    }
    if let Some(cb) = active.on_scroll.take() {
        let _ = window.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
    }
    if active.lifecycle.abort() {
        active.preview.remove();
    }
    dom::set_styles(&active.original, &style::original_restored());
}

fn exit_listener(
    state: &Rc<RefCell<ActiveClone>>,
    trigger: ExitTrigger,
    teardown_ms: u32,
) -> ExitListener {
    let state = state.clone();
    Closure::wrap(
        Box::new(move |_ev: web::Event| retract(&state, trigger, teardown_ms))
            as Box<dyn FnMut(web::Event)>,
    )
}

fn retract(state: &Rc<RefCell<ActiveClone>>, trigger: ExitTrigger, teardown_ms: u32) {
    let mut active = state.borrow_mut();
    if !active.lifecycle.begin_teardown(trigger) {
        return;
    }
    log::debug!("[hover] retract on {:?}", trigger);
    dom::set_styles(&active.preview, &style::clone_retracting());
    dom::set_styles(&active.original, &style::original_restored());

    let on_leave = active.on_leave.take();
    let on_scroll = active.on_scroll.take();
    if let Some(cb) = &on_leave {
        let _ = active
            .preview
            .remove_event_listener_with_callback("mouseleave", cb.as_ref().unchecked_ref());
    }
    if let (Some(cb), Some(window)) = (&on_scroll, web::window()) {
        let _ = window.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
    }
    drop(active);

    // The listener running right now is one of these two, so they are dropped
    // from the timer rather than here.
    let state = state.clone();
    Timeout::new(teardown_ms, move || {
        {
            let mut active = state.borrow_mut();
            if active.lifecycle.finish() {
                if let Some(parent) = active.preview.parent_node() {
                    let _ = parent.remove_child(&active.preview);
                }
            }
        }
        drop((on_leave, on_scroll));
    })
    .forget();
}
