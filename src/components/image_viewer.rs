use crate::state::{GestureEngine, TouchPhase, TouchPoint, Transform, touches_from_event};
use yew::prelude::*;

/// Identifier used when a mouse drives the engine as a single touch.
const MOUSE_TOUCH_ID: i32 = -1;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageViewerProps {
    pub url: String,
    pub on_close: Callback<()>,
    pub on_archive: Callback<()>,
}

#[function_component(ImageViewer)]
pub fn image_viewer(props: &ImageViewerProps) -> Html {
    // Fresh per mount; the viewer is keyed by message id so every open starts at identity.
    let engine = use_mut_ref(GestureEngine::new);
    let transform = use_state(Transform::identity);

    let on_touch = |phase: TouchPhase| {
        let engine = engine.clone();
        let transform = transform.clone();
        Callback::from(move |e: TouchEvent| {
            let touches = touches_from_event(&e);
            let t = engine.borrow_mut().handle(phase, &touches);
            transform.set(t);
        })
    };
    let on_mouse = |phase: TouchPhase| {
        let engine = engine.clone();
        let transform = transform.clone();
        Callback::from(move |e: MouseEvent| {
            if phase == TouchPhase::Move && e.buttons() == 0 {
                return;
            }
            let touches = match phase {
                TouchPhase::Start | TouchPhase::Move => {
                    vec![TouchPoint::new(MOUSE_TOUCH_ID, e.page_x() as f64, e.page_y() as f64)]
                }
                TouchPhase::End | TouchPhase::Terminate => Vec::new(),
            };
            let mut eng = engine.borrow_mut();
            if phase == TouchPhase::End && eng.is_idle() {
                return;
            }
            let t = eng.handle(phase, &touches);
            transform.set(t);
        })
    };
    let close_cb = {
        let engine = engine.clone();
        let transform = transform.clone();
        let cb = props.on_close.clone();
        Callback::from(move |_| {
            engine.borrow_mut().reset();
            transform.set(Transform::identity());
            cb.emit(());
        })
    };
    let archive_cb = {
        let cb = props.on_archive.clone();
        Callback::from(move |_| {
            let confirmed = web_sys::window()
                .map(|win| win.confirm_with_message("Archive this image?").unwrap_or(false))
                .unwrap_or(false);
            if confirmed {
                cb.emit(());
            }
        })
    };

    let (cursor, zoom_label) = {
        let eng = engine.borrow();
        let cursor = if eng.is_pinching() {
            "zoom-in"
        } else if eng.is_panning() {
            "grabbing"
        } else {
            "grab"
        };
        (cursor, format!("{:.0}%", eng.scale() * 100.0))
    };

    html! {<div style="position:absolute; inset:0; background:rgba(0,0,0,0.92); z-index:50; overflow:hidden;">
        <div style="position:absolute; top:16px; left:16px; font-size:12px; opacity:0.7; z-index:51;">{ zoom_label }</div>
        <div style="position:absolute; top:12px; right:12px; display:flex; gap:8px; z-index:51;">
            <button onclick={archive_cb} style="padding:4px 10px;">{"Archive"}</button>
            <button onclick={close_cb} style="padding:4px 10px;">{"Close"}</button>
        </div>
        <div
            ontouchstart={on_touch(TouchPhase::Start)}
            ontouchmove={on_touch(TouchPhase::Move)}
            ontouchend={on_touch(TouchPhase::End)}
            ontouchcancel={on_touch(TouchPhase::Terminate)}
            onmousedown={on_mouse(TouchPhase::Start)}
            onmousemove={on_mouse(TouchPhase::Move)}
            onmouseup={on_mouse(TouchPhase::End)}
            onmouseleave={on_mouse(TouchPhase::End)}
            style={format!("position:absolute; inset:0; display:flex; align-items:center; justify-content:center; touch-action:none; user-select:none; cursor:{};", cursor)}>
            <img src={props.url.clone()} alt="full-size image" draggable="false"
                style={format!("max-width:100%; max-height:100%; transform-origin:center center; transform:{};", transform.css())} />
        </div>
    </div>}
}
