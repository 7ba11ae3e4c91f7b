use crate::model::MessageId;
use crate::state::{PressKind, PressTracker};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ImageBubbleProps {
    pub id: MessageId,
    pub url: Option<String>,
    pub archived: bool,
    pub on_open: Callback<MessageId>,
    pub on_archive: Callback<MessageId>,
}

#[function_component(ImageBubble)]
pub fn image_bubble(props: &ImageBubbleProps) -> Html {
    let press = use_mut_ref(PressTracker::default);

    let url = match (&props.url, props.archived) {
        (Some(url), false) => url.clone(),
        (_, true) => {
            return html! {<div style="font-style:italic; opacity:0.6;">{"Image archived"}</div>};
        }
        (None, false) => {
            return html! {<div style="font-style:italic; opacity:0.6;">{"Image unavailable"}</div>};
        }
    };

    let pointer_down = {
        let press = press.clone();
        Callback::from(move |_e: PointerEvent| {
            press.borrow_mut().begin(js_sys::Date::now());
        })
    };
    let pointer_up = {
        let press = press.clone();
        let id = props.id;
        let on_open = props.on_open.clone();
        let on_archive = props.on_archive.clone();
        Callback::from(move |_e: PointerEvent| {
            let kind = press.borrow_mut().finish(js_sys::Date::now());
            match kind {
                Some(PressKind::Tap) => on_open.emit(id),
                Some(PressKind::LongPress) => {
                    let confirmed = web_sys::window()
                        .map(|win| {
                            win.confirm_with_message("Archive this image? It can no longer be opened.")
                                .unwrap_or(false)
                        })
                        .unwrap_or(false);
                    if confirmed {
                        on_archive.emit(id);
                    }
                }
                None => {}
            }
        })
    };
    let pointer_cancel = {
        let press = press.clone();
        Callback::from(move |_e: PointerEvent| press.borrow_mut().cancel())
    };
    let context_menu = Callback::from(|e: MouseEvent| e.prevent_default());

    html! {
        <img src={url} alt="image message"
            onpointerdown={pointer_down}
            onpointerup={pointer_up}
            onpointerleave={pointer_cancel.clone()}
            onpointercancel={pointer_cancel}
            oncontextmenu={context_menu}
            style="max-width:220px; max-height:220px; border-radius:8px; display:block; cursor:zoom-in; user-select:none; -webkit-user-select:none; touch-action:manipulation;" />
    }
}
