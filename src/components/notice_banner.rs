use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NoticeBannerProps {
    pub notice: Option<String>,
    pub on_dismiss: Callback<()>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let Some(text) = props.notice.clone() else {
        return html! {};
    };
    let dismiss_cb = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); background:rgba(0,0,0,0.85); border:1px solid #f85149; border-radius:8px; padding:8px 14px; display:flex; gap:12px; align-items:center; z-index:60; font-size:13px;">
        <span>{ text }</span>
        <button onclick={dismiss_cb} style="padding:2px 8px;">{"OK"}</button>
    </div>}
}
