use crate::link::{Segment, extract_link, split_links};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TextBubbleProps {
    pub body: String,
}

#[function_component(TextBubble)]
pub fn text_bubble(props: &TextBubbleProps) -> Html {
    let preview = extract_link(&props.body);
    html! {<div style="display:flex; flex-direction:column; gap:6px;">
        <span style="white-space:pre-wrap; word-break:break-word;">
            { for split_links(&props.body).into_iter().map(|seg| match seg {
                Segment::Text(t) => html! { { t } },
                Segment::Link(url) => html! {
                    <a href={url.clone()} target="_blank" rel="noopener noreferrer" style="color:#58a6ff;">{ url }</a>
                },
            }) }
        </span>
        if let Some(link) = preview {
            <a href={link.url.clone()} target="_blank" rel="noopener noreferrer"
                style="display:block; border-left:3px solid #58a6ff; padding:4px 8px; background:rgba(88,166,255,0.08); border-radius:4px; text-decoration:none; color:inherit;">
                <div style="font-size:12px; font-weight:600;">{ link.domain }</div>
                <div style="font-size:11px; opacity:0.7; overflow:hidden; text-overflow:ellipsis; white-space:nowrap;">{ link.url }</div>
            </a>
        }
    </div>}
}
