use crate::model::Recommendation;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RecommendationBubbleProps {
    pub recommendation: Recommendation,
}

#[function_component(RecommendationBubble)]
pub fn recommendation_bubble(props: &RecommendationBubbleProps) -> Html {
    let r = &props.recommendation;
    html! {<div style="display:flex; flex-direction:column; gap:6px; border-left:3px solid #d4af37; padding-left:8px;">
        <div style="font-size:11px; opacity:0.7;">{ format!("Recommended by {}", r.expert_name) }</div>
        <div style="font-weight:600;">{ r.title.clone() }</div>
        <div style="white-space:pre-wrap;">{ r.note.clone() }</div>
        if let Some(link) = r.link.clone() {
            <a href={link} target="_blank" rel="noopener noreferrer" style="color:#58a6ff; font-size:13px;">{"Open plan"}</a>
        }
    </div>}
}
