use super::{
    exercise_bubble::ExerciseBubble, image_bubble::ImageBubble,
    profile_form_bubble::ProfileFormBubble, recommendation_bubble::RecommendationBubble,
    text_bubble::TextBubble,
};
use crate::model::{Message, MessageId, MessageKind};
use crate::util::format_message_time;
use crate::validation::ProfileSubmission;
use chrono::NaiveDateTime;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MessageBubbleProps {
    pub message: Message,
    pub mine: bool,
    pub now: NaiveDateTime,
    pub on_open_image: Callback<MessageId>,
    pub on_archive: Callback<MessageId>,
    pub on_submit_profile: Callback<(MessageId, ProfileSubmission)>,
}

#[function_component(MessageBubble)]
pub fn message_bubble(props: &MessageBubbleProps) -> Html {
    let m = &props.message;
    let content = match &m.kind {
        MessageKind::Text { body } => html! { <TextBubble body={body.clone()} /> },
        MessageKind::Image { url } => html! { <ImageBubble
            id={m.id}
            url={url.clone()}
            archived={m.archived}
            on_open={props.on_open_image.clone()}
            on_archive={props.on_archive.clone()}
        /> },
        MessageKind::ExerciseRecord(record) => html! { <ExerciseBubble record={record.clone()} /> },
        MessageKind::ProfileForm { submitted } => html! { <ProfileFormBubble
            id={m.id}
            submitted={*submitted}
            mine={props.mine}
            on_submit={props.on_submit_profile.clone()}
        /> },
        MessageKind::ExpertRecommendation(r) => html! { <RecommendationBubble recommendation={r.clone()} /> },
    };
    let (align, bg) = if props.mine {
        ("flex-end", "#1f6feb")
    } else {
        ("flex-start", "#21262d")
    };
    let time = format_message_time(&m.created_at, props.now);
    html! {<div style={format!("display:flex; flex-direction:column; align-items:{}; gap:2px;", align)}>
        <div style={format!("background:{}; border-radius:12px; padding:8px 12px; max-width:75%;", bg)}>
            { content }
        </div>
        <div style="font-size:11px; opacity:0.6; display:flex; gap:6px;">
            if props.mine && m.is_read() {
                <span>{"Read"}</span>
            }
            <span>{ time }</span>
        </div>
    </div>}
}
