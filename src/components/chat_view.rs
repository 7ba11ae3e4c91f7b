use super::{
    image_viewer::ImageViewer, message_bubble::MessageBubble, notice_banner::NoticeBanner,
    profile_header::ProfileHeader,
};
use crate::model::{ChatAction, ChatState, MessageId};
use crate::util::now_local;
use crate::validation::ProfileSubmission;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ChatViewProps {
    pub chat: UseReducerHandle<ChatState>,
    pub current_user_id: String,
    pub on_refresh: Callback<()>,
    pub on_archive: Callback<MessageId>,
    pub on_submit_profile: Callback<(MessageId, ProfileSubmission)>,
    pub to_leaderboard: Callback<()>,
}

#[function_component(ChatView)]
pub fn chat_view(props: &ChatViewProps) -> Html {
    let chat = props.chat.clone();
    // Recomputed on each render; polling re-renders often enough for minute labels.
    let now = now_local();

    let open_image = {
        let chat = chat.clone();
        Callback::from(move |id: MessageId| chat.dispatch(ChatAction::OpenViewer { id }))
    };
    let close_viewer = {
        let chat = chat.clone();
        Callback::from(move |_| chat.dispatch(ChatAction::CloseViewer))
    };
    let dismiss_notice = {
        let chat = chat.clone();
        Callback::from(move |_| chat.dispatch(ChatAction::DismissNotice))
    };
    let archive_open = {
        let cb = props.on_archive.clone();
        let viewer = chat.viewer;
        Callback::from(move |_| {
            if let Some(id) = viewer {
                cb.emit(id);
            }
        })
    };

    html! {<div style="position:relative; display:flex; flex-direction:column; height:100vh; background:#0d1117; color:#c9d1d9;">
        <ProfileHeader
            profile={chat.counterpart.clone()}
            on_refresh={props.on_refresh.clone()}
            on_leaderboard={props.to_leaderboard.clone()}
        />
        <div style="flex:1; overflow-y:auto; padding:12px; display:flex; flex-direction:column; gap:10px;">
            if chat.messages.is_empty() {
                <div style="margin:auto; opacity:0.6;">{"No messages yet."}</div>
            }
            { for chat.messages.iter().map(|m| html! {
                <MessageBubble
                    key={m.id}
                    message={m.clone()}
                    mine={m.sender_id == props.current_user_id}
                    now={now}
                    on_open_image={open_image.clone()}
                    on_archive={props.on_archive.clone()}
                    on_submit_profile={props.on_submit_profile.clone()}
                />
            }) }
        </div>
        <NoticeBanner notice={chat.notice.clone()} on_dismiss={dismiss_notice} />
        if let (Some(id), Some(url)) = (chat.viewer, chat.viewer_url()) {
            <ImageViewer
                key={id}
                url={url.to_string()}
                on_close={close_viewer}
                on_archive={archive_open}
            />
        }
    </div>}
}
