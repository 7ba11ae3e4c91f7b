use super::{chat_view::ChatView, leaderboard_panel::LeaderboardPanel};
use crate::api::ApiClient;
use crate::config::Settings;
use crate::model::{ChatAction, ChatState, MessageId};
use crate::validation::ProfileSubmission;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(PartialEq, Clone)]
enum View {
    Chat,
    Leaderboard,
}

fn refresh_messages(api: ApiClient, room_id: String, chat: UseReducerHandle<ChatState>) {
    spawn_local(async move {
        match api.fetch_messages(&room_id).await {
            Ok(messages) => chat.dispatch(ChatAction::Loaded(messages)),
            Err(e) => log::warn!("fetching messages for room {room_id}: {e}"),
        }
    });
}

fn refresh_leaderboard(api: ApiClient, chat: UseReducerHandle<ChatState>) {
    spawn_local(async move {
        match api.fetch_leaderboard().await {
            Ok(entries) => chat.dispatch(ChatAction::LeaderboardLoaded(entries)),
            Err(e) => log::warn!("fetching leaderboard: {e}"),
        }
    });
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Chat);
    let settings = use_state(Settings::load);
    let api = ApiClient::new(settings.api_base_url.clone());
    let chat = use_reducer(ChatState::default);

    // Initial load, counterpart profile and polling
    {
        let api = api.clone();
        let chat = chat.clone();
        let settings = (*settings).clone();
        use_effect_with((), move |_| {
            log::info!("chat room {} polling every {}ms", settings.room_id, settings.poll_interval_ms);
            refresh_messages(api.clone(), settings.room_id.clone(), chat.clone());
            if !settings.counterpart_id.is_empty() {
                let api = api.clone();
                let chat = chat.clone();
                let user = settings.counterpart_id.clone();
                spawn_local(async move {
                    match api.fetch_profile(&user).await {
                        Ok(profile) => chat.dispatch(ChatAction::ProfileLoaded(profile)),
                        Err(e) => log::warn!("fetching profile {user}: {e}"),
                    }
                });
            }
            let tick = {
                let room_id = settings.room_id.clone();
                Closure::wrap(Box::new(move || {
                    refresh_messages(api.clone(), room_id.clone(), chat.clone());
                }) as Box<dyn FnMut()>)
            };
            let window = web_sys::window();
            let tick_id = window.as_ref().and_then(|win| {
                win.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    settings.poll_interval_ms as i32,
                )
                .ok()
            });
            move || {
                if let (Some(win), Some(id)) = (window, tick_id) {
                    win.clear_interval_with_handle(id);
                }
                let _keep_alive = &tick;
            }
        });
    }

    let refresh = {
        let api = api.clone();
        let chat = chat.clone();
        let room_id = settings.room_id.clone();
        Callback::from(move |_| refresh_messages(api.clone(), room_id.clone(), chat.clone()))
    };
    let to_chat = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Chat))
    };
    let to_leaderboard = {
        let view = view.clone();
        let api = api.clone();
        let chat = chat.clone();
        Callback::from(move |_| {
            refresh_leaderboard(api.clone(), chat.clone());
            view.set(View::Leaderboard);
        })
    };

    // Archive: flag flips locally only once the backend confirms
    let archive = {
        let api = api.clone();
        let chat = chat.clone();
        Callback::from(move |id: MessageId| {
            let api = api.clone();
            let chat = chat.clone();
            spawn_local(async move {
                match api.archive_message(id).await {
                    Ok(()) => chat.dispatch(ChatAction::ArchiveSucceeded { id }),
                    Err(e) => {
                        log::warn!("archive message {id}: {e}");
                        chat.dispatch(ChatAction::ArchiveFailed { id });
                    }
                }
            });
        })
    };
    let submit_profile = {
        let api = api.clone();
        let chat = chat.clone();
        Callback::from(move |(id, form): (MessageId, ProfileSubmission)| {
            let api = api.clone();
            let chat = chat.clone();
            spawn_local(async move {
                match api.submit_profile(id, &form).await {
                    Ok(()) => chat.dispatch(ChatAction::ProfileSubmitted { id }),
                    Err(e) => {
                        log::warn!("submit profile for message {id}: {e}");
                        chat.dispatch(ChatAction::Notify(
                            "Could not submit your profile. Please try again.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    match *view {
        View::Chat => html! { <ChatView
            chat={chat.clone()}
            current_user_id={settings.current_user_id.clone()}
            on_refresh={refresh}
            on_archive={archive}
            on_submit_profile={submit_profile}
            to_leaderboard={to_leaderboard}
        /> },
        View::Leaderboard => html! {<div style="min-height:100vh; background:#0d1117; color:#c9d1d9;">
            <LeaderboardPanel
                entries={chat.leaderboard.clone()}
                current_user_id={settings.current_user_id.clone()}
                to_chat={to_chat}
            />
        </div>},
    }
}
