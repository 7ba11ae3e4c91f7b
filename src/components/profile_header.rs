use crate::model::Profile;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProfileHeaderProps {
    pub profile: Option<Profile>,
    pub on_refresh: Callback<()>,
    pub on_leaderboard: Callback<()>,
}

#[function_component(ProfileHeader)]
pub fn profile_header(props: &ProfileHeaderProps) -> Html {
    let refresh_cb = {
        let cb = props.on_refresh.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let board_cb = {
        let cb = props.on_leaderboard.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let (name, detail) = match &props.profile {
        Some(p) => (
            p.nickname.clone(),
            format!("{} · Lv.{} · {} pts", p.role.label(), p.level, p.points),
        ),
        None => ("…".to_string(), String::new()),
    };
    html! {<div style="display:flex; align-items:center; gap:10px; padding:10px 14px; background:#161b22; border-bottom:1px solid #30363d;">
        <div style="width:36px; height:36px; border-radius:50%; background:#30363d; display:flex; align-items:center; justify-content:center; font-weight:600;">
            { name.chars().next().map(|c| c.to_string()).unwrap_or_default() }
        </div>
        <div style="flex:1; display:flex; flex-direction:column;">
            <span style="font-weight:600;">{ name.clone() }</span>
            <span style="font-size:12px; opacity:0.7;">{ detail }</span>
        </div>
        <button onclick={refresh_cb} style="padding:4px 8px;">{"Refresh"}</button>
        <button onclick={board_cb} style="padding:4px 8px;">{"Leaderboard"}</button>
    </div>}
}
