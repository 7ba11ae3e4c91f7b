use crate::model::LeaderboardEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LeaderboardPanelProps {
    pub entries: Vec<LeaderboardEntry>,
    pub current_user_id: String,
    pub to_chat: Callback<()>,
}

fn medal(rank: u32) -> &'static str {
    match rank {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "",
    }
}

#[function_component(LeaderboardPanel)]
pub fn leaderboard_panel(props: &LeaderboardPanelProps) -> Html {
    let back_cb = {
        let cb = props.to_chat.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let row_style = "display:flex; align-items:center; gap:8px; padding:6px 4px;"; // rank | name | level | points
    let rank_style = "width:44px; text-align:center; flex-shrink:0; font-variant-numeric:tabular-nums;";
    let name_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:80px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="display:flex; flex-direction:column; gap:10px; padding:14px; font-size:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Leaderboard"}</h3>
                <button onclick={back_cb} style="padding:4px 8px;">{"Back to chat"}</button>
            </div>
            if props.entries.is_empty() {
                <div style="opacity:0.6;">{"No rankings yet."}</div>
            }
            { for props.entries.iter().map(|e| {
                let me = e.user_id == props.current_user_id;
                let bg = if me { "background:rgba(88,166,255,0.15); border-radius:6px;" } else { "" };
                html! {
                    <div key={e.user_id.clone()} style={format!("{} {}", row_style, bg)}>
                        <span style={rank_style}>{ format!("{} {}", medal(e.rank), e.rank) }</span>
                        <span style={name_style}>{ e.nickname.clone() }</span>
                        <span style="opacity:0.7; font-size:12px;">{ format!("Lv.{}", e.level) }</span>
                        <span style={value_style}>{ format!("{} pts", e.points) }</span>
                    </div>
                }
            }) }
        </div>
    }
}
