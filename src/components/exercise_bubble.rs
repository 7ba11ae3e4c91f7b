use crate::model::ExerciseRecord;
use crate::util::{format_duration, format_pace};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ExerciseBubbleProps {
    pub record: ExerciseRecord,
}

#[function_component(ExerciseBubble)]
pub fn exercise_bubble(props: &ExerciseBubbleProps) -> Html {
    let r = &props.record;
    let row_style = "display:flex; justify-content:space-between; gap:16px;";
    let value_style = "font-variant-numeric:tabular-nums; font-weight:600;";
    html! {<div style="display:flex; flex-direction:column; gap:4px; min-width:180px;">
        <div style="font-weight:600; color:#2ea043;">{ format!("🏃 {}", r.activity) }</div>
        <div style={row_style}>
            <span>{"Distance"}</span>
            <span style={value_style}>{ format!("{:.2} km", r.distance_km) }</span>
        </div>
        <div style={row_style}>
            <span>{"Time"}</span>
            <span style={value_style}>{ format_duration(r.duration_secs) }</span>
        </div>
        if let Some(pace) = format_pace(r.distance_km, r.duration_secs) {
            <div style={row_style}>
                <span>{"Pace"}</span>
                <span style={value_style}>{ pace }</span>
            </div>
        }
        if let Some(kcal) = r.calories {
            <div style={row_style}>
                <span>{"Calories"}</span>
                <span style={value_style}>{ format!("{} kcal", kcal) }</span>
            </div>
        }
    </div>}
}
