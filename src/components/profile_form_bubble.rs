use crate::model::MessageId;
use crate::validation::{ProfileFormInput, ProfileSubmission, validate_profile};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProfileFormBubbleProps {
    pub id: MessageId,
    pub submitted: bool,
    /// True when the current user sent the request (the expert side).
    pub mine: bool,
    pub on_submit: Callback<(MessageId, ProfileSubmission)>,
}

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Nickname,
    Age,
    Height,
    Weight,
}

#[function_component(ProfileFormBubble)]
pub fn profile_form_bubble(props: &ProfileFormBubbleProps) -> Html {
    let input = use_state(ProfileFormInput::default);
    let error = use_state(|| None::<String>);

    if props.submitted {
        return html! {<div style="opacity:0.8;">{"✔ Profile submitted"}</div>};
    }
    if props.mine {
        return html! {<div style="opacity:0.8;">{"Profile requested. Waiting for the runner…"}</div>};
    }

    let on_field = |field: Field| {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*input).clone();
            match field {
                Field::Nickname => next.nickname = value,
                Field::Age => next.age = value,
                Field::Height => next.height_cm = value,
                Field::Weight => next.weight_kg = value,
            }
            input.set(next);
        })
    };
    let submit_cb = {
        let input = input.clone();
        let error = error.clone();
        let cb = props.on_submit.clone();
        let id = props.id;
        Callback::from(move |_| match validate_profile(&input) {
            Ok(submission) => {
                error.set(None);
                cb.emit((id, submission));
            }
            Err(e) => error.set(Some(e.to_string())),
        })
    };

    let field_style = "display:flex; justify-content:space-between; align-items:center; gap:8px;";
    let input_style = "width:110px; padding:2px 6px;";
    html! {<div style="display:flex; flex-direction:column; gap:6px; min-width:220px;">
        <div style="font-weight:600;">{"Please fill in your profile"}</div>
        <label style={field_style}>
            <span>{"Nickname"}</span>
            <input type="text" style={input_style} value={input.nickname.clone()} oninput={on_field(Field::Nickname)} />
        </label>
        <label style={field_style}>
            <span>{"Age"}</span>
            <input type="number" style={input_style} value={input.age.clone()} oninput={on_field(Field::Age)} />
        </label>
        <label style={field_style}>
            <span>{"Height (cm)"}</span>
            <input type="number" style={input_style} value={input.height_cm.clone()} oninput={on_field(Field::Height)} />
        </label>
        <label style={field_style}>
            <span>{"Weight (kg)"}</span>
            <input type="number" style={input_style} value={input.weight_kg.clone()} oninput={on_field(Field::Weight)} />
        </label>
        if let Some(msg) = (*error).clone() {
            <div style="color:#f85149; font-size:12px;">{ msg }</div>
        }
        <button onclick={submit_cb}>{"Submit"}</button>
    </div>}
}
