use gloo_console::log;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;

#[derive(Serialize)]
pub struct SubscribeRequest {
    pub email: String,
    pub first_name: String,
    pub source: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Clone, PartialEq)]
enum SignupStatus {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct SignupProps {
    /// Tag recorded with the submission: "hero", "lead-magnet" or "bottom".
    pub variant: String,
    pub button_text: String,
}

#[function_component(EmailSignupForm)]
pub fn email_signup_form(props: &SignupProps) -> Html {
    let email = use_state(String::new);
    let first_name = use_state(String::new);
    let status = use_state(|| SignupStatus::Idle);

    let onsubmit = {
        let email = email.clone();
        let first_name = first_name.clone();
        let status = status.clone();
        let variant = props.variant.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if (*email).is_empty() {
                return;
            }
            let payload = SubscribeRequest {
                email: (*email).clone(),
                first_name: (*first_name).clone(),
                source: variant.clone(),
            };
            let email = email.clone();
            let first_name = first_name.clone();
            let status = status.clone();
            status.set(SignupStatus::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                match Request::post(&format!("{}/api/subscribe", config::get_backend_url()))
                    .json(&payload)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        status.set(SignupStatus::Success);
                        email.set(String::new());
                        first_name.set(String::new());
                    }
                    Ok(response) => {
                        match response.json::<ErrorResponse>().await {
                            Ok(err) => log!("Subscribe rejected:", err.error),
                            Err(_) => log!("Subscribe rejected with status:", response.status()),
                        }
                        status.set(SignupStatus::Error);
                    }
                    Err(e) => {
                        log!("Subscribe request failed:", e.to_string());
                        status.set(SignupStatus::Error);
                    }
                }
            });
        })
    };

    if *status == SignupStatus::Success {
        return html! {
            <div class="signup-success">
                <div class="signup-success-check">{"✓"}</div>
                <p class="signup-success-title">{"You're on the list."}</p>
                <p class="signup-success-note">
                    {"Check your inbox for a welcome message with your founding member perks."}
                </p>
            </div>
        };
    }

    html! {
        <form class="signup-form" onsubmit={onsubmit}>
            {
                if props.variant != "hero" {
                    html! {
                        <input
                            type="text"
                            placeholder="First name"
                            value={(*first_name).clone()}
                            oninput={let first_name = first_name.clone(); move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                first_name.set(input.value());
                            }}
                        />
                    }
                } else {
                    html! {}
                }
            }
            <input
                type="email"
                placeholder="Enter your email"
                required=true
                value={(*email).clone()}
                oninput={let email = email.clone(); move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    email.set(input.value());
                }}
            />
            <button type="submit" disabled={*status == SignupStatus::Loading}>
                {
                    if *status == SignupStatus::Loading {
                        "Joining...".to_string()
                    } else {
                        props.button_text.clone()
                    }
                }
            </button>
            {
                if *status == SignupStatus::Error {
                    html! {
                        <p class="signup-error">{"Something went wrong. Please try again."}</p>
                    }
                } else {
                    html! {}
                }
            }
            <p class="signup-privacy">{"No spam. Unsubscribe anytime. Your email stays private."}</p>
        </form>
    }
}
