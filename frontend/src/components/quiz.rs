use gloo_console::log;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::assessment::{classify, QUESTIONS};
use crate::components::signup::SubscribeRequest;
use crate::config;

/// How long a chosen option stays highlighted before the quiz advances.
const ADVANCE_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, PartialEq)]
enum WizardStep {
    Intro,
    Question(usize),
    EmailCapture,
    Results,
}

#[function_component(AssessmentQuiz)]
pub fn assessment_quiz() -> Html {
    let step = use_state(|| WizardStep::Intro);
    let answers = use_state(Vec::<usize>::new);
    let selected = use_state(|| None::<usize>);
    let email = use_state(String::new);
    let first_name = use_state(String::new);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_start = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| {
            step.set(WizardStep::Question(0));
        })
    };

    let on_select = {
        let step = step.clone();
        let answers = answers.clone();
        let selected = selected.clone();
        Callback::from(move |choice: usize| {
            // ignore clicks while the highlight delay is running
            if selected.is_some() {
                return;
            }
            selected.set(Some(choice));

            let step = step.clone();
            let answers = answers.clone();
            let selected = selected.clone();
            let timeout = Timeout::new(ADVANCE_DELAY_MS, move || {
                let current = match *step {
                    WizardStep::Question(i) => i,
                    _ => return,
                };
                let mut next = (*answers).clone();
                next.push(choice);
                answers.set(next);
                selected.set(None);
                if current + 1 < QUESTIONS.len() {
                    step.set(WizardStep::Question(current + 1));
                } else {
                    step.set(WizardStep::EmailCapture);
                }
            });
            timeout.forget();
        })
    };

    let on_email_submit = {
        let step = step.clone();
        let email = email.clone();
        let first_name = first_name.clone();
        let submitting = submitting.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if (*email).is_empty() {
                return;
            }
            let payload = SubscribeRequest {
                email: (*email).clone(),
                first_name: (*first_name).clone(),
                source: "assessment".to_string(),
            };
            let step = step.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            submitting.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match Request::post(&format!("{}/api/subscribe", config::get_backend_url()))
                    .json(&payload)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => {
                        step.set(WizardStep::Results);
                    }
                    Ok(response) => {
                        log!("Assessment subscribe rejected with status:", response.status());
                        error.set(Some("Something went wrong. Please try again.".to_string()));
                    }
                    Err(e) => {
                        log!("Assessment subscribe failed:", e.to_string());
                        error.set(Some("Something went wrong. Please try again.".to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    match *step {
        WizardStep::Intro => html! {
            <div class="quiz quiz-intro">
                <h3>{"Where does your team stand?"}</h3>
                <p>
                    {"Five quick questions. Get your communicator profile and the \
                      episodes to start with — plus the readiness checklist in your inbox."}
                </p>
                <button class="quiz-start" onclick={on_start}>{"Start the Assessment"}</button>
            </div>
        },
        WizardStep::Question(index) => {
            let question = &QUESTIONS[index];
            html! {
                <div class="quiz quiz-question">
                    <p class="quiz-progress">
                        {format!("Question {} of {}", index + 1, QUESTIONS.len())}
                    </p>
                    <h3>{question.prompt}</h3>
                    <div class="quiz-options">
                        {
                            question.options.iter().enumerate().map(|(i, option)| {
                                let on_select = on_select.clone();
                                let class = if *selected == Some(i) {
                                    "quiz-option selected"
                                } else {
                                    "quiz-option"
                                };
                                html! {
                                    <button
                                        key={i}
                                        class={class}
                                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(i))}
                                    >
                                        {*option}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            }
        }
        WizardStep::EmailCapture => html! {
            <div class="quiz quiz-email">
                <h3>{"Your profile is ready"}</h3>
                <p>{"Tell us where to send your results and the readiness checklist."}</p>
                <form onsubmit={on_email_submit}>
                    <input
                        type="text"
                        placeholder="First name"
                        value={(*first_name).clone()}
                        oninput={let first_name = first_name.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            first_name.set(input.value());
                        }}
                    />
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
                    <button type="submit" disabled={*submitting}>
                        { if *submitting { "Sending..." } else { "Show My Results" } }
                    </button>
                </form>
                {
                    if let Some(message) = (*error).as_ref() {
                        html! { <p class="quiz-error">{message}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        },
        WizardStep::Results => {
            let profile = classify(&answers);
            html! {
                <div class="quiz quiz-results">
                    <div class="quiz-result-emoji">{profile.emoji}</div>
                    <p class="quiz-result-kicker">{"You are a"}</p>
                    <h3>{profile.title}</h3>
                    <p class="quiz-result-description">{profile.description}</p>
                    <ul class="quiz-recommendations">
                        {
                            profile.recommendations.iter().map(|item| html! {
                                <li key={*item}>{*item}</li>
                            }).collect::<Html>()
                        }
                    </ul>
                    <p class="quiz-result-cta">{profile.cta}</p>
                </div>
            }
        }
    }
}
