use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use super::recommendation::{Basis, Concern, Recommendation, Timeline};
use super::wizard::{Step, WizardAction, WizardContext};
use crate::config;
use crate::forms::contact::{validation_feedback, Banner, FieldErrors};
use crate::forms::field::{FieldKind, FormField};
use crate::forms::mail_fallback::BrowserMailHandoff;
use crate::forms::notifier::LoggingNotifier;
use crate::forms::pipeline::submit;
use crate::forms::relay::FormRelay;
use crate::forms::submission::{check_field, FormKind, FormSubmission, LeadDetails, QuizFields};

fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "auto" });
    }
}

fn render_recommendation(rec: &Recommendation) -> Html {
    html! {
        <div class="recommendation-card">
            <h3>{rec.tier.name()}</h3>
            <div class="recommendation-price">{rec.price()}</div>
            <p>{rec.reasoning}</p>
            {
                match &rec.basis {
                    Basis::Quiz { concern, timeline } => html! {
                        <div class="recommendation-why">
                            <strong>{"Why it's right for you:"}</strong>
                            <ul>
                                <li>{"Addresses your "}<strong>{concern.map(|c| c.as_str()).unwrap_or("")}</strong>{" concern"}</li>
                                <li>{"Perfect for your "}<strong>{timeline.map(|t| t.as_str()).unwrap_or("")}</strong>{" timeline"}</li>
                                <li>{"Highest success rate for your situation"}</li>
                            </ul>
                        </div>
                    },
                    Basis::QuickSelect => html! {},
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct QuizModalProps {
    pub wizard: UseReducerHandle<WizardContext>,
}

#[function_component(QuizModal)]
pub fn quiz_modal(props: &QuizModalProps) -> Html {
    let wizard = props.wizard.clone();
    let lead = use_state(LeadDetails::default);
    let errors = use_state(FieldErrors::default);
    let confirmation = use_state(|| None::<(&'static str, &'static str)>);
    let banner = use_state(|| None::<Banner>);
    let is_submitting = use_state(|| false);
    let is_open = wizard.is_open();

    // Fresh form and page scroll lock whenever the wizard opens or closes
    {
        let lead = lead.clone();
        let errors = errors.clone();
        let confirmation = confirmation.clone();
        let banner = banner.clone();
        use_effect_with_deps(
            move |open: &bool| {
                set_body_scroll_locked(*open);
                if *open {
                    lead.set(LeadDetails::default());
                    errors.set(FieldErrors::default());
                    confirmation.set(None);
                    banner.set(None);
                }
                || ()
            },
            is_open,
        );
    }

    // Escape closes from any step
    {
        let wizard = wizard.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("no global window");
                let keydown_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        debug!("Escape pressed, closing quiz");
                        wizard.dispatch(WizardAction::Close);
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                let _ = window.add_event_listener_with_callback(
                    "keydown",
                    keydown_callback.as_ref().unchecked_ref(),
                );

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        keydown_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let Some(step) = wizard.step() else {
        return html! {};
    };

    let transition = |action: WizardAction| {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(action))
    };
    let close = transition(WizardAction::Close);
    let advance = transition(WizardAction::Advance);

    let backdrop_click = close.clone();
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let concern_option = |concern: Concern| {
        let selected = wizard.answers.concern == Some(concern);
        let onclick = transition(WizardAction::SelectConcern(concern));
        html! {
            <button class={classes!("quiz-option", selected.then(|| "selected"))} {onclick}>
                {concern.label()}
            </button>
        }
    };

    let timeline_option = |timeline: Timeline| {
        let selected = wizard.answers.timeline == Some(timeline);
        let onclick = transition(WizardAction::SelectTimeline(timeline));
        html! {
            <button class={classes!("quiz-option", selected.then(|| "selected"))} {onclick}>
                {timeline.label()}
            </button>
        }
    };

    let on_input = {
        let lead = lead.clone();
        let errors = errors.clone();
        let banner = banner.clone();
        Callback::from(move |(field, value): (&'static str, String)| {
            let mut next = (*lead).clone();
            next.set(field, value);
            lead.set(next);
            let mut cleared = (*errors).clone();
            cleared.set(field, None);
            errors.set(cleared);
            banner.set(None);
        })
    };

    let on_blur = {
        let lead = lead.clone();
        let errors = errors.clone();
        Callback::from(move |field: &'static str| {
            let mut next = (*errors).clone();
            next.set(field, check_field(field, lead.get(field), FormKind::QuizLead.is_required(field)));
            errors.set(next);
        })
    };

    let onsubmit = {
        let wizard = wizard.clone();
        let lead = lead.clone();
        let errors = errors.clone();
        let confirmation = confirmation.clone();
        let banner = banner.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let (quiz_concern, quiz_timeline, quiz_recommendation) = wizard.lead_fields();
            let submission = FormSubmission::quiz_lead(
                (*lead).clone(),
                QuizFields {
                    quiz_concern,
                    quiz_timeline,
                    quiz_recommendation,
                },
            );
            if let Err(err) = submission.validate() {
                let (marks, summary) = validation_feedback(&err);
                errors.set(marks);
                banner.set(Some(summary));
                return;
            }

            is_submitting.set(true);
            banner.set(None);
            let wizard = wizard.clone();
            let errors = errors.clone();
            let confirmation = confirmation.clone();
            let banner = banner.clone();
            let is_submitting = is_submitting.clone();
            spawn_local(async move {
                let result = submit(
                    &submission,
                    &FormRelay::default(),
                    &BrowserMailHandoff,
                    &LoggingNotifier,
                )
                .await;
                match result {
                    Ok(outcome) => {
                        info!("Quiz lead finished: {:?}", outcome);
                        banner.set(None);
                        confirmation.set(Some((outcome.headline(), outcome.confirmation(&submission))));
                        Timeout::new(config::QUIZ_AUTO_CLOSE_DELAY, move || {
                            wizard.dispatch(WizardAction::Close);
                        })
                        .forget();
                    }
                    Err(err) => {
                        let (marks, summary) = validation_feedback(&err);
                        errors.set(marks);
                        banner.set(Some(summary));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let lead_field = |name: &'static str, label: &'static str, kind: FieldKind, placeholder: &'static str| {
        html! {
            <FormField
                {name}
                {label}
                {kind}
                {placeholder}
                value={lead.get(name).to_string()}
                required=true
                error={errors.get(name)}
                on_input={on_input.clone()}
                on_blur={on_blur.clone()}
            />
        }
    };

    let body = match step {
        Step::Intro => html! {
            <div class="quiz-step active" id="step1">
                <h2>{"Find Your Fastest Path to Approval"}</h2>
                <p>{"Answer two quick questions and we'll recommend the plan that fits your situation."}</p>
                <button class="btn btn-primary" onclick={advance.clone()}>{"Start the Quiz"}</button>
            </div>
        },
        Step::Concern => html! {
            <div class="quiz-step active" id="step2">
                <h2>{"What's your biggest concern?"}</h2>
                <div class="quiz-options">
                    { for Concern::ALL.into_iter().map(concern_option) }
                </div>
                <button id="step2Next" class="btn btn-primary" disabled={!wizard.can_advance()} onclick={advance.clone()}>
                    {"Next"}
                </button>
            </div>
        },
        Step::Timeline => html! {
            <div class="quiz-step active" id="step3">
                <h2>{"When do you need to move?"}</h2>
                <div class="quiz-options">
                    { for Timeline::ALL.into_iter().map(timeline_option) }
                </div>
                <button id="step3Next" class="btn btn-primary" disabled={!wizard.can_advance()} onclick={advance.clone()}>
                    {"See My Plan"}
                </button>
            </div>
        },
        Step::Result => html! {
            <div class="quiz-step active" id="step4">
                <h2>{"Your Recommended Plan"}</h2>
                <div id="recommendation">
                    { wizard.recommendation.as_ref().map(render_recommendation).unwrap_or_else(|| html! {}) }
                    {
                        if let Some((headline, text)) = *confirmation {
                            html! {
                                <div class="success-message">
                                    <strong>{headline}</strong>
                                    <p>{text}</p>
                                </div>
                            }
                        } else {
                            html! {
                                <form id="leadForm" class="lead-form" novalidate=true {onsubmit}>
                                    {lead_field("name", "Full Name", FieldKind::Text, "Your full name")}
                                    {lead_field("email", "Email", FieldKind::Email, "you@example.com")}
                                    {lead_field("phone", "Phone", FieldKind::Tel, "(773) 555-0123")}
                                    <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                                        {if *is_submitting { "Sending..." } else { "Send My Approval Plan" }}
                                    </button>
                                    {
                                        match &*banner {
                                            Some(Banner::Error(message)) => html! {
                                                <div class="form-message error">{message}</div>
                                            },
                                            _ => html! {},
                                        }
                                    }
                                </form>
                            }
                        }
                    }
                </div>
            </div>
        },
    };

    html! {
        <div id="quizModal" class="quiz-modal" onclick={backdrop_click}>
            <div class="quiz-dialog" role="dialog" aria-modal="true" onclick={stop}>
                <button class="quiz-close" aria-label="Close" onclick={close}>{"×"}</button>
                <div class="quiz-progress">
                    <div class="progress-bar">
                        <div class="progress-fill" style={format!("width: {};", step.progress_width())}></div>
                    </div>
                    <span class="progress-label">{format!("Step {} of 4", step.number())}</span>
                </div>
                {body}
            </div>
        </div>
    }
}
