use chrono::{Datelike, Utc};
use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::carousel::{Story, StoryCarousel};
use crate::components::chat::ChatWidget;
use crate::components::counter::Counter;
use crate::components::faq::{FaqEntry, FaqList};
use crate::components::loading::LoadingOverlay;
use crate::components::reveal::Reveal;
use crate::components::scroll::anchor_click;
use crate::config;
use crate::forms::contact::ContactForm;
use crate::quiz::modal::QuizModal;
use crate::quiz::recommendation::Tier;
use crate::quiz::wizard::{WizardAction, WizardContext};

struct ServiceCard {
    tier_name: &'static str,
    tagline: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        tier_name: "Rental Résumé Builder",
        tagline: "No rental history? We build one you can verify.",
        features: &[
            "Verifiable 4-year rental profile",
            "Professional landlord references",
            "Ready in days, not months",
        ],
        featured: false,
    },
    ServiceCard {
        tier_name: "Approval Partner Program",
        tagline: "Credit or income short? Apply with a qualified co-applicant.",
        features: &[
            "Qualified co-signer on your application",
            "Credit score and income verification",
            "Approval in as little as 48 hours",
        ],
        featured: true,
    },
    ServiceCard {
        tier_name: "Total Turnaround Package",
        tagline: "A complete fresh start for complex situations.",
        features: &[
            "Credit building and rental history",
            "Dedicated approval specialist",
            "Backed by our Approval Guarantee",
        ],
        featured: false,
    },
];

const PROCESS: &[(&str, &str)] = &[
    ("Take the 60-second quiz", "Tell us what's standing between you and the keys."),
    ("Get your plan", "We match you with the program that fits your timeline."),
    ("We build your file", "References, verification and backing, handled for you."),
    ("Get approved", "Apply with confidence and move in."),
];

fn stories() -> Vec<Story> {
    vec![
        Story {
            name: "Tanya R.",
            location: "Chicago, IL",
            quote: "Three denials in a row because I had no rental history. Two weeks after starting, I signed my lease.",
            outcome: "Approved in 12 days",
        },
        Story {
            name: "Marcus D.",
            location: "Atlanta, GA",
            quote: "My credit was under 550. The partner program got me into a two-bedroom for my kids.",
            outcome: "Approved in 48 hours",
        },
        Story {
            name: "Elena S.",
            location: "Houston, TX",
            quote: "After an eviction I thought I was done renting. They rebuilt everything step by step.",
            outcome: "Approved after eviction",
        },
        Story {
            name: "Jamal K.",
            location: "Phoenix, AZ",
            quote: "Self-employed income never looked good on paper. Now it does.",
            outcome: "Approved first try",
        },
    ]
}

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "How fast can I get approved?",
            answer: "Most clients in the Approval Partner Program are approved within 48 hours. Rental Résumé Builder profiles are usually ready within a few days.",
        },
        FaqEntry {
            question: "Will this work with a past eviction?",
            answer: "Yes. The Total Turnaround Package is built for complex situations, including past evictions and collections.",
        },
        FaqEntry {
            question: "Is my information kept private?",
            answer: "We only use what you share to build your application and never sell your information.",
        },
        FaqEntry {
            question: "What if I'm still not approved?",
            answer: "The Total Turnaround Package is backed by our Approval Guarantee. Ask us for the details that apply to your state.",
        },
        FaqEntry {
            question: "How do I get started?",
            answer: "Take the quiz for a personalized recommendation, or send us a message and a specialist will call you within 1 hour.",
        },
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let wizard = use_reducer(WizardContext::default);

    let open_quiz = {
        let wizard = wizard.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Opening quiz");
            wizard.dispatch(WizardAction::Open);
        })
    };

    // Service cards open the quiz and jump to that tier's result
    let quick_select = |tier_name: &'static str| {
        let wizard = wizard.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            wizard.dispatch(WizardAction::Open);
            match tier_name.parse::<Tier>() {
                Ok(tier) => {
                    let wizard = wizard.clone();
                    Timeout::new(config::QUICK_SELECT_DELAY, move || {
                        wizard.dispatch(WizardAction::QuickSelect(tier));
                    })
                    .forget();
                }
                Err(unknown) => warn!("Quick select for unknown tier {:?}", unknown.0),
            }
        })
    };

    let year = Utc::now().year();

    html! {
        <div class="landing-page">
            <LoadingOverlay />

            <header id="home" class="hero">
                <div class="hero-content">
                    <h1>{"Denied for an apartment? Get approved in as little as 48 hours."}</h1>
                    <p class="hero-subtitle">
                        {"No rental history, low credit or income that doesn't fit the rules. We help renters like you get the keys."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={open_quiz.clone()}>{"Find My Path to Approval"}</button>
                        <a href="#services" class="hero-secondary" onclick={anchor_click("#services")}>{"See Our Programs"}</a>
                    </div>
                    <p class="hero-proof">
                        <Counter target={config::CUSTOMERS_SERVED} />
                        {"+ renters approved"}
                    </p>
                </div>
            </header>

            <section id="services" class="services">
                <h2>{"Choose Your Path"}</h2>
                <div class="service-grid">
                    { for SERVICES.iter().map(|card| {
                        let price = card.tier_name.parse::<Tier>().map(|t| t.price()).unwrap_or_default();
                        html! {
                            <Reveal class={classes!("service-card", card.featured.then(|| "featured"))}>
                                if card.featured {
                                    <span class="service-badge">{"Most Popular"}</span>
                                }
                                <h3>{card.tier_name}</h3>
                                <div class="service-price">{price}</div>
                                <p>{card.tagline}</p>
                                <ul>
                                    { for card.features.iter().map(|f| html! { <li>{*f}</li> }) }
                                </ul>
                                <button class="btn btn-primary" onclick={quick_select(card.tier_name)}>
                                    {"Choose This Plan"}
                                </button>
                            </Reveal>
                        }
                    }) }
                </div>
            </section>

            <section id="process" class="process">
                <h2>{"How It Works"}</h2>
                <div class="timeline">
                    { for PROCESS.iter().enumerate().map(|(i, (title, text))| html! {
                        <Reveal class={classes!("timeline-step")}>
                            <div class="timeline-number">{(i + 1).to_string()}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="stories" class="stories">
                <h2>{"Real Renters, Real Keys"}</h2>
                <StoryCarousel stories={stories()} />
                <div class="stats">
                    <div class="stat">
                        <Counter class={classes!("stat-number")} target={config::CUSTOMERS_SERVED} steps={50} tick_ms={config::STATS_COUNTER_TICK} on_visible=true />
                        <span class="stat-label">{"Renters approved"}</span>
                    </div>
                    <div class="stat">
                        <Counter class={classes!("stat-number")} target={98} suffix="%" steps={50} tick_ms={config::STATS_COUNTER_TICK} on_visible=true />
                        <span class="stat-label">{"Approval rate"}</span>
                    </div>
                    <div class="stat">
                        <Counter class={classes!("stat-number")} target={48} steps={50} tick_ms={config::STATS_COUNTER_TICK} on_visible=true />
                        <span class="stat-label">{"Hours to approval"}</span>
                    </div>
                </div>
            </section>

            <section id="faq" class="faq">
                <h2>{"Frequently Asked Questions"}</h2>
                <FaqList entries={faq_entries()} />
            </section>

            <section id="contact" class="contact">
                <h2>{"Talk to an Approval Specialist"}</h2>
                <p>{"Send us your details and we'll call you within 1 hour."}</p>
                <ContactForm />
            </section>

            <footer class="footer">
                <p>
                    <Counter target={config::CUSTOMERS_SERVED} />
                    {"+ renters approved and counting"}
                </p>
                <p>
                    <a href={format!("tel:{}", config::CONTACT_PHONE)}>{config::CONTACT_PHONE_DISPLAY}</a>
                    {" · "}
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                </p>
                <p class="footer-copy">{format!("© {} {}. All rights reserved.", year, config::BUSINESS_NAME)}</p>
                <button class="footer-quiz-link" onclick={open_quiz}>{"Not sure which plan? Take the quiz"}</button>
            </footer>

            <ChatWidget />
            <QuizModal wizard={wizard} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_service_card_names_a_tier() {
        for card in SERVICES {
            assert!(card.tier_name.parse::<Tier>().is_ok(), "{}", card.tier_name);
        }
    }
}
