use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, PartialEq)]
enum Stage {
    Showing,
    FadingOut,
    Gone,
}

#[function_component(LoadingOverlay)]
pub fn loading_overlay() -> Html {
    let stage = use_state(|| Stage::Showing);

    {
        let stage_setter = stage.setter();
        use_effect_with_deps(
            move |stage: &Stage| {
                let timeout = match *stage {
                    Stage::Showing => Some(Timeout::new(config::LOADING_HIDE_DELAY, move || {
                        stage_setter.set(Stage::FadingOut)
                    })),
                    Stage::FadingOut => Some(Timeout::new(config::LOADING_REMOVE_DELAY, move || {
                        stage_setter.set(Stage::Gone)
                    })),
                    Stage::Gone => None,
                };
                move || drop(timeout)
            },
            *stage,
        );
    }

    match *stage {
        Stage::Gone => html! {},
        stage => html! {
            <div class={classes!("loading-overlay", (stage == Stage::FadingOut).then(|| "hidden"))}>
                <div class="loading-spinner"></div>
                <p>{config::BUSINESS_NAME}</p>
            </div>
        },
    }
}
