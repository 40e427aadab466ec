use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Next index after moving one card, wrapping at both ends.
pub fn step_index(current: usize, direction: Direction, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    match direction {
        Direction::Next => (current + 1) % len,
        Direction::Prev if current == 0 => len - 1,
        Direction::Prev => current - 1,
    }
}

#[derive(Clone, Debug, PartialEq)]
struct CarouselState {
    index: usize,
    len: usize,
}

impl Reducible for CarouselState {
    type Action = Direction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(CarouselState {
            index: step_index(self.index, action, self.len),
            len: self.len,
        })
    }
}

#[derive(Clone, PartialEq)]
pub struct Story {
    pub name: &'static str,
    pub location: &'static str,
    pub quote: &'static str,
    pub outcome: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub stories: Vec<Story>,
}

#[function_component(StoryCarousel)]
pub fn story_carousel(props: &CarouselProps) -> Html {
    let len = props.stories.len();
    let state = use_reducer(|| CarouselState { index: 0, len });
    let card_ref = use_node_ref();
    let card_width = use_state_eq(|| 0.0f64);

    {
        let state = state.clone();
        use_interval(move || state.dispatch(Direction::Next), config::CAROUSEL_INTERVAL);
    }

    // Card width is measured, not styled, so re-read it on resize
    {
        let card_ref = card_ref.clone();
        let card_width = card_width.clone();
        use_effect_with_deps(
            move |_| {
                let measure = move || {
                    if let Some(card) = card_ref.cast::<web_sys::HtmlElement>() {
                        card_width.set(card.offset_width() as f64 + config::CAROUSEL_GAP);
                    }
                };
                measure();

                let window = web_sys::window();
                let resize_callback = Closure::wrap(Box::new(measure) as Box<dyn FnMut()>);
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(Direction::Prev))
    };
    let next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(Direction::Next))
    };

    let track_style = format!(
        "transform: translateX(-{}px);",
        state.index as f64 * *card_width
    );

    html! {
        <div class="carousel">
            <button class="carousel-prev" aria-label="Previous story" onclick={prev}>{"‹"}</button>
            <div class="carousel-window">
                <div class="carousel-track" style={track_style}>
                    { for props.stories.iter().enumerate().map(|(i, story)| html! {
                        <article
                            class={classes!("story-card", (i == state.index).then(|| "current"))}
                            ref={if i == 0 { card_ref.clone() } else { NodeRef::default() }}
                        >
                            <p class="story-quote">{format!("“{}”", story.quote)}</p>
                            <div class="story-outcome">{story.outcome}</div>
                            <div class="story-author">
                                <strong>{story.name}</strong>
                                <span>{story.location}</span>
                            </div>
                        </article>
                    }) }
                </div>
            </div>
            <button class="carousel-next" aria-label="Next story" onclick={next}>{"›"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_start() {
        assert_eq!(step_index(0, Direction::Next, 3), 1);
        assert_eq!(step_index(2, Direction::Next, 3), 0);
    }

    #[test]
    fn test_prev_wraps_to_end() {
        assert_eq!(step_index(0, Direction::Prev, 3), 2);
        assert_eq!(step_index(2, Direction::Prev, 3), 1);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(step_index(0, Direction::Next, 0), 0);
        assert_eq!(step_index(0, Direction::Prev, 1), 0);
        assert_eq!(step_index(0, Direction::Next, 1), 0);
    }

    #[test]
    fn test_reducer_keeps_len() {
        let state = Rc::new(CarouselState { index: 1, len: 4 });
        let state = state.reduce(Direction::Next).reduce(Direction::Next).reduce(Direction::Next);
        assert_eq!(*state, CarouselState { index: 0, len: 4 });
    }
}
