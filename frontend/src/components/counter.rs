use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::visibility::use_seen;

/// Counts from zero to `target` in `steps` equal increments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    current: f64,
    target: f64,
    increment: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, steps: u32) -> Self {
        let target = target as f64;
        Self {
            current: 0.0,
            target,
            increment: target / steps.max(1) as f64,
        }
    }

    /// Advance one frame. Returns the value to display and whether the
    /// target has been reached.
    pub fn tick(&mut self) -> (u64, bool) {
        self.current += self.increment;
        if self.current >= self.target {
            self.current = self.target;
            return (self.target as u64, true);
        }
        (self.current.floor() as u64, false)
    }
}

/// 4300 -> "4,300"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u64,
    #[prop_or(100)]
    pub steps: u32,
    #[prop_or(crate::config::COUNTER_TICK)]
    pub tick_ms: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    /// Wait until half the number is on screen before counting.
    #[prop_or_default]
    pub on_visible: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let shown = use_state(|| 0u64);
    let node = use_node_ref();
    let seen = use_seen(node.clone(), 0.5);
    let should_run = !props.on_visible || seen;

    {
        let shown = shown.clone();
        let (target, steps, tick_ms) = (props.target, props.steps, props.tick_ms);
        use_effect_with_deps(
            move |run: &bool| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if *run {
                    let mut animation = CounterAnimation::new(target, steps);
                    let handle = interval_handle.clone();
                    let interval = Interval::new(tick_ms, move || {
                        let (value, done) = animation.tick();
                        shown.set(value);
                        if done {
                            // Can't drop the interval from inside its own callback
                            let handle = handle.clone();
                            spawn_local(async move {
                                handle.borrow_mut().take();
                            });
                        }
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }
                move || {
                    interval_handle.borrow_mut().take();
                }
            },
            should_run,
        );
    }

    html! {
        <span ref={node} class={props.class.clone()}>
            {format!("{}{}", format_thousands(*shown), props.suffix)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(98), "98");
        assert_eq!(format_thousands(4300), "4,300");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(100000), "100,000");
    }

    #[test]
    fn test_counter_reaches_target_in_steps() {
        let mut animation = CounterAnimation::new(4300, 100);
        let mut frames = 0;
        let mut last = 0;
        loop {
            frames += 1;
            let (value, done) = animation.tick();
            assert!(value >= last);
            last = value;
            if done {
                break;
            }
            assert!(frames < 200, "counter never finished");
        }
        assert_eq!(last, 4300);
        assert!((100..=101).contains(&frames));
    }

    #[test]
    fn test_counter_floors_intermediate_values() {
        let mut animation = CounterAnimation::new(98, 50);
        assert_eq!(animation.tick(), (1, false));
        assert_eq!(animation.tick(), (3, false));
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut animation = CounterAnimation::new(0, 50);
        assert_eq!(animation.tick(), (0, true));
    }
}
