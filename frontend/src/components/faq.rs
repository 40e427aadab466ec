use web_sys::MouseEvent;
use yew::prelude::*;

/// Which item is open after `clicked` is pressed. At most one is open;
/// pressing the open item closes it.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "active"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="faq-toggle">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class={classes!("faq-answer", props.is_open.then(|| "active"))}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(i, entry)| {
                let on_toggle = {
                    let open = open.clone();
                    Callback::from(move |_: ()| open.set(toggle_open(*open, i)))
                };
                html! {
                    <FaqItem question={entry.question} is_open={*open == Some(i)} {on_toggle}>
                        <p>{entry.answer}</p>
                    </FaqItem>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_one_closes_others() {
        let open = toggle_open(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle_open(open, 0), Some(0));
    }

    #[test]
    fn test_clicking_open_item_closes_it() {
        assert_eq!(toggle_open(Some(1), 1), None);
    }
}
