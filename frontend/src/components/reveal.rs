use yew::prelude::*;

use super::visibility::use_seen;

const HIDDEN: &str = "opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease;";
const SHOWN: &str = "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;";

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades its content up into place the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let seen = use_seen(node.clone(), 0.1);

    html! {
        <div ref={node} class={props.class.clone()} style={if seen { SHOWN } else { HIDDEN }}>
            { for props.children.iter() }
        </div>
    }
}
