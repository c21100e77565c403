use yew::prelude::*;
use crate::hooks::visibility::{use_visibility, ObserverOptions};

/// How far below its resting place hidden content sits.
pub const HIDDEN_OFFSET_PX: u32 = 80;
pub const TRANSITION_MS: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceState {
    pub opacity: f64,
    pub offset_px: u32,
}

impl EntranceState {
    pub fn for_visibility(is_visible: bool) -> Self {
        if is_visible {
            Self { opacity: 1.0, offset_px: 0 }
        } else {
            Self { opacity: 0.0, offset_px: HIDDEN_OFFSET_PX }
        }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px); transition: opacity {ms}ms ease, transform {ms}ms ease;",
            self.opacity,
            self.offset_px,
            ms = TRANSITION_MS,
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let is_visible = use_visibility(node.clone(), ObserverOptions::default());
    let state = EntranceState::for_visibility(is_visible);

    html! {
        <div
            ref={node}
            class={classes!("animated-section", is_visible.then(|| "is-visible"), props.class.clone())}
            style={state.style()}
        >
            { for props.children.iter() }
        </div>
    }
}
