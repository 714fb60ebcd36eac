use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::dom::{self, Observe};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Feeds one intersection change. The first intersection makes the
    /// element visible for good and ends observation.
    pub fn on_intersection(&mut self, intersecting: bool) -> Observe {
        match (*self, intersecting) {
            (RevealState::Hidden, false) => Observe::Keep,
            (RevealState::Hidden, true) => {
                *self = RevealState::Visible;
                Observe::Stop
            }
            (RevealState::Visible, _) => Observe::Stop,
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        (*self == RevealState::Visible).then_some("appear")
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a `.fade-in` block that gains `.appear` the first
/// time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_state_eq(RevealState::default);

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let element = node.cast::<Element>();
                let guard = match element {
                    Some(element) if dom::intersection_observer_supported() => {
                        let setter = state.setter();
                        let mut tracker = RevealState::default();
                        dom::observe(
                            &element,
                            REVEAL_THRESHOLD,
                            Some(REVEAL_ROOT_MARGIN),
                            move |intersecting| {
                                let next = tracker.on_intersection(intersecting);
                                setter.set(tracker);
                                next
                            },
                        )
                    }
                    _ => None,
                };
                if guard.is_none() {
                    debug!("No intersection observer, revealing immediately");
                    state.set(RevealState::Visible);
                }
                move || drop(guard)
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!("fade-in", props.class.clone(), state.class())}>
            { for props.children.iter() }
        </div>
    }
}
