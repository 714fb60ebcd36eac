use log::debug;
use web_sys::{window, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorTarget<'a> {
    /// Not a same-page link; the browser handles it.
    External,
    /// A bare "#", left alone.
    Placeholder,
    /// An element id on this page.
    Section(&'a str),
}

pub fn classify(href: &str) -> AnchorTarget<'_> {
    match href.strip_prefix('#') {
        None => AnchorTarget::External,
        Some("") => AnchorTarget::Placeholder,
        Some(id) => AnchorTarget::Section(id),
    }
}

fn find_section(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after a smooth scroll, used to close the mobile menu.
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// A link that scrolls smoothly to same-page sections instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            if let AnchorTarget::Section(id) = classify(&href) {
                if let Some(target) = find_section(id) {
                    e.prevent_default();
                    debug!("Scrolling to #{}", id);
                    scroll_to(&target);
                    on_navigate.emit(());
                }
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
