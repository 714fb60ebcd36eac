use std::rc::Rc;

use log::debug;
use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config::MOBILE_BREAKPOINT;
use crate::dom;

/// Mobile navigation state. The `active` markers, the overlay and the body
/// scroll lock are all rendered from `open`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    Close,
    Toggle,
}

impl MenuState {
    pub fn apply(self, action: MenuAction) -> Self {
        let open = match action {
            MenuAction::Open => true,
            MenuAction::Close => false,
            MenuAction::Toggle => !self.open,
        };
        Self { open }
    }

    /// Class added to both the nav panel and the hamburger while open.
    pub fn marker(&self) -> Option<&'static str> {
        self.open.then_some("active")
    }

    pub fn overlay_style(&self) -> &'static str {
        if self.open {
            "display: block;"
        } else {
            "display: none;"
        }
    }

    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub fn closes_on_key(key: &str) -> bool {
    key == "Escape"
}

pub fn closes_on_resize(viewport_width: f64) -> bool {
    viewport_width > MOBILE_BREAKPOINT
}

pub type MenuHandle = UseReducerHandle<MenuState>;

/// Owns the menu state for the page and wires the window-level close
/// triggers (Escape, resizing to desktop) plus the body scroll lock.
#[hook]
pub fn use_menu() -> MenuHandle {
    let menu = use_reducer(MenuState::default);

    {
        let menu = menu.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if closes_on_key(&e.key()) {
                menu.dispatch(MenuAction::Close);
            }
        });
    }

    {
        let menu = menu.clone();
        use_event_with_window("resize", move |_: Event| {
            if dom::viewport_width().map_or(false, closes_on_resize) {
                menu.dispatch(MenuAction::Close);
            }
        });
    }

    use_effect_with_deps(
        |state: &MenuState| {
            debug!("Menu open: {}", state.open);
            dom::set_body_overflow(state.body_overflow());
            || ()
        },
        *menu,
    );

    menu
}
