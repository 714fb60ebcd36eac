use yew::prelude::*;
use log::info;
use web_sys::{window, MouseEvent};

mod config;
mod dom;
mod scheduler;
mod components {
    pub mod anchor;
    pub mod contact;
    pub mod counter;
    pub mod menu;
    pub mod reveal;
    pub mod theme;
    pub mod typewriter;
}
mod pages {
    pub mod landing;
}

use components::{
    anchor::AnchorLink,
    menu::{use_menu, MenuAction, MenuHandle},
    theme::ThemeToggle,
};
use pages::landing::Landing;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#how-it-works", "How It Works"),
    ("#stats", "Results"),
    ("#contact", "Contact"),
];


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu: MenuHandle,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu } = props;

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.dispatch(MenuAction::Close);
        })
    };

    let on_navigate = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Close))
    };

    html! {
        <>
            <nav class="top-nav">
                <div class="nav-content">
                    <AnchorLink href="#home" class="nav-logo" on_navigate={on_navigate.clone()}>
                        {"Apex Capital"}
                    </AnchorLink>

                    <button class={classes!("hamburger", menu.marker())} aria-label="Toggle menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <div class={classes!("nav-links", menu.marker())}>
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            // The wrapper closes the menu for every nav link
                            <div onclick={close_menu.clone()}>
                                <AnchorLink href={*href} class="nav-link">
                                    {*label}
                                </AnchorLink>
                            </div>
                        }) }
                        <ThemeToggle />
                    </div>
                </div>
            </nav>
            <div class="overlay" style={menu.overlay_style()} onclick={close_menu}></div>
        </>
    }
}


#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// JSON phrase list taken from the mount element's `data-phrases`.
    #[prop_or_default]
    pub phrases: Option<AttrValue>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let menu = use_menu();
    let on_navigate = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Close))
    };

    html! {
        <>
            <Nav menu={menu.clone()} />
            <main>
                <Landing phrases={props.phrases.clone()} {on_navigate} />
            </main>
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"));
    let props = AppProps {
        phrases: root
            .as_ref()
            .and_then(|el| el.get_attribute("data-phrases"))
            .map(AttrValue::from),
    };

    match root {
        Some(root) => {
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        None => {
            yew::Renderer::<App>::with_props(props).render();
        }
    }
}
