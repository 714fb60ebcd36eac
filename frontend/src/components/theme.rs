use log::info;
use web_sys::{window, Event};
use yew::prelude::*;

use crate::config::THEME_KEY;
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Anything other than an exact "dark" means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, theme: Theme);
}

/// The browser's per-origin local storage.
pub struct LocalStorage;

impl ThemeStore for LocalStorage {
    fn load(&self) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(THEME_KEY).ok())
            .flatten()
    }

    fn save(&self, theme: Theme) {
        if let Some(window) = window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_KEY, theme.as_str());
            }
        }
    }
}

pub fn load_theme(store: &impl ThemeStore) -> Theme {
    Theme::from_stored(store.load().as_deref())
}

/// Flips the theme and persists the result.
pub fn toggle_theme(current: Theme, store: &impl ThemeStore) -> Theme {
    let next = current.toggled();
    store.save(next);
    next
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(|| load_theme(&LocalStorage));

    use_effect_with_deps(
        |theme: &Theme| {
            dom::set_body_class("dark-mode", theme.is_dark());
            || ()
        },
        *theme,
    );

    let onchange = {
        let theme = theme.clone();
        Callback::from(move |_: Event| {
            let next = toggle_theme(*theme, &LocalStorage);
            info!("Switched to {} theme", next.as_str());
            theme.set(next);
        })
    };

    html! {
        <label class="theme-switch" for="theme-toggle">
            <input type="checkbox" id="theme-toggle" checked={theme.is_dark()} {onchange} />
            <span class="slider"></span>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore(RefCell<Option<String>>);

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn save(&self, theme: Theme) {
            *self.0.borrow_mut() = Some(theme.as_str().to_string());
        }
    }

    #[test]
    fn empty_storage_defaults_to_light() {
        assert_eq!(load_theme(&MemoryStore::default()), Theme::Light);
    }

    #[test]
    fn unrecognised_values_fall_back_to_light() {
        for value in ["", "Dark", "DARK", "night", "light"] {
            assert_eq!(Theme::from_stored(Some(value)), Theme::Light, "{value:?}");
        }
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn preference_survives_reload() {
        let store = MemoryStore::default();
        let theme = load_theme(&store);
        let theme = toggle_theme(theme, &store);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.load().as_deref(), Some("dark"));

        // A fresh page load reads the same store.
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn toggling_back_persists_light() {
        let store = MemoryStore(RefCell::new(Some("dark".into())));
        let theme = toggle_theme(load_theme(&store), &store);
        assert_eq!(theme, Theme::Light);
        assert_eq!(store.load().as_deref(), Some("light"));
    }

    #[test]
    fn loading_does_not_write() {
        let store = MemoryStore::default();
        load_theme(&store);
        assert_eq!(store.load(), None);
    }
}
