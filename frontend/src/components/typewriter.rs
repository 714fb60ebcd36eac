use serde::Deserialize;
use yew::prelude::*;

use crate::config::{DEFAULT_PHRASES, DELETE_SPEED, PHRASE_PAUSE, TYPE_SPEED};
use crate::scheduler::{self, Animation, Tick};

#[derive(Deserialize)]
#[serde(transparent)]
struct Phrases(Vec<String>);

pub fn default_phrases() -> Vec<String> {
    DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect()
}

/// Reads a `data-phrases` value. Anything but a non-empty JSON array of
/// strings yields the default phrases.
pub fn parse_phrases(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|raw| serde_json::from_str::<Phrases>(raw).ok())
        .map(|Phrases(phrases)| phrases)
        .filter(|phrases| !phrases.is_empty())
        .unwrap_or_else(default_phrases)
}

/// Types a phrase out one character at a time, waits, deletes it again and
/// moves on to the next phrase, forever.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        let phrases = if phrases.is_empty() {
            default_phrases()
        } else {
            phrases
        };
        Self {
            phrases: phrases.iter().map(|p| p.chars().collect()).collect(),
            phrase: 0,
            chars: 0,
            deleting: false,
        }
    }

    fn visible(&self) -> String {
        self.phrases[self.phrase][..self.chars].iter().collect()
    }
}

impl Animation for Typewriter {
    type Output = String;

    fn tick(&mut self) -> Tick<String> {
        let len = self.phrases[self.phrase].len();

        if !self.deleting {
            self.chars = (self.chars + 1).min(len);
            let output = self.visible();
            if self.chars >= len {
                self.deleting = true;
                return Tick {
                    output,
                    next: Some(PHRASE_PAUSE),
                };
            }
            return Tick {
                output,
                next: Some(TYPE_SPEED),
            };
        }

        self.chars = self.chars.saturating_sub(1);
        let output = self.visible();
        if self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            return Tick {
                output,
                next: Some(TYPE_SPEED),
            };
        }
        Tick {
            output,
            next: Some(DELETE_SPEED),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    /// Raw JSON phrase list, as found in a `data-phrases` attribute.
    #[prop_or_default]
    pub phrases: Option<AttrValue>,
}

#[function_component(TypingText)]
pub fn typing_text(props: &TypewriterProps) -> Html {
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with_deps(
            move |raw: &Option<AttrValue>| {
                let phrases = parse_phrases(raw.as_deref());
                let handle = scheduler::start(
                    Typewriter::new(phrases),
                    0,
                    Callback::from(move |visible: String| text.set(visible)),
                );
                move || drop(handle)
            },
            props.phrases.clone(),
        );
    }

    html! {
        <span id="typing-text" data-phrases={props.phrases.clone()}>{(*text).clone()}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::testing::VirtualClock;

    fn phrases(list: &[&str]) -> Vec<String> {
        list.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn cycles_through_phrases() {
        let mut clock = VirtualClock::new(Typewriter::new(phrases(&["Hi", "Bye"])), 0);
        let frames = clock.frames(14);
        assert_eq!(
            frames,
            vec![
                "H", "Hi", "H", "", "B", "By", "Bye", "By", "B", "", "H", "Hi", "H", "",
            ]
        );
        assert!(!clock.is_finished());
    }

    #[test]
    fn timing_follows_type_pause_and_delete_speeds() {
        let mut clock = VirtualClock::new(Typewriter::new(phrases(&["Hi"])), 0);
        let frames = clock.advance(2_000);
        let times: Vec<u64> = frames.iter().map(|(at, _)| *at).collect();
        // type, type, pause, delete, delete, then type the phrase again
        assert_eq!(times, vec![0, 80, 1480, 1530, 1610, 1690]);
    }

    #[test]
    fn single_phrase_wraps_to_itself() {
        let mut clock = VirtualClock::new(Typewriter::new(phrases(&["A"])), 0);
        assert_eq!(clock.frames(4), vec!["A", "", "A", ""]);
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut clock = VirtualClock::new(Typewriter::new(phrases(&["né"])), 0);
        assert_eq!(clock.frames(3), vec!["n", "né", "n"]);
    }

    #[test]
    fn empty_phrase_is_skipped_over() {
        let mut clock = VirtualClock::new(Typewriter::new(phrases(&["", "ok"])), 0);
        assert_eq!(clock.frames(4), vec!["", "", "o", "ok"]);
    }

    #[test]
    fn parses_phrase_attribute() {
        assert_eq!(parse_phrases(Some(r#"["A","B"]"#)), phrases(&["A", "B"]));
    }

    #[test]
    fn bad_phrase_attribute_falls_back_to_defaults() {
        for raw in [None, Some(""), Some("not json"), Some("[]"), Some(r#"{"a":1}"#), Some("[1,2]")] {
            assert_eq!(parse_phrases(raw), default_phrases(), "{raw:?}");
        }
    }
}
