use log::{debug, info};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::js_sys::Number;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{COUNTER_DURATION, COUNTER_FRAME_RATE, STATS_THRESHOLD};
use crate::dom::{self, Observe};
use crate::scheduler::{self, Animation, Tick};

/// Integer-prefix parse of a `data-target` value: leading whitespace, an
/// optional sign and the digits that follow. Anything unusable is 0; digit
/// runs too long for an i64 saturate.
pub fn parse_target(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else { return 0 };
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    match rest[..end].parse::<i64>() {
        Ok(magnitude) if negative => -magnitude,
        Ok(magnitude) => magnitude,
        Err(_) if end == 0 => 0,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Rounds half up, the way browsers round animation values.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn frame_interval() -> u32 {
    round_half_up(1000.0 / COUNTER_FRAME_RATE as f64) as u32
}

pub fn total_frames() -> u32 {
    round_half_up(COUNTER_DURATION as f64 / (1000.0 / COUNTER_FRAME_RATE as f64)) as u32
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Renders a counter value with the browser's locale grouping.
#[cfg(target_arch = "wasm32")]
pub fn counter_text(value: i64) -> String {
    Number::from(value as f64)
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn counter_text(value: i64) -> String {
    format_thousands(value)
}

/// Eased ramp from 0 to `target`, one value per frame.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    frame: u32,
    total: u32,
    interval: u32,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            frame: 0,
            total: total_frames().max(1),
            interval: frame_interval(),
        }
    }
}

impl Animation for CounterAnimation {
    type Output = i64;

    fn tick(&mut self) -> Tick<i64> {
        self.frame += 1;
        if self.frame >= self.total {
            // Snap to avoid rounding drift on the last frame
            return Tick {
                output: self.target,
                next: None,
            };
        }
        let progress = self.frame as f64 / self.total as f64;
        Tick {
            output: round_half_up(self.target as f64 * ease_out_cubic(progress)),
            next: Some(self.interval),
        }
    }
}

/// Where a group of counters is in its one-shot lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GroupPhase {
    #[default]
    Idle,
    Playing,
    /// No way to watch visibility: show the final values straight away.
    Settled,
}

impl GroupPhase {
    /// Feeds one visibility change of the stats section. Once playing the
    /// group never goes back and the section no longer needs watching.
    pub fn on_intersection(&mut self, intersecting: bool) -> Observe {
        match (*self, intersecting) {
            (GroupPhase::Idle, false) => Observe::Keep,
            (GroupPhase::Idle, true) => {
                *self = GroupPhase::Playing;
                Observe::Stop
            }
            (GroupPhase::Playing | GroupPhase::Settled, _) => Observe::Stop,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct StatItem {
    pub target: AttrValue,
    pub label: AttrValue,
    pub suffix: Option<AttrValue>,
}

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub items: Vec<StatItem>,
}

#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    let node = use_node_ref();
    let phase = use_state_eq(GroupPhase::default);

    {
        let node = node.clone();
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let guard = match node.cast::<Element>() {
                    Some(section) if dom::intersection_observer_supported() => {
                        let setter = phase.setter();
                        let mut tracker = GroupPhase::default();
                        dom::observe(&section, STATS_THRESHOLD, None, move |intersecting| {
                            let before = tracker;
                            let next = tracker.on_intersection(intersecting);
                            if tracker != before {
                                info!("Stats visible, starting counters");
                                setter.set(tracker);
                            }
                            next
                        })
                    }
                    _ => None,
                };
                if guard.is_none() {
                    debug!("No intersection observer, showing final counter values");
                    phase.set(GroupPhase::Settled);
                }
                move || drop(guard)
            },
            (),
        );
    }

    html! {
        <section id="stats" class="stats" ref={node}>
            { for props.items.iter().map(|item| html! {
                <div class="stat">
                    <Counter target={item.target.clone()} phase={*phase} />
                    { item.suffix.clone().map(|suffix| html! { <span class="stat-suffix">{ suffix }</span> }).unwrap_or_default() }
                    <p class="stat-label">{ item.label.clone() }</p>
                </div>
            }) }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    /// Raw `data-target` value.
    pub target: AttrValue,
    pub phase: GroupPhase,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let target = parse_target(Some(&*props.target));
    let value = use_state_eq(|| 0i64);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |(phase, target): &(GroupPhase, i64)| {
                let handle = match phase {
                    GroupPhase::Playing => Some(scheduler::start(
                        CounterAnimation::new(*target),
                        frame_interval(),
                        Callback::from(move |current: i64| value.set(current)),
                    )),
                    GroupPhase::Settled => {
                        value.set(*target);
                        None
                    }
                    GroupPhase::Idle => None,
                };
                move || drop(handle)
            },
            (props.phase, target),
        );
    }

    html! {
        <span class="counter" data-target={props.target.clone()}>{ counter_text(*value) }</span>
    }
}
