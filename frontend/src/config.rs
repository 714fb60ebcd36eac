use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Local storage key holding "dark" or "light".
pub const THEME_KEY: &str = "site-theme";

/// Viewports wider than this always get the desktop nav.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub const DEFAULT_PHRASES: [&str; 3] = ["We Fund.", "You Trade.", "We Grow Together."];

// Typewriter timings (ms)
pub const TYPE_SPEED: u32 = 80;
pub const DELETE_SPEED: u32 = 50;
pub const PHRASE_PAUSE: u32 = 1400;

// Counter animation
pub const COUNTER_DURATION: u32 = 1500;
pub const COUNTER_FRAME_RATE: u32 = 30;

// Intersection observer settings
pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const STATS_THRESHOLD: f64 = 0.4;
