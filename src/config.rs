//! Timing and threshold constants for the page interactions.

/// Scroll depth past which the fixed header switches to its translucent look.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Counter tick length, roughly one animation frame.
pub const COUNTER_TICK_MS: u32 = 16;

/// Default wall-clock length of a counter run.
pub const COUNTER_DURATION_MS: u32 = 2000;

/// Fraction of a section that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the observed viewport at the bottom so sections reveal a little
/// before they reach the exact edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Simulated round-trip for the contact form.
pub const SUBMIT_DELAY_MS: u32 = 1500;

/// How long a form status message stays on screen.
pub const MESSAGE_HIDE_MS: u32 = 5000;

/// How long a stat tile stays scaled up after a click.
pub const STAT_PRESS_MS: u32 = 200;

/// Hero content moves at half the scroll speed.
pub const PARALLAX_FACTOR: f64 = 0.5;
