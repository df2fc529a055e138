use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::config;

/// Fixed-step accumulator behind the animated stat numbers. Each tick adds
/// `target / (duration / 16)` and displays the floored running total, snapping
/// exactly to the target on the final tick so float drift never overshoots.
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        let ticks = f64::from(duration_ms) / f64::from(config::COUNTER_TICK_MS);
        Self {
            target,
            increment: f64::from(target) / ticks,
            current: 0.0,
            done: target == 0,
        }
    }

    /// Advance one tick and return the value to display.
    pub fn tick(&mut self) -> u32 {
        if self.done {
            return self.target;
        }
        self.current += self.increment;
        if self.current >= f64::from(self.target) {
            self.done = true;
            self.target
        } else {
            self.current as u32
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    pub active: bool,
}

/// Animated number that counts up to `target` the first time `active` flips
/// to true. Runs at most once; the interval handle is dropped when the run
/// completes or the component unmounts.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let value = use_state(|| 0u32);
    let finished = use_state(|| false);
    let interval = use_mut_ref(|| None::<Interval>);
    let started = use_mut_ref(|| false);

    {
        let value = value.clone();
        let finished = finished.clone();
        let interval_slot = interval.clone();
        let started = started.clone();
        let target = props.target;
        use_effect_with_deps(
            move |active| {
                if *active && !*started.borrow() {
                    *started.borrow_mut() = true;
                    let anim = Rc::new(RefCell::new(CounterAnimation::new(
                        target,
                        config::COUNTER_DURATION_MS,
                    )));
                    let handle = Interval::new(config::COUNTER_TICK_MS, move || {
                        let shown = anim.borrow_mut().tick();
                        value.set(shown);
                        if anim.borrow().is_done() {
                            finished.set(true);
                        }
                    });
                    *interval_slot.borrow_mut() = Some(handle);
                }
                let interval_slot = interval_slot.clone();
                move || {
                    interval_slot.borrow_mut().take();
                }
            },
            props.active,
        );
    }

    // The interval cannot drop itself from inside its own callback, so the
    // finished flag round-trips through state and the handle is released here.
    {
        let interval_slot = interval.clone();
        use_effect_with_deps(
            move |done| {
                if *done {
                    interval_slot.borrow_mut().take();
                }
                || ()
            },
            *finished,
        );
    }

    html! {
        <span class="stat-number">{ *value }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatItemProps {
    pub target: u32,
    pub label: String,
    pub active: bool,
}

/// Stat tile: animated number plus label. Clicking it pops the tile to 1.1x
/// for a beat; a rapid second click restarts the revert timer.
#[function_component(StatItem)]
pub fn stat_item(props: &StatItemProps) -> Html {
    let pressed = use_state(|| false);
    let revert = use_mut_ref(|| None::<Timeout>);

    let onclick = {
        let pressed = pressed.clone();
        let revert = revert.clone();
        Callback::from(move |_: MouseEvent| {
            pressed.set(true);
            let pressed = pressed.clone();
            *revert.borrow_mut() = Some(Timeout::new(config::STAT_PRESS_MS, move || {
                pressed.set(false);
            }));
        })
    };

    let style = if *pressed {
        "transform: scale(1.1);"
    } else {
        "transform: scale(1);"
    };

    html! {
        <div class="stat-item" style={style} onclick={onclick}>
            <StatCounter target={props.target} active={props.active} />
            <span class="stat-label">{ &props.label }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(target: u32, duration_ms: u32) -> (u32, u32) {
        let mut anim = CounterAnimation::new(target, duration_ms);
        let mut ticks = 0;
        let mut last = 0;
        while !anim.is_done() {
            last = anim.tick();
            ticks += 1;
            assert!(ticks <= 200, "animation for {target} never terminated");
        }
        (last, ticks)
    }

    #[test]
    fn lands_exactly_on_divisible_target() {
        let (last, ticks) = run_to_end(500, 2000);
        assert_eq!(last, 500);
        assert_eq!(ticks, 125);
    }

    #[test]
    fn lands_exactly_on_awkward_targets() {
        for target in [7, 8, 12, 499, 1_000_003] {
            let (last, _) = run_to_end(target, 2000);
            assert_eq!(last, target);
        }
    }

    #[test]
    fn displayed_values_never_decrease_or_overshoot() {
        let mut anim = CounterAnimation::new(12, 2000);
        let mut prev = 0;
        while !anim.is_done() {
            let shown = anim.tick();
            assert!(shown >= prev);
            assert!(shown <= 12);
            prev = shown;
        }
        assert_eq!(prev, 12);
    }

    #[test]
    fn zero_target_is_done_at_once() {
        let mut anim = CounterAnimation::new(0, 2000);
        assert!(anim.is_done());
        assert_eq!(anim.tick(), 0);
    }

    #[test]
    fn ticks_after_completion_stay_pinned() {
        let mut anim = CounterAnimation::new(5, 160);
        while !anim.is_done() {
            anim.tick();
        }
        assert_eq!(anim.tick(), 5);
        assert_eq!(anim.tick(), 5);
    }
}
