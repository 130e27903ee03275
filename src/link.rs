//! Cross-channel coordination between the two halves of a module.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Hemisphere Linking
==================

The module runs two independent algorithms side by side, one per
"hemisphere". Some algorithm pairs cooperate: a clock divider on one side
can drive a melody generator on the other. They only count as linked
while both have reported activity recently.

    tick:      0 ──────── 100 ──────── 200 ──────── 300
    Left:      reg                      reg
    Right:            reg                      reg
    linked:    ├──────────── yes ──────┤├──── yes ────

A link is owned by whoever hosts both hemispheres and lent to each side
by `&mut`. The tick is passed in on every timed call; stamps compare with
wrapping arithmetic so counter roll-over is harmless.

The flag pairs are latches:

    trigger() → ready()          consumed once, only while linked
    reseed()  → should_reseed()  consumed once
    set_looping / set_loop_step  plain shared values
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    Left,
    Right,
}

impl Hemisphere {
    fn index(self) -> usize {
        match self {
            Hemisphere::Left => 0,
            Hemisphere::Right => 1,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkConfig {
    /// Both hemispheres must have registered within this many ticks.
    pub window_ticks: u32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self { window_ticks: 160 }
    }
}

#[derive(Debug, Clone)]
pub struct HemisphereLink {
    config: LinkConfig,
    registered: [u32; 2],
    div: Option<Hemisphere>,
    melo: Option<Hemisphere>,
    ready: bool,
    looping: bool,
    loop_step: i32,
    reseed: bool,
}

impl Default for HemisphereLink {
    fn default() -> Self {
        Self::new(LinkConfig::default())
    }
}

impl HemisphereLink {
    pub fn new(config: LinkConfig) -> Self {
        Self {
            config,
            registered: [0; 2],
            div: None,
            melo: None,
            ready: false,
            looping: false,
            loop_step: 0,
            reseed: false,
        }
    }

    /// Stamp the divider (clock) side.
    pub fn register_div(&mut self, hemisphere: Hemisphere, now: u32) {
        self.div = Some(hemisphere);
        self.registered[hemisphere.index()] = now;
    }

    /// Stamp the melody side.
    pub fn register_melo(&mut self, hemisphere: Hemisphere, now: u32) {
        self.melo = Some(hemisphere);
        self.registered[hemisphere.index()] = now;
    }

    pub fn div_hemisphere(&self) -> Option<Hemisphere> {
        self.div
    }

    pub fn melo_hemisphere(&self) -> Option<Hemisphere> {
        self.melo
    }

    /// True while both hemispheres registered within the window.
    pub fn is_linked(&self, now: u32) -> bool {
        let window = self.config.window_ticks;
        self.registered
            .iter()
            .all(|&stamp| now.wrapping_sub(stamp) < window)
    }

    pub fn trigger(&mut self) {
        self.ready = true;
    }

    /// Consume a pending trigger. Reports nothing unless linked; the
    /// trigger stays latched until it can be delivered.
    pub fn ready(&mut self, now: u32) -> bool {
        if self.ready && self.is_linked(now) {
            self.ready = false;
            return true;
        }
        false
    }

    pub fn set_looping(&mut self, looping: bool) {
        if looping != self.looping {
            tracing::debug!(looping, "hemisphere link looping changed");
        }
        self.looping = looping;
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn set_loop_step(&mut self, step: i32) {
        self.loop_step = step;
    }

    pub fn loop_step(&self) -> i32 {
        self.loop_step
    }

    pub fn reseed(&mut self) {
        tracing::debug!("hemisphere link reseed requested");
        self.reseed = true;
    }

    /// Consume a pending reseed request.
    pub fn should_reseed(&mut self) -> bool {
        std::mem::take(&mut self.reseed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linked_only_while_both_recent() {
        let mut link = HemisphereLink::default();
        // both stamps start at tick 0
        assert!(link.is_linked(0));
        assert!(link.is_linked(159));
        assert!(!link.is_linked(160));

        link.register_div(Hemisphere::Left, 1000);
        assert!(!link.is_linked(1000));
        link.register_melo(Hemisphere::Right, 1100);
        assert!(link.is_linked(1100));
        assert!(link.is_linked(1159));
        assert!(!link.is_linked(1160));
    }

    #[test]
    fn records_roles() {
        let mut link = HemisphereLink::default();
        assert_eq!(link.div_hemisphere(), None);
        link.register_div(Hemisphere::Right, 5);
        link.register_melo(Hemisphere::Left, 6);
        assert_eq!(link.div_hemisphere(), Some(Hemisphere::Right));
        assert_eq!(link.melo_hemisphere(), Some(Hemisphere::Left));
    }

    #[test]
    fn survives_tick_wraparound() {
        let mut link = HemisphereLink::default();
        link.register_div(Hemisphere::Left, u32::MAX - 10);
        link.register_melo(Hemisphere::Right, u32::MAX - 5);
        assert!(link.is_linked(20));
        assert!(!link.is_linked(200));
    }

    #[test]
    fn trigger_waits_for_link() {
        let mut link = HemisphereLink::default();
        link.trigger();
        assert!(!link.ready(500));
        // still latched
        link.register_div(Hemisphere::Left, 600);
        link.register_melo(Hemisphere::Right, 610);
        assert!(link.ready(620));
        assert!(!link.ready(621));
    }

    #[test]
    fn custom_window() {
        let mut link = HemisphereLink::new(LinkConfig { window_ticks: 10 });
        link.register_div(Hemisphere::Left, 100);
        link.register_melo(Hemisphere::Right, 100);
        assert!(link.is_linked(109));
        assert!(!link.is_linked(110));
    }

    #[test]
    fn reseed_is_consumed_once() {
        let mut link = HemisphereLink::default();
        assert!(!link.should_reseed());
        link.reseed();
        assert!(link.should_reseed());
        assert!(!link.should_reseed());
    }

    #[test]
    fn loop_state_is_shared() {
        let mut link = HemisphereLink::default();
        assert!(!link.is_looping());
        link.set_looping(true);
        link.set_loop_step(7);
        assert!(link.is_looping());
        assert_eq!(link.loop_step(), 7);
    }
}
