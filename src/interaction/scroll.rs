use serde::{Deserialize, Serialize};

use crate::core::TimerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollVisibility {
    pub visible: bool,
    pub threshold_px: u32,
}

/// Presentation change requested by a scroll sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    /// Lay the control out and fade it in.
    Show,
    /// Fade the control out; when `schedule_hide_check` is set a delayed
    /// layout removal must be (re)armed.
    FadeOut { schedule_hide_check: bool },
    Unchanged,
}

/// Visibility state of the scroll-to-top control.
///
/// `displayed` tracks layout presence and `opaque` the fade target. Layout
/// removal only happens through a hide check that re-reads the latest
/// offset, so a quick dip below the threshold cannot hide a control the
/// page has scrolled back past.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAffordance {
    threshold_px: u32,
    last_offset_px: f64,
    displayed: bool,
    opaque: bool,
    pending_hide: Option<TimerId>,
}

impl ScrollAffordance {
    #[must_use]
    pub fn new(threshold_px: u32) -> Self {
        Self {
            threshold_px,
            last_offset_px: 0.0,
            displayed: false,
            opaque: false,
            pending_hide: None,
        }
    }

    #[must_use]
    pub fn visibility(self) -> ScrollVisibility {
        ScrollVisibility {
            visible: self.displayed,
            threshold_px: self.threshold_px,
        }
    }

    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.opaque
    }

    #[must_use]
    pub fn last_offset_px(self) -> f64 {
        self.last_offset_px
    }

    #[must_use]
    pub fn pending_hide(self) -> Option<TimerId> {
        self.pending_hide
    }

    fn above_threshold(self, offset_px: f64) -> bool {
        offset_px > f64::from(self.threshold_px)
    }

    pub fn on_sample(&mut self, offset_px: f64) -> ScrollAction {
        self.last_offset_px = offset_px;
        if self.above_threshold(offset_px) {
            let changed = !self.displayed || !self.opaque;
            self.displayed = true;
            self.opaque = true;
            return if changed {
                ScrollAction::Show
            } else {
                ScrollAction::Unchanged
            };
        }

        if self.opaque {
            self.opaque = false;
            return ScrollAction::FadeOut {
                schedule_hide_check: self.displayed,
            };
        }
        if self.displayed && self.pending_hide.is_none() {
            return ScrollAction::FadeOut {
                schedule_hide_check: true,
            };
        }
        ScrollAction::Unchanged
    }

    /// Installs a new hide check and returns the one it replaces.
    pub fn arm_hide_check(&mut self, timer: TimerId) -> Option<TimerId> {
        self.pending_hide.replace(timer)
    }

    /// Resolves a hide check. Returns `true` when the control must leave layout.
    pub fn on_hide_check(&mut self, timer: TimerId) -> bool {
        if self.pending_hide != Some(timer) {
            return false;
        }
        self.pending_hide = None;
        if self.displayed && !self.above_threshold(self.last_offset_px) {
            self.displayed = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrollAction, ScrollAffordance};
    use crate::core::{Scheduler, TimerQueue};

    #[test]
    fn threshold_offset_counts_as_below() {
        let mut affordance = ScrollAffordance::new(300);
        assert_eq!(affordance.on_sample(300.0), ScrollAction::Unchanged);
        assert_eq!(affordance.on_sample(300.5), ScrollAction::Show);
        assert_eq!(
            affordance.on_sample(300.0),
            ScrollAction::FadeOut {
                schedule_hide_check: true
            }
        );
    }

    #[test]
    fn stale_hide_check_is_ignored() {
        let mut queue = TimerQueue::new();
        let mut affordance = ScrollAffordance::new(300);
        affordance.on_sample(400.0);
        affordance.on_sample(0.0);
        let first = queue.schedule(300, ());
        assert_eq!(affordance.arm_hide_check(first), None);
        let second = queue.schedule(300, ());
        assert_eq!(affordance.arm_hide_check(second), Some(first));

        assert!(!affordance.on_hide_check(first));
        assert!(affordance.visibility().visible);
        assert!(affordance.on_hide_check(second));
        assert!(!affordance.visibility().visible);
    }
}
