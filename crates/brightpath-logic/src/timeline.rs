//! Shared millisecond timeline for periodic game timers.
//!
//! Timers belong to the [`GameToken`] of the game activation that
//! scheduled them. When a game ends, is skipped or the phase changes, its
//! owner's timers are cancelled; ticks already handed out for a cancelled
//! owner are recognised as stale by comparing tokens.

use serde::Serialize;

/// Identity of one game activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GameToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimerKind {
    /// One-second combat countdown.
    Countdown,
    /// Falling-word position update.
    Fall,
}

/// A timer firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tick {
    pub owner: GameToken,
    pub kind: TimerKind,
    pub at_millis: u64,
}

#[derive(Debug, Clone)]
struct Timer {
    owner: GameToken,
    kind: TimerKind,
    period: u64,
    last_fired: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Timeline {
    now: u64,
    next_token: u64,
    timers: Vec<Timer>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_millis(&self) -> u64 {
        self.now
    }

    pub fn mint_token(&mut self) -> GameToken {
        self.next_token += 1;
        GameToken(self.next_token)
    }

    /// Register a periodic timer; the first tick is one period from now.
    pub fn schedule(&mut self, owner: GameToken, kind: TimerKind, period_millis: u64) {
        self.timers.push(Timer {
            owner,
            kind,
            period: period_millis.max(1),
            last_fired: self.now,
        });
    }

    /// Drop every timer of `owner`. Returns how many were removed.
    pub fn cancel_owner(&mut self, owner: GameToken) -> usize {
        let before = self.timers.len();
        self.timers.retain(|t| t.owner != owner);
        let removed = before - self.timers.len();
        if removed > 0 {
            log::debug!("cancelled {removed} timer(s) of {owner:?}");
        }
        removed
    }

    /// Restart the period of `owner`'s timers of `kind` from now.
    pub fn restart(&mut self, owner: GameToken, kind: TimerKind) -> usize {
        let now = self.now;
        let mut restarted = 0;
        for timer in self
            .timers
            .iter_mut()
            .filter(|t| t.owner == owner && t.kind == kind)
        {
            timer.last_fired = now;
            restarted += 1;
        }
        restarted
    }

    pub fn pending(&self, owner: GameToken) -> usize {
        self.timers.iter().filter(|t| t.owner == owner).count()
    }

    /// Move the clock forward and return every tick that fell due, in order.
    pub fn advance(&mut self, millis: u64) -> Vec<Tick> {
        let target = self.now.saturating_add(millis);
        let mut fired = Vec::new();
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter_map(|(i, t)| t.last_fired.checked_add(t.period).map(|due| (due, i)))
                .filter(|&(due, _)| due <= target)
                .min();
            let Some((due, i)) = next else { break };
            let timer = &mut self.timers[i];
            timer.last_fired = due;
            self.now = due;
            fired.push(Tick {
                owner: timer.owner,
                kind: timer.kind,
                at_millis: due,
            });
        }
        self.now = target;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodic_ticks_in_due_order() {
        let mut timeline = Timeline::new();
        let a = timeline.mint_token();
        timeline.schedule(a, TimerKind::Countdown, 1000);
        timeline.schedule(a, TimerKind::Fall, 400);
        let ticks = timeline.advance(1200);
        let kinds: Vec<_> = ticks.iter().map(|t| (t.kind, t.at_millis)).collect();
        assert_eq!(
            kinds,
            [
                (TimerKind::Fall, 400),
                (TimerKind::Fall, 800),
                (TimerKind::Countdown, 1000),
                (TimerKind::Fall, 1200),
            ]
        );
        assert_eq!(timeline.now_millis(), 1200);
    }

    #[test]
    fn test_partial_periods_carry_over() {
        let mut timeline = Timeline::new();
        let a = timeline.mint_token();
        timeline.schedule(a, TimerKind::Countdown, 1000);
        assert!(timeline.advance(600).is_empty());
        assert_eq!(timeline.advance(600).len(), 1);
    }

    #[test]
    fn test_cancel_owner_only_drops_its_timers() {
        let mut timeline = Timeline::new();
        let old = timeline.mint_token();
        let new = timeline.mint_token();
        assert_ne!(old, new);
        timeline.schedule(old, TimerKind::Countdown, 1000);
        timeline.schedule(new, TimerKind::Fall, 80);
        assert_eq!(timeline.cancel_owner(old), 1);
        assert_eq!(timeline.pending(old), 0);
        let ticks = timeline.advance(1000);
        assert!(ticks.iter().all(|t| t.owner == new));
        assert_eq!(ticks.len(), 12);
    }

    #[test]
    fn test_restart_realigns_the_period() {
        let mut timeline = Timeline::new();
        let a = timeline.mint_token();
        timeline.schedule(a, TimerKind::Countdown, 1000);
        timeline.schedule(a, TimerKind::Fall, 300);
        timeline.advance(999);
        assert_eq!(timeline.restart(a, TimerKind::Countdown), 1);
        let ticks = timeline.advance(1);
        assert!(ticks.iter().all(|t| t.kind == TimerKind::Fall));
        let ticks = timeline.advance(999);
        assert_eq!(
            ticks.last().map(|t| (t.kind, t.at_millis)),
            Some((TimerKind::Countdown, 1999))
        );
    }

    #[test]
    fn test_huge_advance_saturates() {
        let mut timeline = Timeline::new();
        timeline.advance(10);
        assert!(timeline.advance(u64::MAX).is_empty());
        assert_eq!(timeline.now_millis(), u64::MAX);
        assert!(timeline.advance(1).is_empty());
        assert_eq!(timeline.now_millis(), u64::MAX);
    }
}
