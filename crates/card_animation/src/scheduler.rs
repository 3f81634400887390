//! Animation scheduler
//!
//! Owns every active spring and advances them together each frame.

use crate::spring::{Spring, SpringConfig};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct SpringId;
}

/// The animation scheduler that ticks all active springs
#[derive(Default)]
pub struct AnimationScheduler {
    springs: SlotMap<SpringId, Spring>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            springs: SlotMap::with_key(),
        }
    }

    pub fn add_spring(&mut self, spring: Spring) -> SpringId {
        self.springs.insert(spring)
    }

    /// Convenience for `add_spring(Spring::new(config, initial))`
    pub fn spring_at(&mut self, config: SpringConfig, initial: f32) -> SpringId {
        self.add_spring(Spring::new(config, initial))
    }

    pub fn get_spring(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id)
    }

    pub fn get_spring_mut(&mut self, id: SpringId) -> Option<&mut Spring> {
        self.springs.get_mut(id)
    }

    pub fn remove_spring(&mut self, id: SpringId) -> Option<Spring> {
        self.springs.remove(id)
    }

    /// Current value of a spring, `None` if it was removed
    pub fn value(&self, id: SpringId) -> Option<f32> {
        self.springs.get(id).map(Spring::value)
    }

    /// Retarget a spring; unknown ids are ignored
    pub fn set_target(&mut self, id: SpringId, target: f32) {
        if let Some(spring) = self.springs.get_mut(id) {
            spring.set_target(target);
        } else {
            tracing::trace!(?id, "set_target on removed spring");
        }
    }

    /// Advance every spring by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        for (_, spring) in self.springs.iter_mut() {
            spring.step(dt);
        }
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        self.springs.iter().any(|(_, s)| !s.is_settled())
    }

    /// Get the number of springs in the scheduler
    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_all_springs() {
        let mut scheduler = AnimationScheduler::new();
        let a = scheduler.spring_at(SpringConfig::stiff(), 0.0);
        let b = scheduler.spring_at(SpringConfig::stiff(), 10.0);
        scheduler.set_target(a, 1.0);
        scheduler.set_target(b, 0.0);

        assert!(scheduler.has_active_animations());
        for _ in 0..300 {
            scheduler.tick(1.0 / 60.0);
        }

        assert_eq!(scheduler.value(a), Some(1.0));
        assert_eq!(scheduler.value(b), Some(0.0));
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_removed_spring_is_gone() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.spring_at(SpringConfig::snappy(), 3.0);
        assert!(scheduler.remove_spring(id).is_some());
        assert_eq!(scheduler.value(id), None);
        scheduler.set_target(id, 1.0);
        assert_eq!(scheduler.spring_count(), 0);
    }
}
