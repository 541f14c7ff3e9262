use tracing::{debug, warn};

use crate::error::Result;
use crate::registry::SlideRegistry;
use crate::state::Navigation;

/// Owns the current position within a registry and moves it around the
/// circle of slides. The slide type is opaque here.
pub struct PresentationController<S> {
    registry: SlideRegistry<S>,
    current_index: usize,
}

/// What the viewer should show right now.
pub struct CurrentSlide<'a, S> {
    pub slide: &'a S,
    pub index: usize,
    pub total: usize,
}

impl<S> CurrentSlide<'_, S> {
    /// 1-based position text, e.g. `"2 / 5"`.
    pub fn indicator(&self) -> String {
        format!("{} / {}", self.index + 1, self.total)
    }
}

impl<S> PresentationController<S> {
    pub fn new(registry: SlideRegistry<S>) -> Self {
        Self {
            registry,
            current_index: 0,
        }
    }

    pub fn next(&mut self) {
        let total = self.registry.len();
        self.move_to((self.current_index + 1) % total);
    }

    pub fn previous(&mut self) {
        let total = self.registry.len();
        // + total keeps the operand non-negative before the modulo
        self.move_to((self.current_index + total - 1) % total);
    }

    /// Jump straight to `index`. Out-of-range targets are rejected and the
    /// position is left untouched.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if let Err(err) = self.registry.try_get(index) {
            warn!(index, total = self.registry.len(), "rejected jump to missing slide");
            return Err(err);
        }
        self.move_to(index);
        Ok(())
    }

    pub fn apply(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::Advance => self.next(),
            Navigation::Retreat => self.previous(),
        }
    }

    pub fn current(&self) -> CurrentSlide<'_, S> {
        CurrentSlide {
            slide: self.registry.get(self.current_index),
            index: self.current_index,
            total: self.registry.len(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.registry.len()
    }

    fn move_to(&mut self, index: usize) {
        debug!(
            from = self.current_index,
            to = index,
            total = self.registry.len(),
            "slide changed"
        );
        self.current_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn controller(total: usize) -> PresentationController<usize> {
        PresentationController::new(SlideRegistry::new((0..total).collect()).unwrap())
    }

    #[test]
    fn test_starts_at_first_slide() {
        let c = controller(5);
        assert_eq!(c.current_index(), 0);
        assert_eq!(*c.current().slide, 0);
        assert_eq!(c.current().indicator(), "1 / 5");
    }

    #[test]
    fn test_next_k_times_is_k_mod_n() {
        for total in 1..=9 {
            let mut c = controller(total);
            for k in 1..=(3 * total + 2) {
                c.next();
                assert_eq!(c.current_index(), k % total, "total={total} k={k}");
            }
        }
    }

    #[test]
    fn test_previous_and_next_are_inverses() {
        for total in 1..=9 {
            for start in 0..total {
                let mut c = controller(total);
                c.go_to(start).unwrap();

                c.next();
                c.previous();
                assert_eq!(c.current_index(), start);

                c.previous();
                c.next();
                assert_eq!(c.current_index(), start);
            }
        }
    }

    #[test]
    fn test_previous_equals_next_n_minus_one_times() {
        for total in 1..=9 {
            for start in 0..total {
                let mut back = controller(total);
                back.go_to(start).unwrap();
                back.previous();

                let mut forward = controller(total);
                forward.go_to(start).unwrap();
                for _ in 0..total - 1 {
                    forward.next();
                }
                assert_eq!(back.current_index(), forward.current_index());
            }
        }
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut c = controller(5);
        c.go_to(3).unwrap();
        for _ in 0..5 {
            c.next();
        }
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_index_stays_in_range_for_mixed_sequences() {
        for total in 1..=7 {
            let mut c = controller(total);
            // deterministic pseudo-random walk
            let mut seed: u32 = 0x9e37_79b9 ^ total as u32;
            for _ in 0..200 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                if seed % 2 == 0 {
                    c.next();
                } else {
                    c.previous();
                }
                assert!(c.current_index() < total);
                assert_eq!(*c.current().slide, c.current_index());
            }
        }
    }

    #[test]
    fn test_five_slide_walkthrough() {
        let mut c = controller(5);
        c.previous();
        assert_eq!(c.current_index(), 4);
        c.next();
        assert_eq!(c.current_index(), 0);
        c.next();
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.current().indicator(), "2 / 5");
    }

    #[test]
    fn test_five_nexts_wrap_to_zero() {
        let mut c = controller(5);
        for _ in 0..5 {
            c.next();
        }
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut c = controller(1);
        c.next();
        assert_eq!(c.current_index(), 0);
        c.previous();
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.current().indicator(), "1 / 1");
    }

    #[test]
    fn test_go_to_rejects_out_of_range() {
        let mut c = controller(5);
        c.go_to(2).unwrap();
        assert_eq!(c.go_to(5), Err(Error::out_of_range(5, 5)));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_apply_dispatches_navigation() {
        let mut c = controller(3);
        c.apply(Navigation::Advance);
        assert_eq!(c.current_index(), 1);
        c.apply(Navigation::Retreat);
        c.apply(Navigation::Retreat);
        assert_eq!(c.current_index(), 2);
    }
}
