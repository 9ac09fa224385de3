use std::time::Duration;

use crate::content::TAGLINES;
use crate::sim::{Section, Simulator};

/// Rotating headline at the top of the landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hero {
    index: usize,
}

impl Hero {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tagline(&self) -> &'static str {
        TAGLINES[self.index % TAGLINES.len()]
    }
}

impl Section for Hero {
    fn name(&self) -> &'static str {
        "hero"
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(3000)
    }

    fn on_tick(&mut self, _sim: &mut Simulator) {
        self.index = super::cycle(self.index, TAGLINES.len(), true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{FixedEntropy, ManualClock, Mounted};

    #[test]
    fn test_rotates_every_three_seconds() {
        let clock = ManualClock::new();
        let mut sim = Simulator::new(Box::new(clock.clone()), Box::new(FixedEntropy::new(0.5)));
        let mut hero = Mounted::mount(Hero::new(), &sim);
        assert_eq!(hero.get().tagline(), "AI-Powered IoT Management");

        clock.advance(Duration::from_millis(2999));
        hero.advance(&mut sim);
        assert_eq!(hero.get().index(), 0);

        clock.advance(Duration::from_millis(1));
        hero.advance(&mut sim);
        assert_eq!(hero.get().tagline(), "Predictive Analytics Engine");

        clock.advance(Duration::from_millis(9000));
        hero.advance(&mut sim);
        assert_eq!(hero.get().index(), 0);
    }
}
