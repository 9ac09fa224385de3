use std::time::Duration;

use crate::content::{Testimonial, TESTIMONIALS};
use crate::sim::{Section, Simulator};

use super::cycle;

/// Customer quote carousel. Advances on its own and on demand.
#[derive(Debug, Clone, Default)]
pub struct Testimonials {
    index: usize,
}

impl Testimonials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static Testimonial {
        &TESTIMONIALS[self.index]
    }

    pub fn next(&mut self) {
        self.index = cycle(self.index, TESTIMONIALS.len(), true);
    }

    pub fn prev(&mut self) {
        self.index = cycle(self.index, TESTIMONIALS.len(), false);
    }
}

impl Section for Testimonials {
    fn name(&self) -> &'static str {
        "testimonials"
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(8000)
    }

    fn on_tick(&mut self, _sim: &mut Simulator) {
        self.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_navigation_wraps() {
        let mut t = Testimonials::new();
        assert_eq!(t.current().name, "Sarah Chen");
        t.prev();
        assert_eq!(t.current().name, "James Thompson");
        t.next();
        t.next();
        assert_eq!(t.current().name, "Michael Rodriguez");
    }
}
