//! Draw state machine

use crate::core::error::DomainError;
use crate::roster::entities::Roster;
use rand::Rng;

/// Partition of the roster into names still available and names already
/// chosen.
///
/// Every name of the roster passed to [`DrawEngine::initialize`] sits in
/// exactly one of the two lists. `chosen` is in draw order, most recent
/// last. Once a draw finds nobody left the engine stays exhausted until it
/// is initialized again.
#[derive(Debug, Clone, Default)]
pub struct DrawEngine {
    available: Vec<String>,
    chosen: Vec<String>,
    exhausted: bool,
}

impl DrawEngine {
    pub fn new(roster: &Roster) -> Self {
        let mut engine = Self::default();
        engine.initialize(roster);
        engine
    }

    /// Full reset: everyone becomes available again.
    pub fn initialize(&mut self, roster: &Roster) {
        self.available = roster.names().to_vec();
        self.chosen.clear();
        self.exhausted = false;
    }

    /// Draw one name uniformly at random from the available names.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String, DomainError> {
        if self.available.is_empty() {
            self.exhausted = true;
            return Err(DomainError::Exhausted);
        }
        let index = rng.random_range(0..self.available.len());
        let name = self.available.remove(index);
        self.chosen.push(name.clone());
        Ok(name)
    }

    /// `(available, chosen)`
    pub fn counts(&self) -> (usize, usize) {
        (self.available.len(), self.chosen.len())
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn chosen(&self) -> &[String] {
        &self.chosen
    }

    pub fn last_chosen(&self) -> Option<&str> {
        self.chosen.last().map(String::as_str)
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Whether a draw can still succeed (the pick control's enabled state).
    pub fn can_draw(&self) -> bool {
        !self.exhausted && !self.available.is_empty()
    }

    /// Whether there is anything to reset (the reset control's enabled state).
    pub fn can_reset(&self) -> bool {
        !self.available.is_empty() || !self.chosen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(mut names: Vec<String>) -> Vec<String> {
        names.sort();
        names
    }

    fn union(engine: &DrawEngine) -> Vec<String> {
        let mut all = engine.available().to_vec();
        all.extend_from_slice(engine.chosen());
        sorted(all)
    }

    #[test]
    fn test_n_draws_exhaust_the_roster() {
        let roster = Roster::parse("Ann\nBen\nCal\nDee\nAnn");
        let mut engine = DrawEngine::new(&roster);
        let mut rng = StdRng::seed_from_u64(7);
        let original = sorted(roster.names().to_vec());

        assert_eq!(union(&engine), original);
        for drawn in 1..=roster.len() {
            engine.draw(&mut rng).unwrap();
            assert_eq!(engine.counts(), (roster.len() - drawn, drawn));
            assert_eq!(union(&engine), original);
        }

        assert!(!engine.can_draw());
        assert!(!engine.is_exhausted());
        assert_eq!(engine.draw(&mut rng), Err(DomainError::Exhausted));
        assert!(engine.is_exhausted());
        assert_eq!(engine.chosen().len(), roster.len());
        assert_eq!(sorted(engine.chosen().to_vec()), original);
    }

    #[test]
    fn test_exhaustion_is_sticky_until_initialize() {
        let roster = Roster::parse("Solo");
        let mut engine = DrawEngine::new(&roster);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(engine.draw(&mut rng).unwrap(), "Solo");
        assert!(engine.draw(&mut rng).unwrap_err().is_exhausted());
        assert!(engine.draw(&mut rng).unwrap_err().is_exhausted());

        engine.initialize(&roster);
        assert!(!engine.is_exhausted());
        assert!(engine.can_draw());
        assert_eq!(engine.counts(), (1, 0));
    }

    #[test]
    fn test_chosen_is_in_draw_order() {
        let roster = Roster::parse("a\nb\nc\nd");
        let mut engine = DrawEngine::new(&roster);
        let mut rng = StdRng::seed_from_u64(42);

        let mut drawn = Vec::new();
        while engine.can_draw() {
            drawn.push(engine.draw(&mut rng).unwrap());
            assert_eq!(engine.last_chosen(), drawn.last().map(String::as_str));
        }
        assert_eq!(engine.chosen(), drawn.as_slice());
    }

    #[test]
    fn test_empty_roster() {
        let mut engine = DrawEngine::new(&Roster::default());
        assert!(!engine.can_draw());
        assert!(!engine.can_reset());
        assert!(engine.draw(&mut StdRng::seed_from_u64(0)).is_err());
        assert_eq!(engine.counts(), (0, 0));
    }

    #[test]
    fn test_every_name_can_come_first() {
        let roster = Roster::parse("a\nb\nc");
        let mut firsts = std::collections::HashSet::new();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let mut engine = DrawEngine::new(&roster);
            firsts.insert(engine.draw(&mut rng).unwrap());
        }
        assert_eq!(firsts.len(), 3);
    }
}
