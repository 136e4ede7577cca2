use rand::Rng;

use crate::error::WheelError;
use crate::options::{OptionList, OptionStore};
use crate::storage::KeyValueStore;

/// Spin progress. `selected_index` is only meaningful while spinning or
/// right after a spin, `winner` only once a spin has completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpinState {
    pub is_spinning: bool,
    pub selected_index: usize,
    pub winner: Option<String>,
}

/// Result of a completed spin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinOutcome {
    pub index: usize,
    pub label: String,
}

/// The option store plus the spin state machine (`Idle` / `Spinning`).
/// Editing the options is refused while the wheel turns.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelGame<S> {
    store: OptionStore<S>,
    spin: SpinState,
}

impl<S: KeyValueStore> WheelGame<S> {
    pub fn new(store: OptionStore<S>) -> Self {
        Self {
            store,
            spin: SpinState::default(),
        }
    }

    pub fn options(&self) -> &OptionList {
        self.store.options()
    }

    pub fn spin_state(&self) -> &SpinState {
        &self.spin
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_spinning
    }

    pub fn selected_index(&self) -> usize {
        self.spin.selected_index
    }

    pub fn winner(&self) -> Option<&str> {
        self.spin.winner.as_deref()
    }

    pub fn can_spin(&self) -> bool {
        !self.spin.is_spinning && !self.options().is_empty()
    }

    pub fn add_option(&mut self, raw: &str) -> Result<(), WheelError> {
        if self.spin.is_spinning {
            return Err(WheelError::SpinInProgress);
        }
        self.store.add(raw)
    }

    pub fn remove_option(&mut self, index: usize) -> Result<String, WheelError> {
        if self.spin.is_spinning {
            return Err(WheelError::SpinInProgress);
        }
        self.store.remove(index)
    }

    /// `Idle -> Spinning`. Picks the winning slot uniformly and clears the
    /// previous winner.
    pub fn start_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, WheelError> {
        if self.spin.is_spinning {
            return Err(WheelError::SpinInProgress);
        }
        let len = self.options().len();
        if len == 0 {
            return Err(WheelError::NoOptions);
        }

        let index = rng.gen_range(0..len);
        self.spin = SpinState {
            is_spinning: true,
            selected_index: index,
            winner: None,
        };
        log::debug!("Spinning towards slot {} of {}", index, len);
        Ok(index)
    }

    /// `Spinning -> Idle`, driven by the wheel's animation-complete signal.
    pub fn complete_spin(&mut self) -> Result<SpinOutcome, WheelError> {
        if !self.spin.is_spinning {
            return Err(WheelError::NotSpinning);
        }
        let index = self.spin.selected_index;
        let label = self
            .options()
            .get(index)
            .ok_or(WheelError::NoSuchOption {
                index,
                len: self.options().len(),
            })?
            .to_string();

        self.spin.is_spinning = false;
        self.spin.winner = Some(label.clone());
        log::info!("Wheel stopped on {:?}", label);
        Ok(SpinOutcome { index, label })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STORAGE_KEY;
    use crate::storage::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game_with(labels: &[&str]) -> WheelGame<MemoryStore> {
        let json = serde_json::to_string(labels).unwrap();
        let store = OptionStore::load(MemoryStore::with_item(STORAGE_KEY, &json)).unwrap();
        WheelGame::new(store)
    }

    #[test]
    fn test_spin_on_empty_wheel_stays_idle() {
        let mut game = game_with(&[]);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(!game.can_spin());
        assert!(matches!(game.start_spin(&mut rng), Err(WheelError::NoOptions)));
        assert!(!game.is_spinning());
    }

    #[test]
    fn test_winner_matches_selected_slot() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut game = game_with(&["A", "B", "C", "D", "E"]);
            let index = game.start_spin(&mut rng).unwrap();
            assert!(index < 5);
            assert_eq!(game.selected_index(), index);

            let outcome = game.complete_spin().unwrap();
            assert_eq!(outcome.index, index);
            assert_eq!(game.winner(), game.options().get(index));
            assert_eq!(outcome.label, game.options().get(index).unwrap());
            assert!(!game.is_spinning());
        }
    }

    #[test]
    fn test_every_slot_can_win() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = game_with(&["A", "B", "C"]);
        let mut seen = [false; 3];
        for _ in 0..300 {
            seen[game.start_spin(&mut rng).unwrap()] = true;
            game.complete_spin().unwrap();
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn test_edits_refused_while_spinning() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = game_with(&["A", "B", "C"]);
        game.start_spin(&mut rng).unwrap();

        assert!(matches!(game.add_option("D"), Err(WheelError::SpinInProgress)));
        assert!(matches!(game.remove_option(0), Err(WheelError::SpinInProgress)));
        assert!(matches!(game.start_spin(&mut rng), Err(WheelError::SpinInProgress)));
        assert_eq!(game.options().labels(), ["A", "B", "C"]);

        game.complete_spin().unwrap();
        game.add_option("D").unwrap();
        assert_eq!(game.options().len(), 4);
    }

    #[test]
    fn test_new_spin_clears_previous_winner() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = game_with(&["A", "B"]);
        game.start_spin(&mut rng).unwrap();
        game.complete_spin().unwrap();
        assert!(game.winner().is_some());

        game.start_spin(&mut rng).unwrap();
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_complete_while_idle_is_rejected() {
        let mut game = game_with(&["A"]);
        assert!(matches!(game.complete_spin(), Err(WheelError::NotSpinning)));
        assert_eq!(game.spin_state(), &SpinState::default());
    }
}
