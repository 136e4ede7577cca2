use std::rc::Rc;

use shared::{OptionStore, WheelError, WheelGame};
use yew::prelude::*;

use crate::storage::BrowserStorage;

/// A refusal the user has to acknowledge. `id` changes on every notice so
/// repeating the same mistake shows the alert again.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
}

pub enum WheelAction {
    Add(String),
    Remove(usize),
    Spin,
    SpinFinished,
}

/// Page state. Every action goes through [`Reducible::reduce`] and the page
/// re-renders from the returned value.
#[derive(Debug, Clone)]
pub struct WheelState {
    pub game: WheelGame<BrowserStorage>,
    pub notice: Option<Notice>,
    /// Bumped on every accepted option, the form clears its input on change.
    pub additions: u32,
    /// Bumped on every finished spin, each bump fires one confetti burst.
    pub celebrations: u32,
}

impl WheelState {
    pub fn new(store: OptionStore<BrowserStorage>) -> Self {
        Self {
            game: WheelGame::new(store),
            notice: None,
            additions: 0,
            celebrations: 0,
        }
    }

    /// Reads the saved options. Unreadable data is logged and replaced by
    /// the defaults; it is overwritten by the next edit.
    pub fn load(storage_key: &str) -> Self {
        let storage = BrowserStorage::open();
        let store = match OptionStore::load_with_key(storage.clone(), storage_key) {
            Ok(store) => store,
            Err(err) => {
                log::warn!("Could not load saved options, using defaults: {}", err);
                OptionStore::with_defaults(storage, storage_key)
            }
        };
        Self::new(store)
    }

    fn report(&mut self, err: WheelError) {
        match err {
            WheelError::Storage(err) => log::error!("Failed to save options: {}", err),
            err if err.is_user_notice() => {
                let id = self.notice.as_ref().map_or(1, |notice| notice.id + 1);
                self.notice = Some(Notice {
                    id,
                    message: err.to_string(),
                });
            }
            err => log::debug!("Ignored wheel action: {}", err),
        }
    }
}

impl Reducible for WheelState {
    type Action = WheelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        let result = match action {
            WheelAction::Add(raw) => {
                let before = next.game.options().len();
                let result = next.game.add_option(&raw);
                // A failed save still leaves the option on the wheel.
                if next.game.options().len() > before {
                    next.additions += 1;
                }
                result
            }
            WheelAction::Remove(index) => next.game.remove_option(index).map(|_| ()),
            WheelAction::Spin => next.game.start_spin(&mut rand::thread_rng()).map(|_| ()),
            WheelAction::SpinFinished => match next.game.complete_spin() {
                Ok(_) => {
                    next.celebrations += 1;
                    Ok(())
                }
                Err(err) => Err(err),
            },
        };

        if let Err(err) = result {
            next.report(err);
        }
        Rc::new(next)
    }
}

#[hook]
pub fn use_wheel(storage_key: String) -> UseReducerHandle<WheelState> {
    use_reducer(move || WheelState::load(&storage_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MemoryStore;

    fn state() -> Rc<WheelState> {
        let storage = BrowserStorage::Memory(MemoryStore::new());
        Rc::new(WheelState::new(OptionStore::load(storage).unwrap()))
    }

    #[test]
    fn test_add_bumps_additions() {
        let state = state().reduce(WheelAction::Add("  Sushi ".to_string()));
        assert_eq!(state.additions, 1);
        assert_eq!(state.game.options().get(3), Some("Sushi"));
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_duplicate_raises_a_fresh_notice_each_time() {
        let state = state().reduce(WheelAction::Add("Option 1".to_string()));
        let first = state.notice.clone().unwrap();
        assert_eq!(first.message, "This option already exists!");
        assert_eq!(state.additions, 0);

        let state = state.reduce(WheelAction::Add("Option 1".to_string()));
        assert_eq!(state.notice.as_ref().unwrap().id, first.id + 1);
        assert_eq!(state.game.options().len(), 3);
    }

    #[test]
    fn test_blank_add_is_silent() {
        let state = state().reduce(WheelAction::Add("   ".to_string()));
        assert_eq!(state.notice, None);
        assert_eq!(state.additions, 0);
    }

    #[test]
    fn test_spin_cycle_celebrates_once() {
        let state = state().reduce(WheelAction::Spin);
        assert!(state.game.is_spinning());

        let state = state.reduce(WheelAction::Remove(0));
        assert_eq!(state.game.options().len(), 3);

        let state = state.reduce(WheelAction::SpinFinished);
        assert!(!state.game.is_spinning());
        assert_eq!(state.celebrations, 1);
        assert!(state.game.winner().is_some());

        let state = state.reduce(WheelAction::SpinFinished);
        assert_eq!(state.celebrations, 1);
    }

    #[test]
    fn test_spin_on_empty_wheel_does_nothing() {
        let mut state = state();
        for _ in 0..3 {
            state = state.reduce(WheelAction::Remove(0));
        }
        let state = state.reduce(WheelAction::Spin);
        assert!(!state.game.is_spinning());
        assert_eq!(state.notice, None);
    }
}
