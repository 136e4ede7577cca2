use crate::constants::{SPIN_BUTTON_IDLE, SPIN_BUTTON_SPINNING};
use crate::palette::color_for_slot;
use crate::shared_wheel_game::WheelGame;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendRow {
    pub index: usize,
    pub label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelSegment {
    pub label: String,
    pub background: &'static str,
}

/// Everything the page needs to draw itself, derived from the game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelView {
    pub legend: Vec<LegendRow>,
    pub segments: Vec<WheelSegment>,
    pub spin_label: &'static str,
    pub spin_enabled: bool,
    /// Add and remove controls.
    pub editing_enabled: bool,
    pub must_start_spinning: bool,
    pub prize_number: usize,
    pub winner: Option<String>,
}

impl WheelView {
    pub fn project<S: KeyValueStore>(game: &WheelGame<S>) -> Self {
        let spinning = game.is_spinning();
        let legend = game
            .options()
            .iter()
            .enumerate()
            .map(|(index, label)| LegendRow {
                index,
                label: label.to_string(),
                color: color_for_slot(index),
            })
            .collect::<Vec<_>>();
        let segments = legend
            .iter()
            .map(|row| WheelSegment {
                label: row.label.clone(),
                background: row.color,
            })
            .collect();

        Self {
            legend,
            segments,
            spin_label: if spinning { SPIN_BUTTON_SPINNING } else { SPIN_BUTTON_IDLE },
            spin_enabled: game.can_spin(),
            editing_enabled: !spinning,
            must_start_spinning: spinning,
            prize_number: game.selected_index(),
            winner: if spinning { None } else { game.winner().map(str::to_string) },
        }
    }

    pub fn show_placeholder(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionStore;
    use crate::storage::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game() -> WheelGame<MemoryStore> {
        WheelGame::new(OptionStore::load(MemoryStore::new()).unwrap())
    }

    #[test]
    fn test_idle_view() {
        let view = WheelView::project(&game());
        assert_eq!(view.legend.len(), 3);
        assert_eq!(view.legend[1].label, "Option 2");
        assert_eq!(view.legend[1].color, "#4ECDC4");
        assert_eq!(view.segments[2].background, view.legend[2].color);
        assert_eq!(view.spin_label, "Spin the Wheel!");
        assert!(view.spin_enabled);
        assert!(view.editing_enabled);
        assert!(!view.must_start_spinning);
        assert_eq!(view.winner, None);
        assert!(!view.show_placeholder());
    }

    #[test]
    fn test_spinning_then_winner_view() {
        let mut game = game();
        let mut rng = StdRng::seed_from_u64(2);
        let index = game.start_spin(&mut rng).unwrap();

        let view = WheelView::project(&game);
        assert_eq!(view.spin_label, "Spinning...");
        assert!(!view.spin_enabled);
        assert!(!view.editing_enabled);
        assert!(view.must_start_spinning);
        assert_eq!(view.prize_number, index);
        assert_eq!(view.winner, None);

        let outcome = game.complete_spin().unwrap();
        let view = WheelView::project(&game);
        assert_eq!(view.winner, Some(outcome.label));
        assert!(view.spin_enabled);
    }

    #[test]
    fn test_empty_wheel_view() {
        let mut game = game();
        for _ in 0..3 {
            game.remove_option(0).unwrap();
        }
        let view = WheelView::project(&game);
        assert!(view.show_placeholder());
        assert!(!view.spin_enabled);
        assert!(view.editing_enabled);
    }

    #[test]
    fn test_colors_wrap_past_palette() {
        let mut game = game();
        for i in 0..30 {
            game.add_option(&format!("Extra {}", i)).unwrap();
        }
        let view = WheelView::project(&game);
        assert_eq!(view.legend.len(), 33);
        assert_eq!(view.legend[0].color, view.legend[25].color);
        assert_eq!(view.legend[7].color, view.legend[32].color);
    }
}
