/// Slot colours, assigned in order and repeated once the wheel has more
/// slots than colours.
pub const PALETTE: [&str; 25] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD",
    "#D4A5A5", "#9B59B6", "#3498DB", "#1ABC9C", "#F1C40F",
    "#E74C3C", "#2ECC71", "#E67E22", "#9B4F96", "#F39C12",
    "#8E44AD", "#16A085", "#D35400", "#C0392B", "#27AE60",
    "#7F8C8D", "#2C3E50", "#E84393", "#6C5CE7", "#00B894",
];

pub fn color_for_slot(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Background colours for a wheel of `slots` wedges.
pub fn slot_colors(slots: usize) -> Vec<&'static str> {
    (0..slots).map(color_for_slot).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_repeat_every_25_slots() {
        for i in 0..100 {
            assert_eq!(color_for_slot(i), color_for_slot(i + 25));
        }
        assert_eq!(color_for_slot(0), "#FF6B6B");
        assert_eq!(color_for_slot(24), "#00B894");
        assert_eq!(color_for_slot(25), "#FF6B6B");
    }

    #[test]
    fn test_slot_colors_follow_slot_order() {
        let colors = slot_colors(3);
        assert_eq!(colors, vec!["#FF6B6B", "#4ECDC4", "#45B7D1"]);
        assert!(slot_colors(0).is_empty());
    }
}
