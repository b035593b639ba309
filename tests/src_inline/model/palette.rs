use super::*;

#[test]
fn test_known_labels_map_to_palette() {
    assert_eq!(color_for_label("masculine"), Rgb(0x50, 0x78, 0xA0));
    assert_eq!(color_for_label("neutral"), Rgb(0x9A, 0xA0, 0xA8));
    assert_eq!(color_for_label("feminine"), Rgb(0xC7, 0x7B, 0x98));
}

#[test]
fn test_unknown_label_falls_back_to_masculine() {
    assert_eq!(color_for_label("robotic"), MASCULINE_BLUE);
    assert_eq!(color_for_label("Feminine"), MASCULINE_BLUE);
    assert_eq!(color_for_label(""), FALLBACK_COLOR);
}

#[test]
fn test_category_color_matches_label_lookup() {
    for &c in crate::model::category::category_order() {
        assert_eq!(category_color(c), color_for_label(c.label()));
    }
}
