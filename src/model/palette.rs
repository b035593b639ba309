use crate::model::category::GenderCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const MASCULINE_BLUE: Rgb = Rgb(0x50, 0x78, 0xA0);
pub const NEUTRAL_GREY: Rgb = Rgb(0x9A, 0xA0, 0xA8);
pub const FEMININE_PINK: Rgb = Rgb(0xC7, 0x7B, 0x98);

/// Labels outside the palette render in the masculine blue.
pub const FALLBACK_COLOR: Rgb = MASCULINE_BLUE;

pub fn color_for_label(label: &str) -> Rgb {
    match GenderCategory::from_label(label) {
        Some(category) => category_color(category),
        None => FALLBACK_COLOR,
    }
}

pub fn category_color(category: GenderCategory) -> Rgb {
    match category {
        GenderCategory::Masculine => MASCULINE_BLUE,
        GenderCategory::Neutral => NEUTRAL_GREY,
        GenderCategory::Feminine => FEMININE_PINK,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/palette.rs"]
mod tests;
