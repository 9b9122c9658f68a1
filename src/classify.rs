//! Pure character classification. Every cell in the grid is classified
//! independently of its neighbors; the column-synchronous state that turns
//! classes into segments lives in [`crate::segment_builder`] and
//! [`crate::parser`].

use crate::model::AnchorKind;

/// The class a single input character falls into. Every character not
/// recognized here is `Blank` — malformed input does not exist at this
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Blank,
    Horizontal { dashed: bool },
    Vertical { dashed: bool },
    Anchor(AnchorKind),
    Bullet,
}

/// Classifies a single character. No character belongs to more than one
/// class.
pub fn classify(ch: char) -> CharClass {
    match ch {
        '-' => CharClass::Horizontal { dashed: false },
        '=' => CharClass::Horizontal { dashed: true },
        '|' => CharClass::Vertical { dashed: false },
        ':' => CharClass::Vertical { dashed: true },
        '+' => CharClass::Anchor(AnchorKind::Multi),
        '/' => CharClass::Anchor(AnchorKind::FirstDiagonal),
        '\\' => CharClass::Anchor(AnchorKind::SecondDiagonal),
        '*' => CharClass::Bullet,
        _ => CharClass::Blank,
    }
}
