use super::*;

/// Minimal sprite, readable and placeable.
///
/// Host environments usually bring their own sprite type and implement
/// `Positioned` and `Positionable` for it instead.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    // number of set_position calls
    pub moves: usize,
}

impl Sprite {
    pub fn new(x: f64, y: f64) -> Self {
        Sprite { x, y, moves: 0 }
    }
}

impl Positioned for Sprite {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Positionable for Sprite {
    fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.moves += 1;
    }
}
