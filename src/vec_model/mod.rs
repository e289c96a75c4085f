mod location;
mod sprite;
mod vector;

pub use self::location::*;
pub use self::sprite::*;
pub use self::vector::*;

/// anything with a readable position, a sprite or a tile location
pub trait Positioned {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

/// anything whose position can be set
pub trait Positionable {
    fn set_position(&mut self, x: f64, y: f64);
}
