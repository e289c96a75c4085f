//! Mutable 2D vector arithmetic for small games
//!
//! Build vectors from sprites and tile locations, move them around with
//! in-place operations, then place sprites back at them.

#[macro_use]
pub mod vec_error;
pub mod diagnostic_output;
pub mod vec_model;

use vec_model::{Positionable, Positioned, Vector};

pub use diagnostic_output::set_diagnostic_output;

/// create a new vector
pub fn create_vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

/// relative vector from source to destination
pub fn vector_between<S, D>(source: &S, destination: &D) -> Vector
where
    S: Positioned + ?Sized,
    D: Positioned + ?Sized,
{
    let mut vector = Vector::new(destination.x(), destination.y());
    let source_vector = Vector::new(source.x(), source.y());
    vector.subtract(&source_vector);
    vector
}

/// vector from origin to a sprite or tile location
pub fn vector_to_sprite<P: Positioned + ?Sized>(position: &P) -> Vector {
    Vector::new(position.x(), position.y())
}

/// place a sprite at a vector, coordinates are passed through unchecked
pub fn place_sprite<S: Positionable + ?Sized>(sprite: &mut S, vector: &Vector) {
    tracing::trace!("place sprite at {}", vector);
    sprite.set_position(vector.x, vector.y);
}

#[cfg(test)]
mod test_kn_vector {
    use super::*;
    use float_cmp::{ApproxEq, F64Margin};
    use crate::vec_model::{Location, Sprite};

    #[derive(Default)]
    struct RecordingSprite {
        calls: Vec<(f64, f64)>,
    }

    impl Positionable for RecordingSprite {
        fn set_position(&mut self, x: f64, y: f64) {
            self.calls.push((x, y));
        }
    }

    #[test]
    fn test_create_vector_length() {
        let v = create_vector(3.0, 4.0);
        assert_eq!(v, Vector::new(3.0, 4.0));
        assert!(5.0.approx_eq(v.length(), F64Margin::default()));
    }

    #[test]
    fn test_vector_between() {
        let v = vector_between(&Location::new(1.0, 1.0), &Location::new(4.0, 5.0));
        assert_eq!(v, Vector::new(3.0, 4.0));

        let back = vector_between(&Location::new(4.0, 5.0), &Sprite::new(1.0, 1.0));
        assert_eq!(back, Vector::new(-3.0, -4.0));

        let source = Sprite::new(-2.0, 0.5);
        let dest = create_vector(0.0, 0.0);
        assert_eq!(vector_between(&source, &dest), Vector::new(2.0, -0.5));
        assert_eq!(source, Sprite::new(-2.0, 0.5));
    }

    #[test]
    fn test_vector_between_trait_objects() {
        let source: &dyn Positioned = &Sprite::new(10.0, 10.0);
        let dest: &dyn Positioned = &Location::new(7.0, 14.0);
        assert_eq!(vector_between(source, dest), Vector::new(-3.0, 4.0));
    }

    #[test]
    fn test_vector_to_sprite() {
        assert_eq!(vector_to_sprite(&Sprite::new(16.0, -8.0)), Vector::new(16.0, -8.0));
        assert_eq!(vector_to_sprite(&Location::default()), Vector::default());
    }

    #[test]
    fn test_place_sprite() {
        let mut sprite = RecordingSprite::default();
        place_sprite(&mut sprite, &create_vector(10.0, 20.0));
        assert_eq!(sprite.calls, vec![(10.0, 20.0)]);
    }

    #[test]
    fn test_place_sprite_passes_non_finite() {
        let mut sprite = Sprite::new(1.0, 2.0);
        let mut v = create_vector(0.0, 0.0);
        v.normalize();
        place_sprite(&mut sprite, &v);
        assert!(sprite.x.is_nan() && sprite.y.is_nan());

        place_sprite(&mut sprite, &create_vector(f64::INFINITY, -1.0));
        assert_eq!((sprite.x, sprite.y), (f64::INFINITY, -1.0));
        assert_eq!(sprite.moves, 2);
    }

    #[test]
    fn test_rotate_half_turn() {
        let mut v = create_vector(1.0, 0.0);
        v.rotate(0.5);
        assert!(v.approx_eq(Vector::new(-1.0, 0.0), (1e-9, 4)));
    }

    #[test]
    fn test_move_sprite_towards_target() {
        let target = Location::new(40.0, 30.0);
        let mut sprite = Sprite::new(0.0, 0.0);

        let mut step = vector_between(&sprite, &target);
        step.normalize().scale(10.0);
        let mut position = vector_to_sprite(&sprite);
        position.add(&step);
        place_sprite(&mut sprite, &position);

        assert!(sprite.x.approx_eq(8.0, (1e-9, 4)));
        assert!(sprite.y.approx_eq(6.0, (1e-9, 4)));
    }
}
