use float_cmp::{ApproxEq, F64Margin};
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::ops::{AddAssign, Mul, MulAssign, Neg, SubAssign};
use std::str::FromStr;

use super::*;
use crate::diagnostic_output;
use crate::vec_error::VectorError;

/// mathmatic vector, used both as a point and as a displacement
///
/// Methods are split in two families: `copy`, `length` and `dot_product`
/// never touch `self`, while `normalize`, `scale`, `add`, `subtract` and
/// `rotate` change it in place and hand back `&mut Self` for chaining.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    /// independent copy, mutating it leaves `self` untouched
    pub fn copy(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, v: f64) {
        self.x = v;
    }

    pub fn set_y(&mut self, v: f64) {
        self.y = v;
    }

    /// Euclidean norm
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Scale to length 1 keeping the direction.
    ///
    /// A zero length vector is divided by zero as well, both coordinates
    /// become NaN.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length == 0.0 {
            tracing::warn!("normalize zero length {}, coordinates become NaN", self);
        }
        self.x /= length;
        self.y /= length;
        self
    }

    pub fn scale(&mut self, n: f64) -> &mut Self {
        self.x *= n;
        self.y *= n;
        self
    }

    pub fn add(&mut self, v: &Vector) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self
    }

    /// self - v
    pub fn subtract(&mut self, v: &Vector) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self
    }

    pub fn dot_product(&self, v: &Vector) -> f64 {
        self.x * v.x + self.y * v.y
    }

    /// Rotate clockwise on screen (y axis pointing down).
    ///
    /// Measured in revolutions, 1 revolution is a complete circle,
    /// 0.25 revolution is 90 degree or 0.5 PI radians.
    pub fn rotate(&mut self, revolutions: f64) -> &mut Self {
        let angle = revolutions * 2.0 * PI;
        let (sin_angle, cos_angle) = angle.sin_cos();
        let (x, y) = (self.x, self.y);
        self.x = cos_angle * x - sin_angle * y;
        self.y = sin_angle * x + cos_angle * y;
        self
    }

    /// print `Vector(x, y)` to the diagnostic output
    pub fn print(&self) {
        if let Err(err) = diagnostic_output::emit_line(&self.to_string()) {
            tracing::warn!("print {} failed: {}", self, err);
        }
    }

    pub fn print_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self)
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}

impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix("Vector")
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| vec_err!(&format!("expect Vector(x, y), got {:?}", s)))?;

        let mut coords = inner.split(',');
        let (x, y) = match (coords.next(), coords.next(), coords.next()) {
            (Some(x), Some(y), None) => (x.trim(), y.trim()),
            _ => {
                return Err(vec_err!(&format!(
                    "expect exactly two coordinates, got {:?}",
                    inner
                )))
            }
        };

        let x = x
            .parse::<f64>()
            .map_err(|err| vec_err!(&format!("invalid x coordinate {:?}: {}", x, err)))?;
        let y = y
            .parse::<f64>()
            .map_err(|err| vec_err!(&format!("invalid y coordinate {:?}: {}", y, err)))?;
        Ok(Vector::new(x, y))
    }
}

impl Positioned for Vector {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl ApproxEq for Vector {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }
}

// no value `Add`, `Add::add` would shadow the in-place `add` method
impl AddAssign for Vector {
    fn add_assign(&mut self, other: Vector) {
        Vector::add(self, &other);
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, other: Vector) {
        self.subtract(&other);
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, n: f64) {
        self.scale(n);
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(mut self, n: f64) -> Vector {
        self *= n;
        self
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}
