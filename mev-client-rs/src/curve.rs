//! Arithmetic on short Weierstrass curves `y^2 = x^3 + ax + b mod p` over 256-bit prime fields.
use alloy_primitives::U256;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("provided point is not on curve")]
    PointNotOnCurve,
    #[error("coordinate {coordinate} is not within the prime field of size {modulus}")]
    CoordinateOutOfField { coordinate: U256, modulus: U256 },
    #[error("{0} has no inverse modulo the field size")]
    NotInvertible(U256),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Point {
    Infinity,
    Affine { x: U256, y: U256 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    a: U256,
    b: U256,
    p: U256,
}

impl Curve {
    pub fn new(a: U256, b: U256, p: U256) -> Self {
        Self { a: a.reduce_mod(p), b: b.reduce_mod(p), p }
    }

    /// Builds an affine point, checking that it lies on the curve.
    pub fn point(&self, x: U256, y: U256) -> Result<Point, Error> {
        let point = Point::Affine { x, y };
        self.check_field(&point)?;
        if self.is_on_curve(&point) {
            Ok(point)
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    pub fn is_on_curve(&self, point: &Point) -> bool {
        match *point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                if x >= self.p || y >= self.p {
                    return false
                }
                let p = self.p;
                let lhs = y.mul_mod(y, p);
                let x_cubed = x.mul_mod(x, p).mul_mod(x, p);
                let rhs = x_cubed.add_mod(self.a.mul_mod(x, p), p).add_mod(self.b, p);
                lhs == rhs
            }
        }
    }

    pub fn negate(&self, point: &Point) -> Point {
        match *point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine { x, y: self.neg(y) },
        }
    }

    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point, Error> {
        self.check_field(lhs)?;
        self.check_field(rhs)?;
        let (x1, y1, x2, y2) = match (*lhs, *rhs) {
            (Point::Infinity, point) | (point, Point::Infinity) => return Ok(point),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double(lhs)
            }
            // y1 == -y2
            return Ok(Point::Infinity)
        }

        let p = self.p;
        let slope = self.sub(y2, y1).mul_mod(self.inverse(self.sub(x2, x1))?, p);
        Ok(self.chord(slope, x1, y1, x2))
    }

    pub fn double(&self, point: &Point) -> Result<Point, Error> {
        self.check_field(point)?;
        let (x, y) = match *point {
            Point::Infinity => return Ok(Point::Infinity),
            Point::Affine { y, .. } if y.is_zero() => return Ok(Point::Infinity),
            Point::Affine { x, y } => (x, y),
        };

        let p = self.p;
        let three_x_squared = U256::from(3).mul_mod(x.mul_mod(x, p), p);
        let numerator = three_x_squared.add_mod(self.a, p);
        let denominator = y.add_mod(y, p);
        let slope = numerator.mul_mod(self.inverse(denominator)?, p);
        Ok(self.chord(slope, x, y, x))
    }

    pub fn scalar_mul(&self, point: &Point, k: U256) -> Result<Point, Error> {
        self.check_field(point)?;
        let mut acc = Point::Infinity;
        for i in (0..k.bit_len()).rev() {
            acc = self.double(&acc)?;
            if k.bit(i) {
                acc = self.add(&acc, point)?;
            }
        }
        Ok(acc)
    }

    /// Computes `k·p + u·q` with a single pass over the bits of both scalars.
    pub fn scalar_mul_add_points(
        &self,
        p: &Point,
        q: &Point,
        k: U256,
        u: U256,
    ) -> Result<Point, Error> {
        let p_plus_q = self.add(p, q)?;
        let bits = k.bit_len().max(u.bit_len());

        let mut acc = Point::Infinity;
        for i in (0..bits).rev() {
            acc = self.double(&acc)?;
            let term = match (k.bit(i), u.bit(i)) {
                (true, true) => &p_plus_q,
                (true, false) => p,
                (false, true) => q,
                (false, false) => continue,
            };
            acc = self.add(&acc, term)?;
        }
        Ok(acc)
    }

    // third point on the line through (x1, y1) and (x2, _) with the given slope, reflected
    fn chord(&self, slope: U256, x1: U256, y1: U256, x2: U256) -> Point {
        let p = self.p;
        let x3 = self.sub(self.sub(slope.mul_mod(slope, p), x1), x2);
        let y3 = self.sub(slope.mul_mod(self.sub(x1, x3), p), y1);
        Point::Affine { x: x3, y: y3 }
    }

    fn check_field(&self, point: &Point) -> Result<(), Error> {
        if let Point::Affine { x, y } = *point {
            for coordinate in [x, y] {
                if coordinate >= self.p {
                    return Err(Error::CoordinateOutOfField { coordinate, modulus: self.p })
                }
            }
        }
        Ok(())
    }

    fn neg(&self, value: U256) -> U256 {
        let value = value.reduce_mod(self.p);
        if value.is_zero() {
            value
        } else {
            self.p - value
        }
    }

    fn sub(&self, lhs: U256, rhs: U256) -> U256 {
        lhs.add_mod(self.neg(rhs), self.p)
    }

    fn inverse(&self, value: U256) -> Result<U256, Error> {
        value.inv_mod(self.p).ok_or(Error::NotInvertible(value))
    }
}
