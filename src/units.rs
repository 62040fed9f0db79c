use std::fmt;
use std::ops::Add;

pub trait Unit<T> {
    fn confine(value: T) -> Self;
    fn release(self) -> T;
}

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct CoreHours(f64);

impl CoreHours {
    pub fn millions(self) -> f64 {
        self.0 * 1e-6
    }
}

impl Unit<f64> for CoreHours {
    fn confine(value: f64) -> Self {
        Self(value)
    }

    fn release(self) -> f64 {
        self.0
    }
}

impl fmt::Display for CoreHours {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2} million core-hours", self.millions())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Terabytes(f64);

impl Unit<f64> for Terabytes {
    fn confine(value: f64) -> Self {
        Self(value)
    }

    fn release(self) -> f64 {
        self.0
    }
}

impl Add for Terabytes {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl fmt::Display for Terabytes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2} TB", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use float_eq::assert_float_eq;
    const EPSILON: f64 = 0.0000_01;

    #[test]
    fn core_hours_in_millions() {
        assert_float_eq!(
            CoreHours::confine(21_535_000.0).millions(),
            21.535,
            abs <= EPSILON
        );
    }

    #[test]
    fn rounded_display() {
        assert_eq!(
            CoreHours::confine(21_535_412.0).to_string(),
            "21.54 million core-hours"
        );
        assert_eq!(Terabytes::confine(559.9512).to_string(), "559.95 TB");
    }

    #[test]
    fn terabytes_add() {
        let sum = Terabytes::confine(22.05) + Terabytes::confine(559.95);
        assert_float_eq!(sum.release(), 582.0, abs <= EPSILON);
    }
}
