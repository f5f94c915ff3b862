pub mod math {
    /// Child sphere radius relative to its parent's radius.
    pub const RADIUS_SHRINK: f64 = 0.5;
    /// Distance from a parent center to its children, relative to the parent's radius.
    pub const OFFSET_FACTOR: f64 = 0.75;

    pub fn degree_to_radian(degree: f64) -> f64 {
        degree * std::f64::consts::PI / 180.0
    }

    pub fn child_radius(radius: f64) -> f64 {
        radius * RADIUS_SHRINK
    }

    pub fn child_offset(radius: f64) -> f64 {
        radius * OFFSET_FACTOR
    }
}

pub mod number {
    use std::fmt;

    /// A scene-file number that remembers whether it was written as an integer.
    ///
    /// The renderer accepts both, but output parity with previously generated
    /// scenes needs `6` and `6.0` to stay distinct.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Scalar {
        Int(i64),
        Real(f64),
    }

    impl Scalar {
        /// Axes a placement does not move along are written as a bare `0`.
        pub fn coordinate(value: f64) -> Self {
            if value == 0.0 {
                Scalar::Int(0)
            } else {
                Scalar::Real(value)
            }
        }

        pub fn value(self) -> f64 {
            match self {
                Scalar::Int(v) => v as f64,
                Scalar::Real(v) => v,
            }
        }
    }

    impl From<i64> for Scalar {
        fn from(value: i64) -> Self {
            Scalar::Int(value)
        }
    }

    impl From<f64> for Scalar {
        fn from(value: f64) -> Self {
            Scalar::Real(value)
        }
    }

    impl fmt::Display for Scalar {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match *self {
                Scalar::Int(v) => write!(f, "{v}"),
                Scalar::Real(v) => write_real(f, v),
            }
        }
    }

    /// Shortest round-trip form with a mandatory fractional part, switching to
    /// exponent notation (`1e-05`, `1e+16`) outside `[1e-4, 1e16)`.
    fn write_real(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
        if v.is_nan() {
            return f.write_str("nan");
        }
        if v.is_infinite() {
            return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
        }

        let magnitude = v.abs();
        if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
            let scientific = format!("{v:e}");
            let (mantissa, exponent) = match scientific.split_once('e') {
                Some(parts) => parts,
                None => (scientific.as_str(), "0"),
            };
            let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
            let sign = if exponent < 0 { '-' } else { '+' };
            return write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
        }

        let plain = v.to_string();
        if plain.contains('.') {
            f.write_str(&plain)
        } else {
            write!(f, "{plain}.0")
        }
    }

}
