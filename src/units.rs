use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};

/// A distance in PostScript points (1/72 of an inch), the native unit of PDF
/// coordinate space. All layout math in this crate happens in points.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// A distance in inches. Inches never participate in layout directly; they
/// exist as a convenience for specifying page geometry and convert into [Pt].
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Display)]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Pt {
        Pt(value.0 * 72.0)
    }
}

impl From<Pt> for In {
    fn from(value: Pt) -> In {
        In(value.0 / 72.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inches_convert_to_points() {
        let pt: Pt = In(0.75).into();
        assert_eq!(pt, Pt(54.0));
    }

    #[test]
    fn point_arithmetic() {
        let mut y = Pt(100.0);
        y -= Pt(12.15);
        assert!((y.0 - 87.85).abs() < 1e-4);
        assert_eq!(Pt(9.0) * 1.35, Pt(12.15));
    }
}
