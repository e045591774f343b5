use std::fmt;

pub trait ToAngle: Sized {
    fn rad(self) -> Angle;
    fn deg(self) -> Angle;
}

impl ToAngle for f32 {
    fn rad(self) -> Angle {
        Angle::from_rad(self)
    }

    fn deg(self) -> Angle {
        Angle::from_deg(self)
    }
}

#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    const PI_180: f32 = ::std::f32::consts::PI / 180.0;

    pub const fn from_rad(radians: f32) -> Self {
        Self { radians }
    }

    pub fn from_deg(degree: f32) -> Self {
        Self::from_rad(degree * Self::PI_180)
    }

    pub fn to_rad(&self) -> f32 {
        self.radians
    }

    pub fn to_deg(&self) -> f32 {
        self.radians / Self::PI_180
    }

    pub fn sin_cos(&self) -> (f32, f32) {
        self.radians.sin_cos()
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({}°)", self.to_deg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_degrad() {
        assert!((Angle::from_deg(90.0).to_rad() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((Angle::from_rad(0.7853982).to_deg() - 45.0).abs() < 1e-4);
    }

    #[test]
    fn angle_to_angle() {
        assert!((180.0_f32.deg().to_rad() - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(1.5_f32.rad().to_rad(), 1.5);
    }
}
