//! Reference ellipsoid and the meridian arc series derived from it

use crate::errors::{UtmError, UtmResult};

/// A reference ellipsoid given by its two semi-axes in meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    semi_major_axis: f64,
    semi_minor_axis: f64,
}

/// Coefficients of the meridian arc length series
///
/// `M(phi) = alpha * (phi + beta sin 2phi + gamma sin 4phi + delta sin 6phi + epsilon sin 8phi)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSeries {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
    pub epsilon: f64,
}

/// Coefficients of the inverted series giving the footpoint latitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootpointSeries {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
    pub epsilon: f64,
}

impl Ellipsoid {
    /// WGS84 ellipsoid
    pub const WGS84: Ellipsoid = Ellipsoid {
        semi_major_axis: 6378137.0,
        semi_minor_axis: 6356752.314,
    };

    /// Create an ellipsoid, rejecting degenerate axes
    pub fn new(semi_major_axis: f64, semi_minor_axis: f64) -> UtmResult<Self> {
        if semi_major_axis == 0.0 || semi_minor_axis == 0.0 {
            return Err(UtmError::DivisionByZero(format!(
                "ellipsoid axes must be non-zero (a={}, b={})",
                semi_major_axis, semi_minor_axis
            )));
        }
        if !(semi_major_axis.is_finite() && semi_minor_axis.is_finite())
            || semi_major_axis < 0.0
            || semi_minor_axis < 0.0
        {
            return Err(UtmError::ConfigError(format!(
                "ellipsoid axes must be positive and finite (a={}, b={})",
                semi_major_axis, semi_minor_axis
            )));
        }
        if semi_minor_axis > semi_major_axis {
            return Err(UtmError::ConfigError(format!(
                "semi-minor axis {} exceeds semi-major axis {}",
                semi_minor_axis, semi_major_axis
            )));
        }

        Ok(Ellipsoid { semi_major_axis, semi_minor_axis })
    }

    /// Semi-major axis `a` in meters
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Semi-minor axis `b` in meters
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_minor_axis
    }

    /// Third flattening `n = (a - b) / (a + b)`
    pub fn third_flattening(&self) -> f64 {
        let (a, b) = (self.semi_major_axis, self.semi_minor_axis);
        (a - b) / (a + b)
    }

    /// Second eccentricity squared `(a^2 - b^2) / b^2`
    pub fn second_eccentricity_squared(&self) -> f64 {
        let (a, b) = (self.semi_major_axis, self.semi_minor_axis);
        (a * a - b * b) / (b * b)
    }

    /// Radius of curvature in the prime vertical, given `nu2 = ep2 cos^2(phi)`
    pub fn prime_vertical_radius(&self, nu2: f64) -> f64 {
        let (a, b) = (self.semi_major_axis, self.semi_minor_axis);
        (a * a) / (b * (1.0 + nu2).sqrt())
    }

    /// Leading coefficient shared by the forward and inverse arc series
    fn arc_alpha(&self) -> f64 {
        let n = self.third_flattening();
        ((self.semi_major_axis + self.semi_minor_axis) / 2.0)
            * (1.0 + n.powi(2) / 4.0 + n.powi(4) / 64.0)
    }

    /// Coefficients for the meridian arc length
    pub fn arc_series(&self) -> ArcSeries {
        let n = self.third_flattening();
        ArcSeries {
            alpha: self.arc_alpha(),
            beta: (-3.0 * n / 2.0) + (9.0 * n.powi(3) / 16.0) + (-3.0 * n.powi(5) / 32.0),
            gamma: (15.0 * n.powi(2) / 16.0) + (-15.0 * n.powi(4) / 32.0),
            delta: (-35.0 * n.powi(3) / 48.0) + (105.0 * n.powi(5) / 256.0),
            epsilon: 315.0 * n.powi(4) / 512.0,
        }
    }

    /// Coefficients for the footpoint latitude
    pub fn footpoint_series(&self) -> FootpointSeries {
        let n = self.third_flattening();
        FootpointSeries {
            alpha: self.arc_alpha(),
            beta: (3.0 * n / 2.0) + (-27.0 * n.powi(3) / 32.0) + (269.0 * n.powi(5) / 512.0),
            gamma: (21.0 * n.powi(2) / 16.0) + (-55.0 * n.powi(4) / 32.0),
            delta: (151.0 * n.powi(3) / 96.0) + (-417.0 * n.powi(5) / 128.0),
            epsilon: 1097.0 * n.powi(4) / 512.0,
        }
    }

    /// Distance along the meridian from the equator to latitude `phi` (radians)
    pub fn meridian_arc_length(&self, phi: f64) -> f64 {
        self.arc_series().evaluate(phi)
    }

    /// Latitude (radians) whose meridian arc length equals `y` meters
    pub fn footpoint_latitude(&self, y: f64) -> f64 {
        self.footpoint_series().evaluate(y)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Ellipsoid::WGS84
    }
}

impl ArcSeries {
    /// Arc length in meters at latitude `phi` (radians)
    pub fn evaluate(&self, phi: f64) -> f64 {
        self.alpha
            * (phi
                + self.beta * (2.0 * phi).sin()
                + self.gamma * (4.0 * phi).sin()
                + self.delta * (6.0 * phi).sin()
                + self.epsilon * (8.0 * phi).sin())
    }
}

impl FootpointSeries {
    /// Footpoint latitude in radians for an unscaled northing `y` in meters
    pub fn evaluate(&self, y: f64) -> f64 {
        let y_ = y / self.alpha;
        y_ + self.beta * (2.0 * y_).sin()
            + self.gamma * (4.0 * y_).sin()
            + self.delta * (6.0 * y_).sin()
            + self.epsilon * (8.0 * y_).sin()
    }
}
