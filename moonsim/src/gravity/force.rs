use crate::{
    gravity::{Mass, Position, Radius},
    params::SimulationParams,
    Between, Interaction,
};
use glam::DVec2;
use std::f64::consts::PI;

/// [`Interaction`] computing the force a body exerts on another, in window space.
///
/// For an affected body `A` and an affecting body `B`, the separation `A - B` is measured in
/// pixels. When `B` lies within the radius of `A`, the force magnitude follows the short-range
/// law `F = 4/3 π r`, which keeps overlapping bodies from being flung apart. Otherwise it is
/// Newton's law of universal gravitation, `F = G mA mB / r²`, with `r` converted to meters
/// using [`scale`](PairwiseForce::scale).
///
/// The returned vector points away from `B`. Subtracting it from the velocity of `A`, as
/// [`semi_implicit_euler`](crate::integrator::semi_implicit_euler) does, makes bodies attract.
///
/// # Example
///
/// ```
/// use moonsim::prelude::*;
/// use glam::DVec2;
///
/// let earth = (DVec2::new(450.0, 325.0), 5.97219e24);
/// let luna = Body::new("luna", DVec2::new(450.0, 52.0), 10.0, [128; 3], 7.349e22, DVec2::ZERO);
///
/// let force = PairwiseForce::default().force(&luna, &earth);
///
/// // Earth is below luna on screen, the force points up and away from it.
/// assert!(force.x.abs() < 1e-9 * force.y.abs());
/// assert!(force.y < 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairwiseForce {
    /// Gravitational constant, in m³ kg⁻¹ s⁻².
    pub gravitational_constant: f64,
    /// Pixels per meter.
    pub scale: f64,
}

impl Default for PairwiseForce {
    #[inline]
    fn default() -> Self {
        Self::from(&SimulationParams::default())
    }
}

impl From<&SimulationParams> for PairwiseForce {
    #[inline]
    fn from(params: &SimulationParams) -> Self {
        Self::new(params.gravitational_constant, params.scale)
    }
}

impl PairwiseForce {
    /// Creates a new [`PairwiseForce`] with the given gravitational constant and pixels per meter.
    #[inline]
    pub const fn new(gravitational_constant: f64, scale: f64) -> Self {
        Self {
            gravitational_constant,
            scale,
        }
    }

    /// Returns the force `affecting` exerts on `affected`.
    ///
    /// Bodies sharing the same centre exert no force on each other.
    #[inline]
    pub fn force<P1, P2>(&self, affected: &P1, affecting: &P2) -> DVec2
    where
        P1: Position<Vector = DVec2> + Mass<Scalar = f64> + Radius<Scalar = f64> + ?Sized,
        P2: Position<Vector = DVec2> + Mass<Scalar = f64> + ?Sized,
    {
        let separation = affected.position() - affecting.position();
        let r = separation.length();

        if r == 0.0 {
            return DVec2::ZERO;
        }

        let magnitude = if r < affected.radius() {
            Self::near_field(r)
        } else {
            self.newtonian(affected.mass(), affecting.mass(), r)
        };

        let angle = separation.y.atan2(separation.x);
        DVec2::new(angle.cos() * magnitude, angle.sin() * magnitude)
    }

    /// Magnitude of the short-range force at a distance of `r` pixels.
    #[inline]
    pub fn near_field(r: f64) -> f64 {
        4.0 / 3.0 * PI * r
    }

    /// Magnitude of the Newtonian force, in newtons, between masses `m1` and `m2` separated by
    /// `r` pixels.
    #[inline]
    pub fn newtonian(&self, m1: f64, m2: f64, r: f64) -> f64 {
        let meters = r / self.scale;
        self.gravitational_constant * m1 * m2 / (meters * meters)
    }
}

impl<P1, P2> Interaction<Between<&P1, &P2>> for PairwiseForce
where
    P1: Position<Vector = DVec2> + Mass<Scalar = f64> + Radius<Scalar = f64> + ?Sized,
    P2: Position<Vector = DVec2> + Mass<Scalar = f64> + ?Sized,
{
    type Output = DVec2;

    #[inline]
    fn compute(&mut self, Between(affected, affecting): Between<&P1, &P2>) -> DVec2 {
        self.force(affected, affecting)
    }
}
