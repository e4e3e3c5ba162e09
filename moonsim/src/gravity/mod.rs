mod force;

pub use force::PairwiseForce;

/// Trait for types that can be located in window space.
///
/// You can derive this trait if your type has a field named `position`.
pub trait Position {
    /// The type used to represent the position.
    type Vector;

    /// Returns the position of a body.
    fn position(&self) -> Self::Vector;
}

/// Trait for an object that defines a mass, in kilograms.
///
/// You can derive this trait if your type has a field named `mass`.
///
/// # Example
///
/// ```
/// use moonsim::prelude::*;
/// use glam::DVec2;
///
/// #[derive(Position, Mass)]
/// struct Satellite {
///     position: DVec2,
///     mass: f64,
/// }
///
/// let satellite = Satellite {
///     position: DVec2::new(10.0, 20.0),
///     mass: 420e3,
/// };
///
/// assert_eq!(satellite.position(), DVec2::new(10.0, 20.0));
/// assert_eq!(satellite.mass(), 420e3);
/// ```
pub trait Mass {
    /// The scalar type used to represent the mass.
    type Scalar;

    /// Returns the mass of the body.
    fn mass(&self) -> Self::Scalar;
}

/// Trait for bodies with a drawn radius, in pixels.
///
/// The radius of the affected body decides which force law applies: closer than its radius, the
/// short-range law of [`PairwiseForce`] is used instead of Newton's law.
///
/// You can derive this trait if your type has a field named `radius`.
pub trait Radius {
    /// The scalar type used to represent the radius.
    type Scalar;

    /// Returns the radius of the body.
    fn radius(&self) -> Self::Scalar;
}

impl<V, S> Position for (V, S)
where
    V: Clone,
{
    type Vector = V;

    #[inline]
    fn position(&self) -> Self::Vector {
        self.0.clone()
    }
}

impl<V, S> Mass for (V, S)
where
    S: Clone,
{
    type Scalar = S;

    #[inline]
    fn mass(&self) -> Self::Scalar {
        self.1.clone()
    }
}
