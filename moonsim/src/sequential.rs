use crate::{Between, Interaction};
use std::ops::Add;

/// Trait to compute the interaction between bodies using sequential algorithms.
pub trait SequentialCompute<T>: Sized {
    /// Returns the interaction between these bodies using a brute-force algorithm.
    ///
    /// Refer to [`BruteForce`] for more information.
    #[inline]
    fn brute_force(self, interaction: T) -> <BruteForce<T> as Interaction<Self>>::Output
    where
        BruteForce<T>: Interaction<Self>,
    {
        BruteForce(interaction).compute(self)
    }
}

// Manual implementations for better linting.
impl<T, P> SequentialCompute<T> for &[P] {}
impl<T, S1, S2> SequentialCompute<T> for Between<S1, S2> {}

/// Brute-force algorithm using one CPU thread.
///
/// Sums the interaction of every other body on each body. A body never interacts with itself: on a
/// slice, bodies are told apart by their index, and for a [`Between`] of one body and a slice, the
/// entry stored at the body's own address is skipped.
///
/// # Example
///
/// ```
/// use moonsim::prelude::*;
/// use glam::DVec2;
///
/// let bodies = [
///     Body::new("a", DVec2::new(0.0, 0.0), 1.0, [255; 3], 1e24, DVec2::ZERO),
///     Body::new("b", DVec2::new(100.0, 0.0), 1.0, [255; 3], 1e24, DVec2::ZERO),
/// ];
///
/// let forces = bodies.as_slice().brute_force(PairwiseForce::default());
///
/// // Equal and opposite along the x axis.
/// assert_eq!(forces[0].x, -forces[1].x);
///
/// let on_a = Between(&bodies[0], bodies.as_slice()).brute_force(PairwiseForce::default());
/// assert_eq!(on_a, forces[0]);
/// ```
#[derive(Clone, Copy, Default, Debug)]
pub struct BruteForce<T>(pub T);

impl<P1, P2, U, T> Interaction<Between<&P1, &[P2]>> for BruteForce<T>
where
    U: Add<Output = U> + Default,
    T: for<'a> Interaction<Between<&'a P1, &'a P2>, Output = U>,
{
    type Output = U;

    #[inline]
    fn compute(&mut self, Between(affected, affecting): Between<&P1, &[P2]>) -> Self::Output {
        let address = (affected as *const P1).cast::<()>();

        affecting
            .iter()
            .filter(|p2| (*p2 as *const P2).cast::<()>() != address)
            .fold(U::default(), |interaction, p2| {
                interaction + self.0.compute(Between(affected, p2))
            })
    }
}

impl<P, U, T> Interaction<&[P]> for BruteForce<T>
where
    U: Add<Output = U> + Default,
    T: for<'a> Interaction<Between<&'a P, &'a P>, Output = U>,
{
    type Output = Vec<U>;

    fn compute(&mut self, bodies: &[P]) -> Self::Output {
        let mut interactions = Vec::with_capacity(bodies.len());

        for (i, affected) in bodies.iter().enumerate() {
            let mut interaction = U::default();
            for (j, affecting) in bodies.iter().enumerate() {
                if i != j {
                    interaction = interaction + self.0.compute(Between(affected, affecting));
                }
            }
            interactions.push(interaction);
        }

        interactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{body::Body, gravity::PairwiseForce};
    use glam::DVec2;

    fn body(x: f64, y: f64, mass: f64) -> Body {
        Body::new("test", DVec2::new(x, y), 5.0, [255; 3], mass, DVec2::ZERO)
    }

    #[test]
    fn single_body_feels_nothing() {
        let bodies = [body(450.0, 325.0, 5.97219e24)];
        let forces = bodies.as_slice().brute_force(PairwiseForce::default());

        assert_eq!(forces, vec![DVec2::ZERO]);
    }

    #[test]
    fn empty() {
        let bodies: [Body; 0] = [];
        assert!(bodies.as_slice().brute_force(PairwiseForce::default()).is_empty());
    }

    #[test]
    fn sums_other_bodies() {
        let force = PairwiseForce::default();
        let bodies = [
            body(0.0, 0.0, 1e24),
            body(100.0, 0.0, 2e23),
            body(0.0, 250.0, 3e22),
        ];

        let forces = bodies.as_slice().brute_force(force);

        for (i, computed) in forces.iter().enumerate() {
            let expected = bodies
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(DVec2::ZERO, |sum, (_, other)| sum + force.force(&bodies[i], other));

            assert_eq!(*computed, expected);
        }
    }

    #[test]
    fn identical_bodies_are_distinct() {
        // Same state, different entries: each one pulls on the other.
        let bodies = [body(0.0, 0.0, 1e24), body(0.0, 0.0, 1e24), body(10.0, 0.0, 1e24)];
        let forces = bodies.as_slice().brute_force(PairwiseForce::default());

        // The coincident twin contributes nothing, the third body does.
        assert_ne!(forces[0], DVec2::ZERO);
        assert_eq!(forces[0], forces[1]);
    }

    #[test]
    fn between_skips_itself() {
        let force = PairwiseForce::default();
        let bodies = [body(0.0, 0.0, 1e24), body(30.0, 40.0, 1e22)];

        let on_first = Between(&bodies[0], bodies.as_slice()).brute_force(force);
        assert_eq!(on_first, force.force(&bodies[0], &bodies[1]));

        let outsider = body(0.0, 0.0, 1e24);
        let on_outsider = Between(&outsider, bodies.as_slice()).brute_force(force);
        assert_eq!(on_outsider, force.force(&outsider, &bodies[1]));
    }
}
