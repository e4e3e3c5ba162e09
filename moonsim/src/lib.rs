#![warn(missing_docs)]
//! # Moonsim
//!
//! Moonsim simulates a small set of bodies pulling on each other through gravity, such as the
//! Earth and its Moon, in the pixel space of a window.
//!
//! ## Model
//!
//! Every body has a position in window pixels (y pointing down), a drawn radius, a color, a mass
//! in kilograms and a velocity. Each tick:
//!
//! 1. the net force on every body is summed over every other body with [`PairwiseForce`], which
//!    uses Newton's law of universal gravitation on distances converted to meters, or a
//!    short-range law when the bodies overlap,
//! 2. every body is moved with [`semi_implicit_euler`], velocity first.
//!
//! By default forces are computed from the state at the start of the tick before any body moves
//! (see [`UpdateOrder`]).
//!
//! Drawing is not part of the simulation: callers read the bodies after each step and may stamp
//! their positions onto a [`TrailCanvas`] to keep track of their orbits.
//!
//! ## Using Moonsim
//!
//! ```
//! use moonsim::prelude::*;
//!
//! let mut simulation = Simulation::new(&Scenario::earth_luna(), SimulationParams::default())?;
//! let mut trails = TrailCanvas::new(900, 650);
//!
//! for _ in 0..1_000 {
//!     simulation.step()?;
//!
//!     for body in simulation.bodies() {
//!         trails.plot(body.position, body.color);
//!     }
//! }
//!
//! let luna = simulation.body("luna").unwrap();
//! assert!(luna.position.distance(simulation.bodies()[0].position) > 250.0);
//! # Ok::<(), SimulationError>(())
//! ```
//!
//! Bodies with a zero mass cannot be integrated and are rejected with a [`BodyError`].
//! Parameters that would make positions non-finite, such as a zero scale, are rejected too.
//!
//! ```
//! use moonsim::prelude::*;
//!
//! let scenario = Scenario::earth_luna().with_body(BodyDescriptor::default());
//! let result = Simulation::new(&scenario, SimulationParams::default());
//!
//! assert!(matches!(
//!     result,
//!     Err(SimulationError::Body(BodyError::NonPositiveMass { .. }))
//! ));
//!
//! let params = SimulationParams::default().with_scale(0.0);
//! assert!(Simulation::new(&Scenario::earth_luna(), params).is_err());
//! ```
//!
//! ### Custom bodies
//!
//! [`PairwiseForce`] works with any type implementing [`Position`], [`Mass`] and [`Radius`]
//! (only the first two for the affecting body). These traits can be derived for types with fields
//! named `position`, `mass` and `radius`.
//!
//! ```
//! use moonsim::prelude::*;
//! use glam::DVec2;
//!
//! #[derive(Position, Mass, Radius)]
//! struct Asteroid {
//!     position: DVec2,
//!     mass: f64,
//!     radius: f64,
//! }
//!
//! let asteroids = [
//!     Asteroid { position: DVec2::new(0.0, 0.0), mass: 1e15, radius: 1.0 },
//!     Asteroid { position: DVec2::new(0.0, 3.0), mass: 2e15, radius: 1.0 },
//! ];
//!
//! let forces = asteroids.as_slice().brute_force(PairwiseForce::default());
//! assert!(forces[0].y < 0.0);
//! assert!(forces[1].y > 0.0);
//! ```
//!
//! [`PairwiseForce`]: gravity::PairwiseForce
//! [`semi_implicit_euler`]: integrator::semi_implicit_euler
//! [`UpdateOrder`]: params::UpdateOrder
//! [`TrailCanvas`]: trail::TrailCanvas
//! [`BodyError`]: body::BodyError
//! [`Position`]: gravity::Position
//! [`Mass`]: gravity::Mass
//! [`Radius`]: gravity::Radius

/// Bodies and their validation.
pub mod body;
/// Force between pairs of bodies.
pub mod gravity;
/// Time integration of a body.
pub mod integrator;
/// Physical constants and simulation settings.
pub mod params;
/// Initial conditions.
pub mod scenario;
/// Algorithms that use one CPU thread.
pub mod sequential;
/// The simulation loop.
pub mod simulation;
/// Raster accumulating the path of bodies.
pub mod trail;

/// Represents a pair of objects, which can be bodies or slices of bodies, between which an
/// interaction is computed.
///
/// The first object is the one being affected by the second object.
#[derive(Clone, Copy, Debug)]
pub struct Between<S1, S2>(pub S1, pub S2);

/// Trait to compute an interaction between bodies contained in a storage.
///
/// [`PairwiseForce`](gravity::PairwiseForce) implements it for a [`Between`] of two bodies, and
/// [`BruteForce`](sequential::BruteForce) lifts such an interaction to slices of bodies.
pub trait Interaction<Storage> {
    /// The computed interaction. This can be one or multiple values depending on the storage used.
    type Output;

    /// Returns the interaction between the bodies in the storage.
    fn compute(&mut self, storage: Storage) -> Self::Output;
}

/// Commonly used types, re-exported.
pub mod prelude {
    // Common traits and their derive macros.
    pub use crate::{
        gravity::{Mass, PairwiseForce, Position, Radius},
        Between, Interaction,
    };
    pub use moonsim_derive::{Mass, Position, Radius};

    pub use crate::{
        body::{Body, BodyError},
        params::{ParamsError, SimulationParams, UpdateOrder},
        scenario::{BodyDescriptor, Scenario},
        sequential::SequentialCompute,
        simulation::{Simulation, SimulationError},
        trail::TrailCanvas,
    };
}
