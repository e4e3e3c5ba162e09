use crate::{
    body::{Body, BodyError},
    gravity::PairwiseForce,
    integrator::semi_implicit_euler,
    params::{ParamsError, SimulationParams, UpdateOrder},
    scenario::Scenario,
    sequential::SequentialCompute,
    Between,
};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Errors raised when a simulation cannot be created.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SimulationError {
    /// A body of the scenario cannot be integrated.
    #[error(transparent)]
    Body(#[from] BodyError),
    /// The parameters would produce non-finite positions.
    #[error(transparent)]
    Params(#[from] ParamsError),
}

/// A fixed set of bodies advanced one tick at a time.
///
/// The simulation only holds physical state. Drawing the bodies is left to the caller, which reads
/// them through [`bodies`](Simulation::bodies) after each [`step`](Simulation::step).
///
/// # Example
///
/// ```
/// use moonsim::prelude::*;
///
/// let mut simulation = Simulation::new(&Scenario::earth_luna(), SimulationParams::default())?;
/// simulation.run(100)?;
///
/// assert_eq!(simulation.ticks(), 100);
/// assert_eq!(simulation.bodies().len(), 2);
/// # Ok::<(), SimulationError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Simulation {
    bodies: Vec<Body>,
    params: SimulationParams,
    ticks: u64,
}

impl Simulation {
    /// Creates the bodies of the scenario, failing on invalid parameters or on the first body that
    /// cannot be integrated.
    pub fn new(scenario: &Scenario, params: SimulationParams) -> Result<Self, SimulationError> {
        if let Err(error) = params.validate() {
            warn!(%error, "rejected parameters");
            return Err(error.into());
        }

        let bodies = scenario.instance();

        for body in &bodies {
            if let Err(error) = body.validate() {
                warn!(%error, "rejected body");
                return Err(error.into());
            }

            debug!(
                name = %body.name,
                position = ?body.position,
                velocity = ?body.velocity,
                mass = body.mass,
                radius = body.radius,
                "added body"
            );
        }

        Ok(Self {
            bodies,
            params,
            ticks: 0,
        })
    }

    /// Advances every body by one tick, following the configured [`UpdateOrder`].
    ///
    /// Either every body is advanced or, if one of them cannot be integrated, none is.
    pub fn step(&mut self) -> Result<(), BodyError> {
        self.bodies.iter().try_for_each(Body::check_mass)?;

        let force = PairwiseForce::from(&self.params);

        match self.params.update_order {
            UpdateOrder::Snapshot => {
                let net_forces = self.bodies.as_slice().brute_force(force);

                for (body, net_force) in self.bodies.iter_mut().zip(net_forces) {
                    semi_implicit_euler(body, net_force, &self.params)?;
                }
            }
            UpdateOrder::InPlace => {
                for i in 0..self.bodies.len() {
                    let net_force =
                        Between(&self.bodies[i], self.bodies.as_slice()).brute_force(force);
                    semi_implicit_euler(&mut self.bodies[i], net_force, &self.params)?;
                }
            }
        }

        self.ticks += 1;
        trace!(tick = self.ticks, "stepped simulation");

        Ok(())
    }

    /// Steps the simulation `ticks` times, stopping at the first error.
    pub fn run(&mut self, ticks: u64) -> Result<(), BodyError> {
        (0..ticks).try_for_each(|_| self.step())
    }

    /// The bodies, in scenario order.
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Returns the first body with the given name.
    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|body| body.name == name)
    }

    /// The parameters used to advance the simulation.
    #[inline]
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Number of ticks computed so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time elapsed since the start.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.ticks as f64 * self.params.delta_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::BodyDescriptor;
    use glam::DVec2;

    fn earth_luna(update_order: UpdateOrder) -> Simulation {
        let params = SimulationParams::default().with_update_order(update_order);
        Simulation::new(&Scenario::earth_luna(), params).unwrap()
    }

    #[test]
    fn massless_body_is_rejected() {
        let scenario = Scenario::earth_luna().with_body(BodyDescriptor::default());
        let error = Simulation::new(&scenario, SimulationParams::default()).unwrap_err();

        assert_eq!(
            error,
            SimulationError::Body(BodyError::NonPositiveMass {
                name: String::new(),
                mass: 0.0
            })
        );
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = SimulationParams::default().with_scale(0.0);
        let error = Simulation::new(&Scenario::earth_luna(), params).unwrap_err();

        assert_eq!(error, SimulationError::Params(ParamsError::InvalidScale(0.0)));
    }

    #[test]
    fn single_body_stays_put() {
        let scenario = Scenario::new().with_body(BodyDescriptor {
            name: "earth".to_owned(),
            position: DVec2::new(450.0, 325.0),
            radius: 30.0,
            color: [0, 0, 255],
            mass: 5.97219e24,
            velocity: DVec2::ZERO,
        });
        let mut simulation = Simulation::new(&scenario, SimulationParams::default()).unwrap();

        for _ in 0..1_000 {
            simulation.step().unwrap();

            let earth = &simulation.bodies()[0];
            assert_eq!(earth.net_force, DVec2::ZERO);
            assert_eq!(earth.position, DVec2::new(450.0, 325.0));
        }
    }

    #[test]
    fn empty_scenario() {
        let mut simulation =
            Simulation::new(&Scenario::new(), SimulationParams::default()).unwrap();

        simulation.run(10).unwrap();
        assert_eq!(simulation.ticks(), 10);
        assert!(simulation.bodies().is_empty());
    }

    #[test]
    fn reproducible() {
        let mut first = earth_luna(UpdateOrder::Snapshot);
        let mut second = earth_luna(UpdateOrder::Snapshot);

        first.run(1_000).unwrap();
        second.run(1_000).unwrap();

        assert_eq!(first.bodies(), second.bodies());
        assert!((first.elapsed() - 10.0).abs() < 1e-9);
    }

    fn assert_close(computed: DVec2, expected: DVec2) {
        let error = (computed - expected).length() / expected.length();
        assert!(error < 1e-9, "{computed} != {expected}");
    }

    #[test]
    fn in_place_trajectory() {
        let mut simulation = earth_luna(UpdateOrder::InPlace);
        simulation.run(1_000).unwrap();

        let (earth, luna) = (&simulation.bodies()[0], &simulation.bodies()[1]);
        dbg!(earth.position, luna.position);
        assert_close(earth.position, DVec2::new(452.58740571902445, 324.51970777363653));
        assert_close(luna.position, DVec2::new(332.0878400085859, 86.78182385562481));
    }

    #[test]
    fn snapshot_trajectory() {
        let mut simulation = earth_luna(UpdateOrder::Snapshot);
        simulation.run(1_000).unwrap();

        let luna = simulation.body("luna").unwrap();
        assert_close(luna.position, DVec2::new(176.7328237841173, 269.7526181105017));
    }

    #[test]
    fn luna_orbits_earth() {
        let mut simulation = earth_luna(UpdateOrder::Snapshot);
        let mut crossings = 0;
        let mut previous_side = 1.0;

        for _ in 0..1_000 {
            simulation.step().unwrap();

            let earth = simulation.body("earth").unwrap();
            let luna = simulation.body("luna").unwrap();
            let distance = earth.position.distance(luna.position);
            assert!((250.0..310.0).contains(&distance), "{distance}");

            let side = (luna.position.x - earth.position.x).signum();
            if side != previous_side {
                crossings += 1;
                previous_side = side;
            }
        }

        // About six revolutions.
        assert!(crossings >= 8, "{crossings}");
    }

    #[test]
    fn snapshot_ignores_body_order() {
        let mut forward = earth_luna(UpdateOrder::Snapshot);

        let mut scenario = Scenario::earth_luna();
        scenario.bodies.reverse();
        let mut backward = Simulation::new(&scenario, SimulationParams::default()).unwrap();

        forward.run(500).unwrap();
        backward.run(500).unwrap();

        assert_eq!(forward.bodies()[0], backward.bodies()[1]);
        assert_eq!(forward.bodies()[1], backward.bodies()[0]);
    }

    #[test]
    fn in_place_sees_advanced_state() {
        let mut snapshot = earth_luna(UpdateOrder::Snapshot);
        let mut in_place = earth_luna(UpdateOrder::InPlace);

        snapshot.step().unwrap();
        in_place.step().unwrap();

        // The first body is updated from the same state, the second one is not.
        assert_eq!(snapshot.bodies()[0], in_place.bodies()[0]);
        assert_ne!(snapshot.bodies()[1].velocity, in_place.bodies()[1].velocity);
    }
}
