use crate::{
    body::{Body, BodyError},
    params::SimulationParams,
};
use glam::DVec2;

/// Integrates a body over one tick using the [semi-implicit Euler method], velocity first.
///
/// The acceleration `net_force / mass` is in m/s². Dividing by the scale converts it to window
/// units, and it is subtracted because the net force points away from the attracting bodies.
///
/// Fails without modifying the body if its mass is not strictly positive.
///
/// [semi-implicit Euler method]: https://en.wikipedia.org/wiki/Semi-implicit_Euler_method
///
/// # Example
///
/// ```
/// use moonsim::prelude::*;
/// use moonsim::integrator::semi_implicit_euler;
/// use glam::DVec2;
///
/// let params = SimulationParams::default();
/// let mut body = Body::new("pebble", DVec2::ZERO, 1.0, [255; 3], 1.0, DVec2::new(100.0, 0.0));
///
/// semi_implicit_euler(&mut body, DVec2::ZERO, &params).unwrap();
/// assert_eq!(body.position, DVec2::new(1.0, 0.0));
///
/// body.mass = 0.0;
/// assert!(semi_implicit_euler(&mut body, DVec2::ZERO, &params).is_err());
/// ```
pub fn semi_implicit_euler(
    body: &mut Body,
    net_force: DVec2,
    params: &SimulationParams,
) -> Result<(), BodyError> {
    body.check_mass()?;

    let dt = params.delta_time;
    let acceleration = net_force / body.mass;

    body.net_force = net_force;
    body.velocity -= acceleration * dt / params.scale;
    body.position += body.velocity * dt;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pebble(mass: f64) -> Body {
        Body::new("pebble", DVec2::new(10.0, 20.0), 1.0, [255; 3], mass, DVec2::new(3.0, -4.0))
    }

    #[test]
    fn velocity_then_position() {
        let params = SimulationParams::default();
        let mut body = pebble(2.0);
        let force = DVec2::new(4.0, -2.0);

        semi_implicit_euler(&mut body, force, &params).unwrap();

        let velocity = DVec2::new(3.0, -4.0) - force / 2.0 * params.delta_time / params.scale;
        assert_eq!(body.velocity, velocity);
        assert_eq!(body.position, DVec2::new(10.0, 20.0) + velocity * params.delta_time);
        assert_eq!(body.net_force, force);
    }

    #[test]
    fn longer_tick_moves_further() {
        let at_origin = Body {
            position: DVec2::ZERO,
            ..pebble(1.0)
        };
        let mut short = at_origin.clone();
        let mut long = at_origin;

        semi_implicit_euler(&mut short, DVec2::ZERO, &SimulationParams::default()).unwrap();
        semi_implicit_euler(&mut long, DVec2::ZERO, &SimulationParams::delta_time(0.02)).unwrap();

        assert_eq!(short.position, DVec2::new(3.0, -4.0) * 0.01);
        assert_eq!(long.position, 2.0 * short.position);
    }

    #[test]
    fn force_away_from_attractor_pulls_towards_it() {
        let params = SimulationParams::default();
        let mut body = Body {
            velocity: DVec2::ZERO,
            ..pebble(1.0)
        };

        // Attractor on the right, force points left.
        semi_implicit_euler(&mut body, DVec2::new(-1e-9, 0.0), &params).unwrap();
        assert!(body.velocity.x > 0.0);
        assert!(body.position.x > 10.0);
    }

    #[test]
    fn zero_mass_is_rejected() {
        let params = SimulationParams::default();
        let mut body = pebble(0.0);
        let before = body.clone();

        let result = semi_implicit_euler(&mut body, DVec2::new(1.0, 1.0), &params);

        assert_eq!(
            result,
            Err(BodyError::NonPositiveMass {
                name: "pebble".to_owned(),
                mass: 0.0
            })
        );
        assert_eq!(body, before);
        assert!(body.velocity.is_finite());
    }
}
