use crate::body::Body;
use glam::DVec2;

/// Initial conditions of one body.
///
/// The default descriptor has every field set to zero, including its mass, and is rejected when
/// a [`Simulation`](crate::simulation::Simulation) is created with it.
#[derive(Clone, Debug, Default, PartialEq)]
#[allow(missing_docs)]
pub struct BodyDescriptor {
    pub name: String,
    pub position: DVec2,
    pub radius: f64,
    pub color: [u8; 3],
    pub mass: f64,
    pub velocity: DVec2,
}

impl BodyDescriptor {
    /// Creates the [`Body`] described by these initial conditions.
    pub fn instance(&self) -> Body {
        Body::new(
            self.name.clone(),
            self.position,
            self.radius,
            self.color,
            self.mass,
            self.velocity,
        )
    }
}

/// List of initial conditions a [`Simulation`](crate::simulation::Simulation) starts from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scenario {
    /// Bodies in update order.
    pub bodies: Vec<BodyDescriptor>,
}

impl Scenario {
    /// Creates an empty scenario.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this scenario with the given body appended.
    pub fn with_body(mut self, body: BodyDescriptor) -> Self {
        self.bodies.push(body);
        self
    }

    /// The Earth and its Moon, 384 400 km apart, seen from above in a 900×650 window.
    ///
    /// Luna starts straight above the Earth moving right, and the Earth moves left so that the
    /// system barely drifts.
    pub fn earth_luna() -> Self {
        Self::new()
            .with_body(BodyDescriptor {
                name: "earth".to_owned(),
                position: DVec2::new(450.0, 325.0),
                radius: 30.0,
                color: [0, 0, 255],
                mass: 5.97219e+24,
                velocity: DVec2::new(-24.947719394204714 / 2.0, 0.0),
            })
            .with_body(BodyDescriptor {
                name: "luna".to_owned(),
                position: DVec2::new(450.0, 575.0 / 11.0),
                radius: 10.0,
                color: [128, 128, 128],
                mass: 7.349e+22,
                velocity: DVec2::new(1023.0, 0.0),
            })
    }

    /// Creates the bodies of this scenario, in order.
    pub fn instance(&self) -> Vec<Body> {
        self.bodies.iter().map(BodyDescriptor::instance).collect()
    }
}
