use crate::gravity::{Mass, Position, Radius};
use glam::DVec2;
use moonsim_derive::{Mass, Position, Radius};
use thiserror::Error;

/// Errors raised when a body cannot take part in a simulation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BodyError {
    /// The mass divides the net force during integration and must be strictly positive.
    #[error("body mass must be positive: `{name}` has a mass of {mass} kg")]
    NonPositiveMass {
        /// Name of the offending body.
        name: String,
        /// Its mass.
        mass: f64,
    },
    /// The radius selects the force law and must be finite and non-negative.
    #[error("body radius must be finite and non-negative: `{name}` has a radius of {radius} px")]
    InvalidRadius {
        /// Name of the offending body.
        name: String,
        /// Its radius.
        radius: f64,
    },
    /// Position or velocity contains NaN or an infinity.
    #[error("body `{name}` has a non-finite position or velocity")]
    NonFiniteState {
        /// Name of the offending body.
        name: String,
    },
}

/// A body of the simulation.
///
/// Positions are window pixels with the y axis pointing down, velocities are pixels per unit of
/// simulated time.
#[derive(Clone, Debug, PartialEq, Position, Mass, Radius)]
pub struct Body {
    /// Name used in logs and errors.
    pub name: String,
    /// Centre of the body.
    pub position: DVec2,
    /// Drawn radius, in pixels.
    pub radius: f64,
    /// RGB color used for the body and its trail.
    pub color: [u8; 3],
    /// Mass, in kilograms.
    pub mass: f64,
    /// Current velocity.
    pub velocity: DVec2,
    /// Net force applied during the last tick.
    pub net_force: DVec2,
}

impl Body {
    /// Creates a new body at rest with no applied force.
    pub fn new(
        name: impl Into<String>,
        position: DVec2,
        radius: f64,
        color: [u8; 3],
        mass: f64,
        velocity: DVec2,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            radius,
            color,
            mass,
            velocity,
            net_force: DVec2::ZERO,
        }
    }

    /// Checks that the body can be integrated.
    pub fn validate(&self) -> Result<(), BodyError> {
        self.check_mass()?;

        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(BodyError::InvalidRadius {
                name: self.name.clone(),
                radius: self.radius,
            });
        }

        if !self.position.is_finite() || !self.velocity.is_finite() {
            return Err(BodyError::NonFiniteState {
                name: self.name.clone(),
            });
        }

        Ok(())
    }

    /// Fails with [`BodyError::NonPositiveMass`] unless the mass is finite and strictly positive.
    #[inline]
    pub fn check_mass(&self) -> Result<(), BodyError> {
        // Also rejects NaN.
        if self.mass > 0.0 && self.mass.is_finite() {
            Ok(())
        } else {
            Err(BodyError::NonPositiveMass {
                name: self.name.clone(),
                mass: self.mass,
            })
        }
    }
}
