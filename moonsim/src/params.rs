use thiserror::Error;

/// Gravitational constant, in m³ kg⁻¹ s⁻².
pub const G: f64 = 6.67428e-11;

/// Pixels per meter: one pixel spans 1409466.667 meters.
pub const SCALE: f64 = 1.0 / 1409466.667;

/// Duration of one physics tick.
pub const DT: f64 = 1.0 / 100.0;

/// Order in which bodies are updated during a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UpdateOrder {
    /// Net forces of all bodies are computed from the state at the start of the tick, then every
    /// body is integrated. The result does not depend on the order of the bodies.
    #[default]
    Snapshot,
    /// Each body is integrated as soon as its net force is known, so bodies later in the list see
    /// the already advanced state of the earlier ones.
    InPlace,
}

/// Errors raised by [`SimulationParams`] that would turn positions into NaN or infinities.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ParamsError {
    /// Distances are divided by the scale.
    #[error("scale must be finite and positive, got {0} px/m")]
    InvalidScale(f64),
    /// The tick duration multiplies every velocity.
    #[error("tick duration must be finite and positive, got {0}")]
    InvalidDeltaTime(f64),
    /// The gravitational constant multiplies every Newtonian force.
    #[error("gravitational constant must be finite, got {0}")]
    InvalidGravitationalConstant(f64),
}

/// Numerical and physical parameters of a [`Simulation`](crate::simulation::Simulation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    /// Gravitational constant, in m³ kg⁻¹ s⁻².
    pub gravitational_constant: f64,
    /// Pixels per meter, used to convert window distances to physical ones.
    pub scale: f64,
    /// Duration of one tick.
    pub delta_time: f64,
    /// Order in which bodies are updated during a tick.
    pub update_order: UpdateOrder,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            scale: SCALE,
            delta_time: DT,
            update_order: UpdateOrder::default(),
        }
    }
}

impl SimulationParams {
    /// Default parameters with the given tick duration.
    pub fn delta_time(delta_time: f64) -> Self {
        Self {
            delta_time,
            ..Default::default()
        }
    }

    /// Returns these parameters with the given [`UpdateOrder`].
    pub fn with_update_order(mut self, update_order: UpdateOrder) -> Self {
        self.update_order = update_order;
        self
    }

    /// Returns these parameters with the given number of pixels per meter.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Returns these parameters with the given gravitational constant.
    pub fn with_gravitational_constant(mut self, gravitational_constant: f64) -> Self {
        self.gravitational_constant = gravitational_constant;
        self
    }

    /// Checks that stepping with these parameters keeps bodies finite.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ParamsError::InvalidScale(self.scale));
        }
        if !(self.delta_time.is_finite() && self.delta_time > 0.0) {
            return Err(ParamsError::InvalidDeltaTime(self.delta_time));
        }
        if !self.gravitational_constant.is_finite() {
            return Err(ParamsError::InvalidGravitationalConstant(
                self.gravitational_constant,
            ));
        }

        Ok(())
    }

    /// Converts a distance in pixels to meters.
    pub fn meters(&self, pixels: f64) -> f64 {
        pixels / self.scale
    }

    /// Number of ticks that make up one unit of simulated time.
    pub fn steps_per_second(&self) -> usize {
        self.delta_time.recip().round() as _
    }
}
