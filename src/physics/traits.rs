//! Kinetic model traits and types
//!
//! This module defines the core API for kinetic models:
//! - `KineticModel`: trait for all rate laws
//! - `SurfaceState`: two-component state (occupancy, concentration)

use nalgebra::Vector2;

// =================================================================================================
// Surface State (Occupancy + Concentration)
// =================================================================================================

/// Instantaneous state of the reactor
///
/// Holds the occupied-site fraction θ and the adsorbate concentration A.
/// The same type carries the time derivatives (dθ/dt, dA/dt) returned by
/// a [`KineticModel`], so a forward Euler step reads `state + rate * dt`.
///
/// # Example
/// ```
/// use photosorb_rs::physics::SurfaceState;
///
/// let state = SurfaceState::new(0.2, 4.4e-3);
/// let rate = SurfaceState::new(1.0, -1.0e-3);
/// let next = state + rate * 0.1;
///
/// assert!((next.occupancy() - 0.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceState {
    /// Components stored as [θ, A]
    values: Vector2<f64>,
}

impl SurfaceState {
    /// Create a state from occupancy fraction and concentration
    pub fn new(occupancy: f64, concentration: f64) -> Self {
        Self {
            values: Vector2::new(occupancy, concentration),
        }
    }

    /// State with both components at zero (also the "no change" rate)
    pub fn zeros() -> Self {
        Self {
            values: Vector2::zeros(),
        }
    }

    /// Occupied-site fraction θ (or dθ/dt for a rate)
    pub fn occupancy(&self) -> f64 {
        self.values[0]
    }

    /// Adsorbate concentration A (or dA/dt for a rate)
    pub fn concentration(&self) -> f64 {
        self.values[1]
    }
}

// Operator overloading for numerical operations

impl std::ops::Add for SurfaceState {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            values: self.values + rhs.values,
        }
    }
}

impl std::ops::Mul<f64> for SurfaceState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self {
            values: self.values * scalar,
        }
    }
}

// =================================================================================================
// Kinetic Model Trait
// =================================================================================================

/// Trait for kinetic models
///
/// # Responsibility
/// Evaluates the right-hand side of the coupled ODEs at a given state.
/// Does NOT integrate them (that's the Solver's job).
///
/// Implementations must be pure: the same state always yields the same
/// rates, and nothing is mutated.
pub trait KineticModel {
    /// State seeded at `time[0]`
    fn initial_condition(&self) -> SurfaceState;

    /// Rate law dθ/dt alone
    ///
    /// Used directly when the concentration channel is driven by measured
    /// data and only the occupancy is integrated.
    fn occupancy_rate(&self, state: &SurfaceState) -> f64;

    /// Full derivative (dθ/dt, dA/dt) at `state`
    fn rate(&self, state: &SurfaceState) -> SurfaceState;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_state() {
        let state = SurfaceState::zeros();

        assert_eq!(state.occupancy(), 0.0);
        assert_eq!(state.concentration(), 0.0);
    }

    #[test]
    fn test_addition() {
        let one = SurfaceState::new(0.25, 1.0);
        let two = SurfaceState::new(0.5, -0.5);

        let sum = one + two;

        assert_eq!(sum.occupancy(), 0.75);
        assert_eq!(sum.concentration(), 0.5);
    }

    #[test]
    fn test_multiplication() {
        let state = SurfaceState::new(1.0, 2.0) * 10.0;

        assert_eq!(state.occupancy(), 10.0);
        assert_eq!(state.concentration(), 20.0);
    }
}
