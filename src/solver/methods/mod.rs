//! Numerical methods for solving the kinetic equations
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Architecture
//!
//! The separation between abstract solver interface (`solver::traits`) and concrete
//! implementations (`solver::methods`) keeps the time-stepping scheme out of
//! the rate laws: a model never knows how it is integrated.
//!
//! # Available Methods
//!
//! - **[`EulerSolver`]**: Forward Euler method
//!   - Order: First-order O(dt)
//!   - Cost: 1 rate evaluation per step
//!   - Fixed step, no step-size control
//!
//! # Design Philosophy
//!
//! Each solver is:
//! - **Self-contained**: No shared mutable state
//! - **Stateless**: Can be reused for multiple simulations

pub mod euler;

// Re-exports for convenience
pub use euler::EulerSolver;
