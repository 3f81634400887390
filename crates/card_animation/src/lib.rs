//! Profile Card Animation System
//!
//! Spring physics and a scheduler that ticks them.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Interruptible**: retargeting a moving spring keeps its velocity
//! - **Deterministic**: the scheduler is ticked with explicit `dt`, so headless
//!   runs and tests produce identical frames

pub mod scheduler;
pub mod spring;

pub use scheduler::{AnimationScheduler, SpringId};
pub use spring::{Spring, SpringConfig};
