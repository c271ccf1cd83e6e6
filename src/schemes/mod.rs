// src/schemes/mod.rs

//! 数值格式模块
//!
//! - [`riemann`]: 对流通量的黎曼求解器族
//! - [`diffusion`]: Navier-Stokes 粘性通量

pub mod diffusion;
pub mod riemann;

pub use diffusion::DiffusiveFluxEvaluator;
pub use riemann::{
    create_solver, ExactRiemannSolver, FaceFlux, LocalFlux, RiemannSolver, RiemannStarState,
    SolverCapabilities,
};
