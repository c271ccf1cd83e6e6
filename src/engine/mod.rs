// src/engine/mod.rs

//! 通量积分引擎
//!
//! - [`flux_integrator`]: 逐面通量积分与并行策略调度

pub mod flux_integrator;

pub use flux_integrator::{FluxComputeMetrics, FluxError, FluxIntegrator};
