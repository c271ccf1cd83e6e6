// src/schemes/riemann/mod.rs

//! 黎曼求解器模块
//!
//! 提供可压缩 Euler 方程的数值通量核，所有求解器在
//! 面法向旋转坐标系内工作，输入左右原始状态，输出
//! [质量, 法向动量, 切向动量, 能量] 四分量通量：
//!
//! - [`GodunovSolver`]: 精确黎曼解采样，精度基准
//! - [`RoeSolver`]: 线化近似 + Harten 熵修正
//! - [`HllSolver`] / [`HlleSolver`] / [`HllcSolver`]: 双波/三波近似
//! - [`LaxFriedrichsSolver`]: 局部 Lax-Friedrichs，最耗散
//! - [`StegerWarmingSolver`] / [`VanLeerSolver`]: 通量矢量分裂
//! - [`CentralSolver`]: 无耗散中心平均，仅供测试
//! - [`AusmdSolver`] / [`AusmdvSolver`]: AUSM 族分裂
//!
//! # 求解器选择指南
//!
//! | 求解器 | 精度 | 耗散 | 备注 |
//! |--------|-----|------|------|
//! | Godunov | 最高 | 最低 | 需要精确解器，成本最高 |
//! | HLLC / Roe | 高 | 低 | 通用默认 |
//! | HLL / HLLE | 中 | 中 | 接触间断被抹平 |
//! | Van Leer / Steger-Warming | 中 | 中 | 分裂光滑，适合隐式 |
//! | Lax-Friedrichs | 低 | 高 | 强间断兜底 |
//! | Central | — | 无 | 无条件不稳定 |

mod ausmd;
mod ausmdv;
mod central;
mod exact;
mod godunov;
mod hll;
mod hllc;
mod hlle;
mod lax_friedrichs;
mod roe;
mod steger_warming;
mod traits;
mod van_leer;

// 核心类型
pub use exact::{ExactRiemannSolver, RiemannStarState};
pub use traits::{FaceFlux, LocalFlux, RiemannSolver, SolverCapabilities};

// 求解器实现
pub use ausmd::AusmdSolver;
pub use ausmdv::AusmdvSolver;
pub use central::CentralSolver;
pub use godunov::GodunovSolver;
pub use hll::HllSolver;
pub use hllc::HllcSolver;
pub use hlle::HlleSolver;
pub use lax_friedrichs::LaxFriedrichsSolver;
pub use roe::RoeSolver;
pub use steger_warming::StegerWarmingSolver;
pub use van_leer::VanLeerSolver;

use std::sync::Arc;

use crate::types::{ConfigError, FluxSchemeType, GasConstants};

/// 按配置创建黎曼求解器
///
/// Godunov 格式需要外部提供精确解器实现，缺失时返回
/// [`ConfigError::MissingExactSolver`]，其余格式忽略 `exact`。
pub fn create_solver(
    scheme: FluxSchemeType,
    gas: GasConstants,
    exact: Option<Arc<dyn ExactRiemannSolver>>,
) -> Result<Box<dyn RiemannSolver>, ConfigError> {
    let solver: Box<dyn RiemannSolver> = match scheme {
        FluxSchemeType::Godunov => {
            let exact = exact.ok_or(ConfigError::MissingExactSolver(scheme))?;
            Box::new(GodunovSolver::new(gas, exact))
        }
        FluxSchemeType::Roe => Box::new(RoeSolver::new(gas)),
        FluxSchemeType::Hll => Box::new(HllSolver::new(gas)),
        FluxSchemeType::Hlle => Box::new(HlleSolver::new(gas)),
        FluxSchemeType::Hllc => Box::new(HllcSolver::new(gas)),
        FluxSchemeType::LaxFriedrichs => Box::new(LaxFriedrichsSolver::new(gas)),
        FluxSchemeType::StegerWarming => Box::new(StegerWarmingSolver::new(gas)),
        FluxSchemeType::Central => Box::new(CentralSolver::new(gas)),
        FluxSchemeType::Ausmd => Box::new(AusmdSolver::new(gas)),
        FluxSchemeType::Ausmdv => Box::new(AusmdvSolver::new(gas)),
        FluxSchemeType::VanLeer => Box::new(VanLeerSolver::new(gas)),
    };
    log::debug!("创建黎曼求解器: {}", solver.name());
    Ok(solver)
}
