// src/schemes/riemann/central.rs

//! 中心通量
//!
//! 左右物理通量的算术平均，不含任何耗散项。
//! 该格式无条件不稳定（可用 Jameson 人工粘性稳定，此处未实现），
//! 仅用于完整性与测试，不应用于生产计算。

use super::traits::{LocalFlux, RiemannSolver, SolverCapabilities};
use crate::state::RotatedPrimitive;
use crate::types::GasConstants;

/// 中心通量求解器
#[derive(Debug, Clone)]
pub struct CentralSolver {
    gas: GasConstants,
}

impl CentralSolver {
    /// 创建中心通量求解器
    pub fn new(gas: GasConstants) -> Self {
        Self { gas }
    }
}

impl RiemannSolver for CentralSolver {
    fn name(&self) -> &'static str {
        "Central"
    }

    fn capabilities(&self) -> SolverCapabilities {
        SolverCapabilities {
            dissipative: false,
            ..SolverCapabilities::default()
        }
    }

    fn flux(&self, left: &RotatedPrimitive, right: &RotatedPrimitive) -> LocalFlux {
        let f_l = left.physical_flux(&self.gas);
        let f_r = right.physical_flux(&self.gas);
        [
            0.5 * (f_l[0] + f_r[0]),
            0.5 * (f_l[1] + f_r[1]),
            0.5 * (f_l[2] + f_r[2]),
            0.5 * (f_l[3] + f_r[3]),
        ]
    }
}
