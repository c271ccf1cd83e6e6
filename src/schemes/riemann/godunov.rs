// src/schemes/riemann/godunov.rs

//! Godunov 精确通量
//!
//! 将黎曼问题交给外部精确求解器，得到界面处的解出状态
//! (ρ*, vn*, p*)，切向速度按解出法向速度的符号迎风取值，
//! 通量直接由该原始状态代入物理通量表达式。

use std::sync::Arc;

use super::exact::ExactRiemannSolver;
use super::traits::{LocalFlux, RiemannSolver};
use crate::state::RotatedPrimitive;
use crate::types::GasConstants;

/// Godunov 求解器
pub struct GodunovSolver {
    gas: GasConstants,
    exact: Arc<dyn ExactRiemannSolver>,
}

impl GodunovSolver {
    /// 创建 Godunov 求解器
    pub fn new(gas: GasConstants, exact: Arc<dyn ExactRiemannSolver>) -> Self {
        Self { gas, exact }
    }
}

impl RiemannSolver for GodunovSolver {
    fn name(&self) -> &'static str {
        "Godunov"
    }

    fn flux(&self, left: &RotatedPrimitive, right: &RotatedPrimitive) -> LocalFlux {
        let c_l = self.gas.sound_speed(left.rho, left.p);
        let c_r = self.gas.sound_speed(right.rho, right.p);

        let star = self.exact.solve(
            left.rho, right.rho, left.vn, right.vn, left.p, right.p, c_l, c_r,
        );

        // 切向速度由解出的法向速度符号迎风
        let vt = if star.vn > 0.0 { left.vt } else { right.vt };

        let mass = star.rho * star.vn;
        [
            mass,
            mass * star.vn + star.p,
            mass * vt,
            star.vn
                * (self.gas.gamma * self.gas.gamma_m1_inv() * star.p
                    + 0.5 * star.rho * (star.vn * star.vn + vt * vt)),
        ]
    }
}
