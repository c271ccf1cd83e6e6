// src/schemes/riemann/lax_friedrichs.rs

//! 局部 Lax-Friedrichs 通量
//!
//! 左右物理通量的算术平均减去单一全局耗散项，
//! 耗散系数取两侧 |u|+c 的最大值并统一作用于四个方程。
//! 最便宜也最耗散的格式。

use super::traits::{LocalFlux, RiemannSolver};
use crate::state::RotatedPrimitive;
use crate::types::GasConstants;

/// 局部 Lax-Friedrichs 求解器
#[derive(Debug, Clone)]
pub struct LaxFriedrichsSolver {
    gas: GasConstants,
}

impl LaxFriedrichsSolver {
    /// 创建 Lax-Friedrichs 求解器
    pub fn new(gas: GasConstants) -> Self {
        Self { gas }
    }
}

impl RiemannSolver for LaxFriedrichsSolver {
    fn name(&self) -> &'static str {
        "Lax-Friedrichs"
    }

    fn flux(&self, left: &RotatedPrimitive, right: &RotatedPrimitive) -> LocalFlux {
        let gam1q = self.gas.gamma_m1_inv();

        // 最大特征速度
        let c_l = self.gas.sound_speed(left.rho, left.p);
        let c_r = self.gas.sound_speed(right.rho, right.p);
        let a = f64::max(right.vn.abs() + c_r, left.vn.abs() + c_l);

        let e_l = gam1q * left.p + 0.5 * left.rho * (left.vn * left.vn + left.vt * left.vt);
        let e_r = gam1q * right.p + 0.5 * right.rho * (right.vn * right.vn + right.vt * right.vt);

        let del_u = [
            right.rho - left.rho,
            right.rho * right.vn - left.rho * left.vn,
            right.rho * right.vt - left.rho * left.vt,
            e_r - e_l,
        ];

        let f_l = [
            left.rho * left.vn,
            left.rho * left.vn * left.vn + left.p,
            left.rho * left.vn * left.vt,
            left.vn * (e_l + left.p),
        ];
        let f_r = [
            right.rho * right.vn,
            right.rho * right.vn * right.vn + right.p,
            right.rho * right.vn * right.vt,
            right.vn * (e_r + right.p),
        ];

        let mut flux = [0.0; 4];
        for i in 0..4 {
            flux[i] = 0.5 * (f_r[i] + f_l[i]) - 0.5 * a * del_u[i];
        }
        flux
    }
}
