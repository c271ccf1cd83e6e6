// src/schemes/riemann/van_leer.rs

//! Van Leer 通量矢量分裂
//!
//! 按界面马赫数 M=u/c 分三段：|M|>1 时取纯迎风物理通量，
//! 亚音速段使用 Van Leer 多项式分裂
//! f⁺₀ = ±¼ρc(M±1)²，动量与能量分量由 cx = (γ−1)u ± 2c
//! 闭式给出。分裂通量关于 M 连续可微，适合隐式求解。

use super::traits::{LocalFlux, RiemannSolver};
use crate::state::RotatedPrimitive;
use crate::types::GasConstants;

/// Van Leer 求解器
#[derive(Debug, Clone)]
pub struct VanLeerSolver {
    gas: GasConstants,
}

impl VanLeerSolver {
    /// 创建 Van Leer 求解器
    pub fn new(gas: GasConstants) -> Self {
        Self { gas }
    }
}

impl RiemannSolver for VanLeerSolver {
    fn name(&self) -> &'static str {
        "Van Leer"
    }

    fn flux(&self, left: &RotatedPrimitive, right: &RotatedPrimitive) -> LocalFlux {
        let gam = self.gas.gamma;
        let gam1 = self.gas.gamma_m1();
        let gam1q = self.gas.gamma_m1_inv();

        let c_l = self.gas.sound_speed(left.rho, left.p);
        let c_r = self.gas.sound_speed(right.rho, right.p);

        let e_l = gam1q * left.p + 0.5 * left.rho * (left.vn * left.vn + left.vt * left.vt);
        let e_r = gam1q * right.p + 0.5 * right.rho * (right.vn * right.vn + right.vt * right.vt);

        let h_l = (e_l + left.p) / left.rho;
        let h_r = (e_r + right.p) / right.rho;

        // 左侧正通量
        let m_l = left.vn / c_l;
        let fp: [f64; 4] = if m_l > 1.0 {
            let f0 = left.rho * left.vn;
            [f0, f0 * left.vn + left.p, f0 * left.vt, f0 * h_l]
        } else if m_l > -1.0 {
            let cx = gam1 * left.vn + 2.0 * c_l;
            let f0 = 0.25 * left.rho * c_l * (m_l + 1.0) * (m_l + 1.0);
            let f1 = f0 * cx / gam;
            let f2 = f0 * left.vt;
            [f0, f1, f2, 0.5 * (f1 * cx * gam / (gam * gam - 1.0) + f2 * left.vt)]
        } else {
            [0.0; 4]
        };

        // 右侧负通量
        let m_r = right.vn / c_r;
        let fm: [f64; 4] = if m_r < -1.0 {
            let f0 = right.rho * right.vn;
            [f0, f0 * right.vn + right.p, f0 * right.vt, f0 * h_r]
        } else if m_r < 1.0 {
            let cx = gam1 * right.vn - 2.0 * c_r;
            let f0 = -0.25 * right.rho * c_r * (1.0 - m_r) * (1.0 - m_r);
            let f1 = f0 * cx / gam;
            let f2 = f0 * right.vt;
            [f0, f1, f2, 0.5 * (f1 * cx * gam / (gam * gam - 1.0) + f2 * right.vt)]
        } else {
            [0.0; 4]
        };

        [fp[0] + fm[0], fp[1] + fm[1], fp[2] + fm[2], fp[3] + fm[3]]
    }
}
