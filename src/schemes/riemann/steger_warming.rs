// src/schemes/riemann/steger_warming.rs

//! Steger-Warming 通量矢量分裂
//!
//! 将通量雅可比矩阵的特征值按符号分裂：正部取自左侧状态，
//! 负部取自右侧状态，分裂通量由闭式表达式直接重构，
//! 不需要显式矩阵乘法。

use super::traits::{LocalFlux, RiemannSolver};
use crate::state::RotatedPrimitive;
use crate::types::GasConstants;

/// Steger-Warming 求解器
#[derive(Debug, Clone)]
pub struct StegerWarmingSolver {
    gas: GasConstants,
}

impl StegerWarmingSolver {
    /// 创建 Steger-Warming 求解器
    pub fn new(gas: GasConstants) -> Self {
        Self { gas }
    }
}

impl RiemannSolver for StegerWarmingSolver {
    fn name(&self) -> &'static str {
        "Steger-Warming"
    }

    fn flux(&self, left: &RotatedPrimitive, right: &RotatedPrimitive) -> LocalFlux {
        let gam = self.gas.gamma;
        let gam1 = self.gas.gamma_m1();
        let gam1q = self.gas.gamma_m1_inv();
        let gam2q = 0.5 / gam;

        let c_l = self.gas.sound_speed(left.rho, left.p);
        let c_r = self.gas.sound_speed(right.rho, right.p);

        // 特征值
        let a_l = [left.vn - c_l, left.vn, left.vn, left.vn + c_l];
        let a_r = [right.vn - c_r, right.vn, right.vn, right.vn + c_r];

        // 正负分裂
        let ap = [
            f64::max(a_l[0], 0.0),
            f64::max(a_l[1], 0.0),
            f64::max(a_l[2], 0.0),
            f64::max(a_l[3], 0.0),
        ];
        let am = [
            f64::min(a_r[0], 0.0),
            f64::min(a_r[1], 0.0),
            f64::min(a_r[2], 0.0),
            f64::min(a_r[3], 0.0),
        ];

        // 左侧正通量
        let mut fp = [0.0; 4];
        fp[0] = left.rho * gam2q * (2.0 * gam1 * ap[1] + ap[0] + ap[3]);
        fp[1] = fp[0] * left.vn + (ap[3] - ap[0]) * left.rho * c_l * gam2q;
        fp[2] = fp[0] * left.vt;
        fp[3] = fp[0] * 0.5 * (left.vn * left.vn + left.vt * left.vt)
            + (ap[3] - ap[0]) * left.rho * c_l * left.vn * gam2q
            + (ap[3] + ap[0]) * left.rho * c_l * c_l * gam2q * gam1q;

        // 右侧负通量
        let mut fm = [0.0; 4];
        fm[0] = right.rho * gam2q * (2.0 * gam1 * am[1] + am[0] + am[3]);
        fm[1] = fm[0] * right.vn + (am[3] - am[0]) * right.rho * c_r * gam2q;
        fm[2] = fm[0] * right.vt;
        fm[3] = fm[0] * 0.5 * (right.vn * right.vn + right.vt * right.vt)
            + (am[3] - am[0]) * right.rho * c_r * right.vn * gam2q
            + (am[3] + am[0]) * right.rho * c_r * c_r * gam2q * gam1q;

        [
            fp[0] + fm[0],
            fp[1] + fm[1],
            fp[2] + fm[2],
            fp[3] + fm[3],
        ]
    }
}
