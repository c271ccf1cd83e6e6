// src/schemes/riemann/roe.rs

//! Roe 通量
//!
//! 密度平方根加权的 Roe 平均构造线性化雅可比矩阵，
//! 将守恒量跳跃分解为四个特征波强度，
//! 最终通量为左右物理通量平均减去 |特征值| 加权的波贡献。
//!
//! # 熵修正
//!
//! Harten 型修正：当某特征值与左右物理特征值的偏差 δ 大于
//! |λ| 时，用二次型 0.5(λ²/δ + δ) 替代 |λ|，
//! 避免跨音速稀疏波处的熵违背解。

use super::traits::{LocalFlux, RiemannSolver, SolverCapabilities};
use crate::state::RotatedPrimitive;
use crate::types::GasConstants;

/// Roe 求解器
#[derive(Debug, Clone)]
pub struct RoeSolver {
    gas: GasConstants,
}

impl RoeSolver {
    /// 创建 Roe 求解器
    pub fn new(gas: GasConstants) -> Self {
        Self { gas }
    }
}

impl RiemannSolver for RoeSolver {
    fn name(&self) -> &'static str {
        "Roe"
    }

    fn capabilities(&self) -> SolverCapabilities {
        SolverCapabilities {
            has_entropy_fix: true,
            ..SolverCapabilities::default()
        }
    }

    fn flux(&self, left: &RotatedPrimitive, right: &RotatedPrimitive) -> LocalFlux {
        let gam1 = self.gas.gamma_m1();
        let gam1q = self.gas.gamma_m1_inv();

        let mx_l = left.rho * left.vn;
        let mx_r = right.rho * right.vn;
        let my_l = left.rho * left.vt;
        let my_r = right.rho * right.vt;

        let e_l = gam1q * left.p + 0.5 * left.rho * (left.vn * left.vn + left.vt * left.vt);
        let e_r = gam1q * right.p + 0.5 * right.rho * (right.vn * right.vn + right.vt * right.vt);

        let h_l = (e_l + left.p) / left.rho;
        let h_r = (e_r + right.p) / right.rho;

        let rho_sq_l = left.rho.sqrt();
        let rho_sq_r = right.rho.sqrt();
        let rho_sq_qsum = 1.0 / (rho_sq_l + rho_sq_r);

        // Roe 平均
        let vx_bar = (rho_sq_r * right.vn + rho_sq_l * left.vn) * rho_sq_qsum;
        let vy_bar = (rho_sq_r * right.vt + rho_sq_l * left.vt) * rho_sq_qsum;
        let h_bar = (rho_sq_r * h_r + rho_sq_l * h_l) * rho_sq_qsum;
        let c_bar = (gam1 * (h_bar - 0.5 * (vx_bar * vx_bar + vy_bar * vy_bar))).sqrt();

        // 平均特征值
        let mut a = [vx_bar - c_bar, vx_bar, vx_bar, vx_bar + c_bar];

        // 平均特征向量
        let r1 = [1.0, a[0], vy_bar, h_bar - vx_bar * c_bar];
        let r2 = [
            1.0,
            vx_bar,
            vy_bar,
            0.5 * (vx_bar * vx_bar + vy_bar * vy_bar),
        ];
        let r3 = [0.0, 0.0, 1.0, vy_bar];
        let r4 = [1.0, a[3], vy_bar, h_bar + vx_bar * c_bar];

        // 守恒量跳跃
        let del_rho = right.rho - left.rho;
        let del_mx = mx_r - mx_l;
        let del_my = my_r - my_l;
        let del_e = e_r - e_l;
        let del_eq = del_e - (del_my - vy_bar * del_rho) * vy_bar;

        // 波强度
        let c_bar_q = 1.0 / c_bar;
        let alpha2 = -gam1
            * c_bar_q
            * c_bar_q
            * (del_rho * (vx_bar * vx_bar - h_bar) + del_eq - del_mx * vx_bar);
        let alpha1 = -0.5 * c_bar_q * (del_mx - del_rho * (vx_bar + c_bar)) - 0.5 * alpha2;
        let alpha4 = del_rho - alpha1 - alpha2;
        let alpha3 = del_my - vy_bar * del_rho;

        // 物理通量
        let f_r = [
            mx_r,
            mx_r * right.vn + right.p,
            mx_r * right.vt,
            right.vn * (e_r + right.p),
        ];
        let f_l = [
            mx_l,
            mx_l * left.vn + left.p,
            mx_l * left.vt,
            left.vn * (e_l + left.p),
        ];

        // 熵修正
        let c_l = self.gas.sound_speed(left.rho, left.p);
        let c_r = self.gas.sound_speed(right.rho, right.p);
        let a_l = [left.vn - c_l, left.vn, left.vn, left.vn + c_l];
        let a_r = [right.vn - c_r, right.vn, right.vn, right.vn + c_r];
        for i in 0..4 {
            let da = f64::max(f64::max(0.0, a[i] - a_l[i]), a_r[i] - a[i]);
            if a[i].abs() < da {
                a[i] = 0.5 * (a[i] * a[i] / da + da);
            } else {
                a[i] = a[i].abs();
            }
        }

        let mut flux = [0.0; 4];
        for i in 0..4 {
            flux[i] = 0.5
                * (f_r[i] + f_l[i]
                    - alpha1 * a[0].abs() * r1[i]
                    - alpha2 * a[1].abs() * r2[i]
                    - alpha3 * a[2].abs() * r3[i]
                    - alpha4 * a[3].abs() * r4[i]);
        }
        flux
    }
}
