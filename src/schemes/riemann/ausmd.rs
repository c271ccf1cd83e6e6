// src/schemes/riemann/ausmd.rs

//! AUSMD 通量
//!
//! 迎风分裂（Advection Upstream Splitting Method）族格式：
//! 按界面马赫数 |u|/cm 是否小于 1 选择多项式混合或纯迎风的
//! 质量分裂 uPlus/uMinus 与压强分裂 pPlus/pMinus，
//! 密度加权系数 α 取两侧 p/ρ 的比值。
//!
//! 亚音速分支依赖 1/vx 形式的压强分裂，u→0 时由多项式分支覆盖；
//! 超音速分支中 vx=0 不可达。

use super::traits::{LocalFlux, RiemannSolver};
use crate::state::RotatedPrimitive;
use crate::types::GasConstants;

/// AUSMD 求解器
#[derive(Debug, Clone)]
pub struct AusmdSolver {
    gas: GasConstants,
}

impl AusmdSolver {
    /// 创建 AUSMD 求解器
    pub fn new(gas: GasConstants) -> Self {
        Self { gas }
    }
}

impl RiemannSolver for AusmdSolver {
    fn name(&self) -> &'static str {
        "AUSMD"
    }

    fn flux(&self, left: &RotatedPrimitive, right: &RotatedPrimitive) -> LocalFlux {
        let gam1q = self.gas.gamma_m1_inv();

        let e_l = gam1q * left.p + 0.5 * left.rho * (left.vn * left.vn + left.vt * left.vt);
        let e_r = gam1q * right.p + 0.5 * right.rho * (right.vn * right.vn + right.vt * right.vt);

        let h_l = (e_l + left.p) / left.rho;
        let h_r = (e_r + right.p) / right.rho;

        // 最大声速
        let cm = f64::max(
            self.gas.sound_speed(left.rho, left.p),
            self.gas.sound_speed(right.rho, right.p),
        );

        let alpha_l = 2.0 * left.p / left.rho / (left.p / left.rho + right.p / right.rho);
        let alpha_r = 2.0 * right.p / right.rho / (left.p / left.rho + right.p / right.rho);

        let (u_plus, p_plus) = if left.vn.abs() < cm {
            (
                0.25 * alpha_l * (left.vn + cm) * (left.vn + cm) / cm
                    + 0.5 * (1.0 - alpha_l) * (left.vn + left.vn.abs()),
                0.25 * left.p * (left.vn + cm) * (left.vn + cm) / (cm * cm)
                    * (2.0 - left.vn / cm),
            )
        } else {
            (
                0.5 * (left.vn + left.vn.abs()),
                0.5 * left.p * (left.vn + left.vn.abs()) / left.vn,
            )
        };

        let (u_minus, p_minus) = if right.vn.abs() < cm {
            (
                -0.25 * alpha_r * (right.vn - cm) * (right.vn - cm) / cm
                    + 0.5 * (1.0 - alpha_r) * (right.vn - right.vn.abs()),
                0.25 * right.p * (right.vn - cm) * (right.vn - cm) / (cm * cm)
                    * (2.0 + right.vn / cm),
            )
        } else {
            (
                0.5 * (right.vn - right.vn.abs()),
                0.5 * right.p * (right.vn - right.vn.abs()) / right.vn,
            )
        };

        let rho_u = u_plus * left.rho + u_minus * right.rho;
        [
            rho_u,
            0.5 * (rho_u * (right.vn + left.vn) - rho_u.abs() * (right.vn - left.vn))
                + (p_plus + p_minus),
            0.5 * (rho_u * (right.vt + left.vt) - rho_u.abs() * (right.vt - left.vt)),
            0.5 * (rho_u * (h_r + h_l) - rho_u.abs() * (h_r - h_l)),
        ]
    }
}
