// src/schemes/riemann/hll.rs

//! HLL 双波近似黎曼求解器
//!
//! 信号速度取物理特征值与 Roe 平均特征值的外包络：
//! S⁺ = max(uR+cR, ū+c̄)，S⁻ = min(uL−cL, ū−c̄)。
//! 全场超音速时直接迎风取单侧物理通量，否则取双波加权平均。

use super::traits::{LocalFlux, RiemannSolver};
use crate::state::RotatedPrimitive;
use crate::types::GasConstants;

/// HLL 求解器
#[derive(Debug, Clone)]
pub struct HllSolver {
    gas: GasConstants,
}

impl HllSolver {
    /// 创建 HLL 求解器
    pub fn new(gas: GasConstants) -> Self {
        Self { gas }
    }
}

impl RiemannSolver for HllSolver {
    fn name(&self) -> &'static str {
        "HLL"
    }

    fn flux(&self, left: &RotatedPrimitive, right: &RotatedPrimitive) -> LocalFlux {
        let gam1 = self.gas.gamma_m1();
        let gam1q = self.gas.gamma_m1_inv();

        let rho_l_q = 1.0 / left.rho;
        let rho_r_q = 1.0 / right.rho;
        let rho_sq_l = left.rho.sqrt();
        let rho_sq_r = right.rho.sqrt();
        let rho_sq_qsum = 1.0 / (rho_sq_l + rho_sq_r);

        let e_l = gam1q * left.p + 0.5 * left.rho * (left.vn * left.vn + left.vt * left.vt);
        let e_r = gam1q * right.p + 0.5 * right.rho * (right.vn * right.vn + right.vt * right.vt);

        let u_l = [left.rho, left.rho * left.vn, left.rho * left.vt, e_l];
        let u_r = [right.rho, right.rho * right.vn, right.rho * right.vt, e_r];

        let f_l = [
            u_l[1],
            u_l[1] * left.vn + left.p,
            u_l[1] * left.vt,
            left.vn * (e_l + left.p),
        ];
        let f_r = [
            u_r[1],
            u_r[1] * right.vn + right.p,
            u_r[1] * right.vt,
            right.vn * (e_r + right.p),
        ];

        let c_l = (self.gas.gamma * left.p * rho_l_q).sqrt();
        let c_r = (self.gas.gamma * right.p * rho_r_q).sqrt();

        let h_l = (e_l + left.p) * rho_l_q;
        let h_r = (e_r + right.p) * rho_r_q;

        // Roe 平均
        let u_m = (rho_sq_r * right.vn + rho_sq_l * left.vn) * rho_sq_qsum;
        let v_m = (rho_sq_r * right.vt + rho_sq_l * left.vt) * rho_sq_qsum;
        let h_m = (rho_sq_r * h_r + rho_sq_l * h_l) * rho_sq_qsum;
        let c_m = (gam1 * (h_m - 0.5 * (u_m * u_m + v_m * v_m))).sqrt();

        // 信号速度
        let arp = f64::max(right.vn + c_r, u_m + c_m);
        let alm = f64::min(left.vn - c_l, u_m - c_m);

        if alm > 0.0 {
            f_l
        } else if arp < 0.0 {
            f_r
        } else {
            let arp_alm_q = 1.0 / (arp - alm);
            let mut flux = [0.0; 4];
            for i in 0..4 {
                flux[i] = (arp * f_l[i] - alm * f_r[i]) * arp_alm_q
                    + (arp * alm) * arp_alm_q * (u_r[i] - u_l[i]);
            }
            flux
        }
    }
}
