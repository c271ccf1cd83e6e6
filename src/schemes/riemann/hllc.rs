// src/schemes/riemann/hllc.rs

//! HLLC 近似黎曼求解器
//!
//! 在 HLL 双波结构上加入解出的接触波速度 S*，
//! 在接触波所在一侧重构星区状态（保持该侧切向速度），
//! 从而在接触间断处恢复高分辨率。
//!
//! 亚音速分支中 S* 的分母为左右两侧质量通量差，
//! 退化工况（分母趋零）按设计产生 Inf/NaN 并向上传播。

use super::traits::{LocalFlux, RiemannSolver};
use crate::state::RotatedPrimitive;
use crate::types::GasConstants;

/// HLLC 求解器
#[derive(Debug, Clone)]
pub struct HllcSolver {
    gas: GasConstants,
}

impl HllcSolver {
    /// 创建 HLLC 求解器
    pub fn new(gas: GasConstants) -> Self {
        Self { gas }
    }
}

impl RiemannSolver for HllcSolver {
    fn name(&self) -> &'static str {
        "HLLC"
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
            return f_l;
        }
        if arp < 0.0 {
            return f_r;
        }

        // 接触波速度
        let a_star = (right.p - left.p + u_l[1] * (alm - left.vn) - u_r[1] * (arp - right.vn))
            / (left.rho * (alm - left.vn) - right.rho * (arp - right.vn));

        let mut flux = [0.0; 4];
        if alm <= 0.0 && a_star >= 0.0 {
            // 接触波在右侧，星区取左侧状态
            let fac = left.rho * (alm - left.vn) / (alm - a_star);
            let u_star = [
                fac,
                a_star * fac,
                left.vt * fac,
                fac * (e_l / left.rho
                    + (a_star - left.vn) * (a_star + left.p / (left.rho * (alm - left.vn)))),
            ];
            for i in 0..4 {
                flux[i] = f_l[i] + alm * (u_star[i] - u_l[i]);
            }
        } else {
            let fac = right.rho * (arp - right.vn) / (arp - a_star);
            let u_star = [
                fac,
                a_star * fac,
                right.vt * fac,
                fac * (e_r / right.rho
                    + (a_star - right.vn) * (a_star + right.p / (right.rho * (arp - right.vn)))),
            ];
            for i in 0..4 {
                flux[i] = f_r[i] + arp * (u_star[i] - u_r[i]);
            }
        }
        flux
    }
}
