// src/schemes/riemann/hlle.rs

//! HLLE 近似黎曼求解器
//!
//! 与 HLL 结构相同，但波速估计采用 Einfeldt 公式：
//! 密度加权的声速平方加上速度跳跃修正项 η²(uR−uL)²，
//! 给出更紧且熵相容的信号速度界。

use super::traits::{LocalFlux, RiemannSolver};
use crate::state::RotatedPrimitive;
use crate::types::GasConstants;

/// HLLE 求解器
#[derive(Debug, Clone)]
pub struct HlleSolver {
    gas: GasConstants,
}

impl HlleSolver {
    /// 创建 HLLE 求解器
    pub fn new(gas: GasConstants) -> Self {
        Self { gas }
    }
}

impl RiemannSolver for HlleSolver {
    fn name(&self) -> &'static str {
        "HLLE"
    }

    fn flux(&self, left: &RotatedPrimitive, right: &RotatedPrimitive) -> LocalFlux {
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

        let u_m = (rho_sq_r * right.vn + rho_sq_l * left.vn) * rho_sq_qsum;

        // Einfeldt 波速估计
        let eta2 =
            0.5 * rho_sq_r * rho_sq_l / ((rho_sq_r + rho_sq_l) * (rho_sq_r + rho_sq_l));
        let d = ((rho_sq_r * c_r * c_r + rho_sq_l * c_l * c_l) * rho_sq_qsum
            + eta2 * (right.vn - left.vn) * (right.vn - left.vn))
            .sqrt();
        let arp = f64::max(right.vn + c_r, u_m + d);
        let alm = f64::min(left.vn - c_l, u_m - d);

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

#[cfg(test)]
mod tests {
    use super::super::hll::HllSolver;
    use super::*;

    #[test]
    fn test_consistency_equal_states() {
        let gas = GasConstants::air();
        let solver = HlleSolver::new(gas);
        let state = RotatedPrimitive::new(0.8, -0.4, 0.1, 1.1);
        let flux = solver.flux(&state, &state);
        let exact = state.physical_flux(&gas);
        for i in 0..4 {
            assert!((flux[i] - exact[i]).abs() < 1e-13 * (1.0 + exact[i].abs()));
        }
    }

    #[test]
    fn test_einfeldt_close_to_hll() {
        // 弱间断下 HLLE 与 HLL 的波速估计接近，通量差应很小
        let gas = GasConstants::air();
        let hlle = HlleSolver::new(gas);
        let hll = HllSolver::new(gas);
        let left = RotatedPrimitive::new(1.0, 0.1, 0.0, 1.0);
        let right = RotatedPrimitive::new(0.99, 0.1, 0.0, 0.99);
        let fe = hlle.flux(&left, &right);
        let fh = hll.flux(&left, &right);
        for i in 0..4 {
            assert!((fe[i] - fh[i]).abs() < 1e-2);
        }
    }

    #[test]
    fn test_supersonic_branches() {
        let gas = GasConstants::air();
        let solver = HlleSolver::new(gas);
        let left = RotatedPrimitive::new(1.0, 4.0, 0.0, 1.0);
        let right = RotatedPrimitive::new(1.0, 4.0, 0.0, 1.0);
        let flux = solver.flux(&left, &right);
        let f_l = left.physical_flux(&gas);
        for i in 0..4 {
            assert_eq!(flux[i], f_l[i]);
        }
    }
}
