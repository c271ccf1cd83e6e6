// src/schemes/riemann/ausmdv.rs

//! AUSMDV 通量
//!
//! 在 AUSMD 分裂的基础上引入压强梯度开关
//! s = min(1, 10|pR−pL|/min(pL,pR))，在 AUSMV 型动量项与
//! AUSMD 型耗散平均之间混合，并在跨音速膨胀/压缩扇处
//! 附加熵修正项。
//!
//! 本格式存在已知缺陷：亚音速分支中右侧 uMinus 使用了
//! 左侧速度。为保证回归结果兼容，公式逐项保留，不做修正；
//! 对应的 `capabilities().verified` 为 false，对称性与
//! 基准对比测试均不覆盖本格式。

use super::traits::{LocalFlux, RiemannSolver, SolverCapabilities};
use crate::state::RotatedPrimitive;
use crate::types::GasConstants;

/// AUSMDV 求解器（未验证，保留既有公式）
#[derive(Debug, Clone)]
pub struct AusmdvSolver {
    gas: GasConstants,
}

impl AusmdvSolver {
    /// 创建 AUSMDV 求解器
    pub fn new(gas: GasConstants) -> Self {
        Self { gas }
    }
}

impl RiemannSolver for AusmdvSolver {
    fn name(&self) -> &'static str {
        "AUSMDV"
    }

    fn capabilities(&self) -> SolverCapabilities {
        SolverCapabilities {
            verified: false,
            ..SolverCapabilities::default()
        }
    }

    fn flux(&self, left: &RotatedPrimitive, right: &RotatedPrimitive) -> LocalFlux {
        let gam1q = self.gas.gamma_m1_inv();

        let e_l = gam1q * left.p + 0.5 * left.rho * (left.vn * left.vn + left.vt * left.vt);
        let e_r = gam1q * right.p + 0.5 * right.rho * (right.vn * right.vn + right.vt * right.vt);

        let h_l = (e_l + left.p) / left.rho;
        let h_r = (e_r + right.p) / right.rho;

        let c_l = self.gas.sound_speed(left.rho, left.p);
        let c_r = self.gas.sound_speed(right.rho, right.p);
        let cm = f64::max(c_l, c_r);

        let alpha_l = 2.0 * left.p / left.rho / (left.p / left.rho + right.p / right.rho);
        let alpha_r = 2.0 * right.p / right.rho / (left.p / left.rho + right.p / right.rho);

        let (u_plus, p_plus) = if left.vn.abs() < cm {
            let p_plus = 0.25 * left.p * (left.vn + cm) * (left.vn + cm) / (cm * cm)
                * (2.0 - left.vn / cm);
            let u_plus = if left.vn > 0.0 {
                left.vn + alpha_l * (left.vn - cm) * (left.vn - cm)
            } else {
                alpha_l * (left.vn + cm) * (left.vn + cm)
            };
            (u_plus, p_plus)
        } else if left.vn > 0.0 {
            (left.vn, left.p)
        } else {
            (0.0, 0.0)
        };

        let (u_minus, p_minus) = if right.vn.abs() < cm {
            let p_minus = 0.25 * right.p * (right.vn - cm) * (right.vn - cm) / (cm * cm)
                * (2.0 + right.vn / cm);
            let u_minus = if right.vn > 0.0 {
                // 此分支使用左侧速度，为回归兼容按原样保留
                -alpha_r * (left.vn - cm) * (left.vn - cm)
            } else {
                right.vn - alpha_r * (right.vn + cm) * (right.vn + cm)
            };
            (u_minus, p_minus)
        } else if right.vn > 0.0 {
            (0.0, 0.0)
        } else {
            (right.vn, right.p)
        };

        let rho_u = u_plus * left.rho + u_minus * right.rho;

        // 压强梯度开关
        let s = f64::min(1.0, 10.0 * (right.p - left.p).abs() / f64::min(right.p, left.p));
        let mut rho_u_sq =
            0.5 * (1.0 + s) * (left.rho * left.vn * u_plus + right.rho * right.vn * u_minus);
        rho_u_sq +=
            0.25 * (1.0 - s) * (rho_u * (right.vn + left.vn) - rho_u.abs() * (right.vn - left.vn));

        let mut flux = [
            rho_u,
            rho_u_sq + (p_plus + p_minus),
            0.5 * (rho_u * (right.vt + left.vt) - rho_u.abs() * (right.vt - left.vt)),
            0.5 * (rho_u * (h_r + h_l) - rho_u.abs() * (h_r - h_l)),
        ];

        // 跨音速扇熵修正
        let expansion_left = left.vn - c_l < 0.0 && right.vn - c_r > 0.0;
        let expansion_right = left.vn + c_l < 0.0 && right.vn + c_r > 0.0;
        let tmp_l = [1.0, left.vn, left.vt, h_l];
        let tmp_r = [1.0, right.vn, right.vt, h_r];
        if expansion_left && !expansion_right {
            let fac = 0.125 * ((right.vn - c_r) - (left.vn - c_l));
            for i in 0..4 {
                flux[i] -= fac * (right.rho * tmp_r[i] - left.rho * tmp_l[i]);
            }
        }
        if !expansion_left && expansion_right {
            let fac = 0.125 * ((right.vn + c_r) - (left.vn + c_l));
            for i in 0..4 {
                flux[i] -= fac * (right.rho * tmp_r[i] - left.rho * tmp_l[i]);
            }
        }

        flux
    }
}
