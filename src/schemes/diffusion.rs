// src/schemes/diffusion.rs

//! 粘性（扩散）通量
//!
//! 牛顿流体的偏应力张量（Stokes 假设，体积粘性为零）加
//! Fourier 热传导。热流以原始变量梯度表达：
//!
//! q = −γ/((γ−1)·Pr·ρ²) · (ρ∇p − p∇ρ) · μ
//!
//! 输入为面上的平均原始状态与经过非正交修正的原始变量梯度，
//! 输出笛卡尔坐标下的 x、y 方向通量分量（质量分量恒为零），
//! 由积分器投影到面法向并从对流通量中扣除。

use crate::state::{PrimitiveGradient, PrimitiveState};
use crate::types::GasConstants;

use super::riemann::LocalFlux;

/// 粘性通量计算器
#[derive(Debug, Clone)]
pub struct DiffusiveFluxEvaluator {
    gas: GasConstants,
}

impl DiffusiveFluxEvaluator {
    /// 创建粘性通量计算器
    pub fn new(gas: GasConstants) -> Self {
        Self { gas }
    }

    /// 动力粘性系数
    pub fn viscosity(&self) -> f64 {
        self.gas.mu
    }

    /// 计算 x、y 方向的粘性通量分量
    ///
    /// 返回 `(f, g)`，各为 [质量, x 动量, y 动量, 能量]，
    /// 质量分量恒为零。
    pub fn flux(
        &self,
        mean: &PrimitiveState,
        grad_x: &PrimitiveGradient,
        grad_y: &PrimitiveGradient,
    ) -> (LocalFlux, LocalFlux) {
        let mu = self.gas.mu;
        let heat = self.gas.gamma
            / (self.gas.gamma_m1() * self.gas.prandtl * mean.rho * mean.rho);

        let mut f = [0.0; 4];
        f[1] = (4.0 / 3.0 * grad_x.vel_x - 2.0 / 3.0 * grad_y.vel_y) * mu;
        f[2] = (grad_y.vel_x + grad_x.vel_y) * mu;
        f[3] = (4.0 / 3.0 * mean.vel.x * grad_x.vel_x - 2.0 / 3.0 * mean.vel.x * grad_y.vel_y
            + (grad_x.vel_y + grad_y.vel_x) * mean.vel.y
            + heat * (mean.rho * grad_x.p - mean.p * grad_x.rho))
            * mu;

        let mut g = [0.0; 4];
        g[1] = (grad_y.vel_x + grad_x.vel_y) * mu;
        g[2] = (4.0 / 3.0 * grad_y.vel_y - 2.0 / 3.0 * grad_x.vel_x) * mu;
        g[3] = (4.0 / 3.0 * mean.vel.y * grad_y.vel_y - 2.0 / 3.0 * mean.vel.y * grad_x.vel_x
            + (grad_y.vel_x + grad_x.vel_y) * mean.vel.x
            + heat * (mean.rho * grad_y.p - mean.p * grad_y.rho))
            * mu;

        (f, g)
    }
}
