// src/sources/manufactured.rs

//! 人工解源项
//!
//! 与正弦行波人工解 U(x,t) 配套的解析源项，用于收敛阶验证：
//! 将该源项加入残差后，人工解成为控制方程的精确解。
//! 粘性模式下能量方程附加热传导补偿项 2μγω²/Pr·sin(·)。

use std::f64::consts::PI;

use glam::DVec2;

use crate::types::{GasConstants, GoverningEquations};

use super::traits::{SourceContribution, SourceTerm};

/// 人工解源项
///
/// 频率与振幅对应人工解 ρ(x,t) = 2 + A·sin(ω(x+y) − 2πt)。
#[derive(Debug, Clone)]
pub struct ManufacturedSource {
    gas: GasConstants,
    equations: GoverningEquations,
    /// 空间频率因子 [-]
    freq: f64,
    /// 扰动振幅 [-]
    amp: f64,
}

impl ManufacturedSource {
    /// 创建标准人工解源项（freq=1, amp=0.1）
    pub fn new(gas: GasConstants, equations: GoverningEquations) -> Self {
        Self {
            gas,
            equations,
            freq: 1.0,
            amp: 0.1,
        }
    }
}

impl SourceTerm for ManufacturedSource {
    fn name(&self) -> &'static str {
        "manufactured"
    }

    fn evaluate(&self, x: DVec2, time: f64) -> SourceContribution {
        let gam = self.gas.gamma;
        let gam1 = self.gas.gamma_m1();
        let om = PI * self.freq;
        let a = 2.0 * PI;
        let amp = self.amp;

        let phase = om * (x.x + x.y) - a * time;
        let tmp1 = phase.cos();
        let tmp2 = (2.0 * phase).sin();

        let mass = (-a + 2.0 * om) * tmp1;
        let momentum = (-a + om * (gam * 3.0 - 1.0)) * tmp1 + amp * om * gam1 * tmp2;
        let mut energy =
            ((2.0 + gam * 6.0) * om - 4.0 * a) * tmp1 + amp * (2.0 * om * gam - a) * tmp2;
        if self.equations == GoverningEquations::NavierStokes {
            energy += 2.0 * self.gas.mu * gam * om * om / self.gas.prandtl * phase.sin();
        }

        SourceContribution {
            mass: mass * amp,
            momentum_x: momentum * amp,
            momentum_y: momentum * amp,
            energy: energy * amp,
        }
    }
}
