// src/schemes/riemann/traits.rs

//! 黎曼求解器统一接口
//!
//! 每个通量核是一个纯函数：面法向坐标系下的左右原始状态
//! 映射到四分量局部通量（质量、法向动量、切向动量、能量）。
//! 核内不校验输入，也不做任何钳制修复——非物理状态产生的
//! NaN/Inf 按设计向上传播，提示上游失稳（如 CFL 超限）。

use glam::DVec2;

use crate::state::RotatedPrimitive;

/// 面法向坐标系下的局部通量
///
/// 分量依次为：质量、法向动量、切向动量、能量。
pub type LocalFlux = [f64; 4];

/// 全局坐标系下的面通量
///
/// 动量分量已旋转回全局坐标，数值已按面长缩放。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FaceFlux {
    /// 质量通量
    pub mass: f64,
    /// x 方向动量通量
    pub momentum_x: f64,
    /// y 方向动量通量
    pub momentum_y: f64,
    /// 能量通量
    pub energy: f64,
}

impl FaceFlux {
    /// 零通量
    pub const ZERO: Self = Self {
        mass: 0.0,
        momentum_x: 0.0,
        momentum_y: 0.0,
        energy: 0.0,
    };

    /// 创建通量
    pub fn new(mass: f64, momentum_x: f64, momentum_y: f64, energy: f64) -> Self {
        Self {
            mass,
            momentum_x,
            momentum_y,
            energy,
        }
    }

    /// 将局部通量的动量分量旋转回全局坐标系
    ///
    /// Fx = nx·Fn − ny·Ft，Fy = ny·Fn + nx·Ft；
    /// 质量与能量为坐标不变量。
    pub fn from_rotated(local: LocalFlux, normal: DVec2) -> Self {
        let tangent = DVec2::new(-normal.y, normal.x);
        let momentum = normal * local[1] + tangent * local[2];
        Self {
            mass: local[0],
            momentum_x: momentum.x,
            momentum_y: momentum.y,
            energy: local[3],
        }
    }

    /// 按面长缩放（中点求积）
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            mass: self.mass * factor,
            momentum_x: self.momentum_x * factor,
            momentum_y: self.momentum_y * factor,
            energy: self.energy * factor,
        }
    }

    /// 精确取反（镜像半边的守恒写入）
    pub fn negated(self) -> Self {
        Self {
            mass: -self.mass,
            momentum_x: -self.momentum_x,
            momentum_y: -self.momentum_y,
            energy: -self.energy,
        }
    }

    /// 检查数值有效性
    pub fn is_valid(&self) -> bool {
        self.mass.is_finite()
            && self.momentum_x.is_finite()
            && self.momentum_y.is_finite()
            && self.energy.is_finite()
    }
}

/// 求解器能力标志
#[derive(Debug, Clone, Copy)]
pub struct SolverCapabilities {
    /// 是否包含熵修正
    pub has_entropy_fix: bool,
    /// 是否带数值耗散（中心通量为 false）
    pub dissipative: bool,
    /// 公式是否经过验证（AUSMDV 为 false，保留既有公式）
    pub verified: bool,
}

impl Default for SolverCapabilities {
    fn default() -> Self {
        Self {
            has_entropy_fix: false,
            dissipative: true,
            verified: true,
        }
    }
}

/// 黎曼求解器 trait
///
/// 实现必须是纯函数：无副作用、仅依赖输入与构造时的气体常数，
/// 可从任意线程并发调用。
pub trait RiemannSolver: Send + Sync {
    /// 求解器名称
    fn name(&self) -> &'static str;

    /// 求解器能力
    fn capabilities(&self) -> SolverCapabilities {
        SolverCapabilities::default()
    }

    /// 求解一维黎曼问题，返回面法向坐标系下的数值通量
    ///
    /// # 前置条件
    /// 左右状态满足 ρ>0、p>0，由调用方（上游重构阶段）保证。
    fn flux(&self, left: &RotatedPrimitive, right: &RotatedPrimitive) -> LocalFlux;
}
