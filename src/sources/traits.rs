// src/sources/traits.rs

//! 源项接口

use glam::DVec2;

/// 单点源项贡献
///
/// 分量与守恒方程一一对应：质量、x 动量、y 动量、能量。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SourceContribution {
    /// 质量源
    pub mass: f64,
    /// x 动量源
    pub momentum_x: f64,
    /// y 动量源
    pub momentum_y: f64,
    /// 能量源
    pub energy: f64,
}

impl SourceContribution {
    /// 零贡献
    pub const ZERO: Self = Self {
        mass: 0.0,
        momentum_x: 0.0,
        momentum_y: 0.0,
        energy: 0.0,
    };

    /// 按权重累加另一贡献
    #[inline]
    pub fn add_weighted(&mut self, other: &Self, weight: f64) {
        self.mass += other.mass * weight;
        self.momentum_x += other.momentum_x * weight;
        self.momentum_y += other.momentum_y * weight;
        self.energy += other.energy * weight;
    }
}

/// 源项 trait
///
/// 实现必须是时间与空间的纯函数，可从任意线程并发调用。
pub trait SourceTerm: Send + Sync {
    /// 源项名称
    fn name(&self) -> &'static str;

    /// 在给定位置与时刻求值
    fn evaluate(&self, x: DVec2, time: f64) -> SourceContribution;
}
