// src/state.rs

//! 流动状态类型
//!
//! 提供守恒量与原始量的相互转换、面法向坐标系下的旋转状态，
//! 以及求解器外层每次迭代写入的重构状态容器。
//!
//! # 坐标约定
//!
//! 面法向坐标系旋转：vn = nx·vx + ny·vy，vt = −ny·vx + nx·vy。
//! 密度与压强为坐标不变量。

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::types::GasConstants;

// ============================================================
// 原始量与守恒量
// ============================================================

/// 原始状态 (ρ, v, p)
///
/// 不变量：ρ > 0、p > 0。通量核不做校验，由上游重构阶段保证。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveState {
    /// 密度 ρ [kg/m³]
    pub rho: f64,
    /// 速度向量 [m/s]
    pub vel: DVec2,
    /// 压强 p [Pa]
    pub p: f64,
}

impl PrimitiveState {
    /// 创建原始状态
    pub fn new(rho: f64, vx: f64, vy: f64, p: f64) -> Self {
        Self {
            rho,
            vel: DVec2::new(vx, vy),
            p,
        }
    }

    /// 由守恒量转换（理想气体状态方程）
    pub fn from_conserved(cons: &ConservedState, gas: &GasConstants) -> Self {
        let vel = cons.momentum / cons.rho;
        let p = gas.gamma_m1() * (cons.energy - 0.5 * cons.rho * vel.length_squared());
        Self {
            rho: cons.rho,
            vel,
            p,
        }
    }

    /// 转换为守恒量
    pub fn to_conserved(&self, gas: &GasConstants) -> ConservedState {
        ConservedState {
            rho: self.rho,
            momentum: self.rho * self.vel,
            energy: gas.total_energy(self),
        }
    }

    /// 物理有效性：ρ>0、p>0 且各分量有限
    pub fn is_physical(&self) -> bool {
        self.rho > 0.0 && self.p > 0.0 && self.rho.is_finite() && self.p.is_finite() && self.vel.is_finite()
    }

    /// 两状态的算术平均（扩散通量的面状态）
    pub fn mean(&self, other: &Self) -> Self {
        Self {
            rho: 0.5 * (self.rho + other.rho),
            vel: 0.5 * (self.vel + other.vel),
            p: 0.5 * (self.p + other.p),
        }
    }
}

/// 守恒状态 (ρ, ρv, E)
///
/// 不变量：ρ > 0，E 不低于动能下限（否则压强非正，状态非物理）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConservedState {
    /// 密度 ρ [kg/m³]
    pub rho: f64,
    /// 动量 ρv [kg/(m²·s)]
    pub momentum: DVec2,
    /// 单位体积总能 E [J/m³]
    pub energy: f64,
}

impl ConservedState {
    /// 创建守恒状态
    pub fn new(rho: f64, mx: f64, my: f64, energy: f64) -> Self {
        Self {
            rho,
            momentum: DVec2::new(mx, my),
            energy,
        }
    }

    /// 压强 p = (γ−1)(E − ½ρ|v|²)
    pub fn pressure(&self, gas: &GasConstants) -> f64 {
        gas.gamma_m1() * (self.energy - 0.5 * self.momentum.length_squared() / self.rho)
    }
}

// ============================================================
// 面法向坐标系
// ============================================================

/// 面法向坐标系下的原始状态
///
/// 一维黎曼问题的输入：vn 为法向速度分量，vt 为切向分量。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedPrimitive {
    /// 密度 ρ
    pub rho: f64,
    /// 法向速度 vn
    pub vn: f64,
    /// 切向速度 vt
    pub vt: f64,
    /// 压强 p
    pub p: f64,
}

impl RotatedPrimitive {
    /// 创建旋转状态
    pub fn new(rho: f64, vn: f64, vt: f64, p: f64) -> Self {
        Self { rho, vn, vt, p }
    }

    /// 将全局坐标系状态旋转到面法向坐标系
    #[inline]
    pub fn from_global(prim: &PrimitiveState, normal: DVec2) -> Self {
        let tangent = DVec2::new(-normal.y, normal.x);
        Self {
            rho: prim.rho,
            vn: normal.dot(prim.vel),
            vt: tangent.dot(prim.vel),
            p: prim.p,
        }
    }

    /// 该状态的精确物理通量 F(U) = (ρvn, ρvn²+p, ρvn·vt, vn(E+p))
    ///
    /// 一致性基准：任何守恒格式在左右状态相等时必须返回该值。
    pub fn physical_flux(&self, gas: &GasConstants) -> [f64; 4] {
        let e = gas.gamma_m1_inv() * self.p + 0.5 * self.rho * (self.vn * self.vn + self.vt * self.vt);
        let mass = self.rho * self.vn;
        [
            mass,
            mass * self.vn + self.p,
            mass * self.vt,
            self.vn * (e + self.p),
        ]
    }
}

// ============================================================
// 原始量梯度
// ============================================================

/// 原始量沿某一方向的梯度分量
///
/// 粘性模式下每个单元持有 x/y 两个方向的梯度，由外部梯度重构阶段写入。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PrimitiveGradient {
    /// ∂ρ
    pub rho: f64,
    /// ∂vx
    pub vel_x: f64,
    /// ∂vy
    pub vel_y: f64,
    /// ∂p
    pub p: f64,
}

impl PrimitiveGradient {
    /// 零梯度
    pub const ZERO: Self = Self {
        rho: 0.0,
        vel_x: 0.0,
        vel_y: 0.0,
        p: 0.0,
    };

    /// 创建梯度
    pub fn new(rho: f64, vel_x: f64, vel_y: f64, p: f64) -> Self {
        Self {
            rho,
            vel_x,
            vel_y,
            p,
        }
    }

    /// 两梯度的算术平均
    #[inline]
    pub fn mean(&self, other: &Self) -> Self {
        Self {
            rho: 0.5 * (self.rho + other.rho),
            vel_x: 0.5 * (self.vel_x + other.vel_x),
            vel_y: 0.5 * (self.vel_y + other.vel_y),
            p: 0.5 * (self.p + other.p),
        }
    }

    /// 按系数缩放
    #[inline]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            rho: self.rho * factor,
            vel_x: self.vel_x * factor,
            vel_y: self.vel_y * factor,
            p: self.p * factor,
        }
    }

    /// 逐分量相加
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            rho: self.rho + other.rho,
            vel_x: self.vel_x + other.vel_x,
            vel_y: self.vel_y + other.vel_y,
            p: self.p + other.p,
        }
    }

    /// 逐分量相减
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            rho: self.rho - other.rho,
            vel_x: self.vel_x - other.vel_x,
            vel_y: self.vel_y - other.vel_y,
            p: self.p - other.p,
        }
    }
}

// ============================================================
// 求解器状态容器
// ============================================================

/// 单元梯度场（粘性模式）
#[derive(Debug, Clone, Default)]
pub struct CellGradients {
    /// 每个单元的 x 方向梯度
    pub x: Vec<PrimitiveGradient>,
    /// 每个单元的 y 方向梯度
    pub y: Vec<PrimitiveGradient>,
}

impl CellGradients {
    /// 创建全零梯度场
    pub fn zeros(n_cells: usize) -> Self {
        Self {
            x: vec![PrimitiveGradient::ZERO; n_cells],
            y: vec![PrimitiveGradient::ZERO; n_cells],
        }
    }
}

/// 可压缩流状态
///
/// 拓扑固定后由外部重构阶段每次外层迭代写入：
/// - `side_primitives`: 每个半边的重构面状态（通量核的直接输入）
/// - `cell_primitives`: 每个单元的中心状态（非正交修正使用）
/// - `gradients`: 粘性模式下的单元梯度，欧拉模式为 `None`
#[derive(Debug, Clone)]
pub struct EulerState {
    /// 每个半边的重构原始状态
    pub side_primitives: Vec<PrimitiveState>,
    /// 每个单元的中心原始状态
    pub cell_primitives: Vec<PrimitiveState>,
    /// 单元梯度（粘性模式）
    pub gradients: Option<CellGradients>,
}

impl EulerState {
    /// 创建均匀初始状态
    pub fn uniform(n_cells: usize, n_sides: usize, prim: PrimitiveState) -> Self {
        Self {
            side_primitives: vec![prim; n_sides],
            cell_primitives: vec![prim; n_cells],
            gradients: None,
        }
    }

    /// 为粘性模式分配梯度存储
    pub fn with_gradients(mut self) -> Self {
        let n_cells = self.cell_primitives.len();
        self.gradients = Some(CellGradients::zeros(n_cells));
        self
    }

    /// 半边数量
    pub fn n_sides(&self) -> usize {
        self.side_primitives.len()
    }

    /// 单元数量
    pub fn n_cells(&self) -> usize {
        self.cell_primitives.len()
    }
}
