// src/types.rs

//! 核心类型定义
//!
//! 提供通量计算核心所需的配置类型系统：
//! - **气体模型常数**：`GasConstants` 保持 f64（物理常数不随场景改变）
//! - **通量格式标识**：`FluxSchemeType` 封闭枚举，未知标识立即报错
//! - **控制方程模式**：`GoverningEquations` 区分欧拉 / 纳维-斯托克斯路径
//! - **求解器配置**：`SolverConfig` 作为应用层无泛型配置结构
//!
//! 所有配置值在进入并行循环之前完成解析与校验，循环内部不再分发。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::state::PrimitiveState;

// ============================================================
// 气体模型常数
// ============================================================

/// 理想气体模型常数
///
/// 包含比热比及输运属性。这些常量在一次计算中保持不变，
/// 以只读引用传入各通量核，而非可变全局量，
/// 因此可以在测试中并发运行多个气体模型。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasConstants {
    /// 比热比 γ [-]
    pub gamma: f64,
    /// 动力粘度 μ [Pa·s]
    pub mu: f64,
    /// 普朗特数 Pr [-]
    pub prandtl: f64,
}

impl Default for GasConstants {
    /// 默认使用标准空气常数
    fn default() -> Self {
        Self::air()
    }
}

impl GasConstants {
    /// 标准空气（γ=1.4，15°C）
    pub fn air() -> Self {
        Self {
            gamma: 1.4,
            mu: 1.8e-5,
            prandtl: 0.72,
        }
    }

    /// 创建新的气体模型
    pub fn new(gamma: f64, mu: f64, prandtl: f64) -> Self {
        Self { gamma, mu, prandtl }
    }

    /// γ−1
    #[inline]
    pub fn gamma_m1(&self) -> f64 {
        self.gamma - 1.0
    }

    /// 1/(γ−1)
    #[inline]
    pub fn gamma_m1_inv(&self) -> f64 {
        1.0 / (self.gamma - 1.0)
    }

    /// 声速 c = sqrt(γ p / ρ)
    ///
    /// 前置条件 ρ>0、p>0；非物理输入按 IEEE 规则产生 NaN 并向上传播。
    #[inline]
    pub fn sound_speed(&self, rho: f64, p: f64) -> f64 {
        (self.gamma * p / rho).sqrt()
    }

    /// 单位体积总能 E = p/(γ−1) + ½ρ|v|²
    #[inline]
    pub fn total_energy(&self, prim: &PrimitiveState) -> f64 {
        self.gamma_m1_inv() * prim.p + 0.5 * prim.rho * prim.vel.length_squared()
    }

    /// 总焓 H = (E + p)/ρ
    #[inline]
    pub fn enthalpy(&self, prim: &PrimitiveState) -> f64 {
        (self.total_energy(prim) + prim.p) / prim.rho
    }

    /// 校验常数有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gamma > 1.0) {
            return Err(ConfigError::InvalidGasModel {
                field: "gamma",
                constraint: "gamma > 1",
            });
        }
        if !(self.mu >= 0.0) {
            return Err(ConfigError::InvalidGasModel {
                field: "mu",
                constraint: "mu >= 0",
            });
        }
        if !(self.prandtl > 0.0) {
            return Err(ConfigError::InvalidGasModel {
                field: "prandtl",
                constraint: "prandtl > 0",
            });
        }
        Ok(())
    }
}

// ============================================================
// 通量格式与控制方程
// ============================================================

/// 通量格式类型
///
/// 封闭集合：配置阶段一次性映射到具体求解器，
/// 热循环内不做运行时分发。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FluxSchemeType {
    /// Godunov 精确通量（依赖外部精确黎曼求解器）
    Godunov,
    /// Roe 通量（带 Harten 熵修正）
    Roe,
    /// HLL 双波求解器
    Hll,
    /// HLLE（Einfeldt 波速估计）
    Hlle,
    /// HLLC（接触波修复）
    #[default]
    Hllc,
    /// 局部 Lax-Friedrichs（最耗散）
    LaxFriedrichs,
    /// Steger-Warming 通量矢量分裂
    StegerWarming,
    /// 中心通量（无条件不稳定，仅供测试）
    Central,
    /// AUSMD 迎风分裂
    Ausmd,
    /// AUSMDV 迎风分裂（已知在部分工况下输出不正确，保留既有公式）
    Ausmdv,
    /// Van Leer 通量矢量分裂
    VanLeer,
}

impl FluxSchemeType {
    /// 所有格式（测试遍历用）
    pub const ALL: [FluxSchemeType; 11] = [
        FluxSchemeType::Godunov,
        FluxSchemeType::Roe,
        FluxSchemeType::Hll,
        FluxSchemeType::Hlle,
        FluxSchemeType::Hllc,
        FluxSchemeType::LaxFriedrichs,
        FluxSchemeType::StegerWarming,
        FluxSchemeType::Central,
        FluxSchemeType::Ausmd,
        FluxSchemeType::Ausmdv,
        FluxSchemeType::VanLeer,
    ];

    /// 配置文件中使用的标识
    pub fn as_str(&self) -> &'static str {
        match self {
            FluxSchemeType::Godunov => "godunov",
            FluxSchemeType::Roe => "roe",
            FluxSchemeType::Hll => "hll",
            FluxSchemeType::Hlle => "hlle",
            FluxSchemeType::Hllc => "hllc",
            FluxSchemeType::LaxFriedrichs => "lax_friedrichs",
            FluxSchemeType::StegerWarming => "steger_warming",
            FluxSchemeType::Central => "central",
            FluxSchemeType::Ausmd => "ausmd",
            FluxSchemeType::Ausmdv => "ausmdv",
            FluxSchemeType::VanLeer => "van_leer",
        }
    }
}

impl fmt::Display for FluxSchemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FluxSchemeType {
    type Err = ConfigError;

    /// 解析格式标识，未知标识立即失败（不做静默回退）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FluxSchemeType::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownScheme(s.to_string()))
    }
}

/// 控制方程模式
///
/// 欧拉路径与纳维-斯托克斯路径是同一"逐面通量"能力的两个实现，
/// 而非散落在循环内的条件编译。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoverningEquations {
    /// 仅对流（无扩散通量）
    #[default]
    Euler,
    /// 对流 + 粘性应力与热传导
    NavierStokes,
}

// ============================================================
// 并行策略
// ============================================================

/// 面循环并行策略
///
/// - `Sequential`: 完全串行，适用于小规模网格
/// - `CollectThenAccumulate`: 先并行计算各面通量，后串行写入累加器
/// - `Auto`: 按面数自动选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParallelStrategy {
    /// 串行执行
    Sequential,
    /// 收集后累加
    CollectThenAccumulate,
    /// 自动选择（根据问题规模）
    #[default]
    Auto,
}

// ============================================================
// 求解器配置
// ============================================================

/// 通量核心配置
///
/// 应用层配置结构，所有值在构建 `FluxIntegrator` 之前解析完毕。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// 气体模型常数
    pub gas: GasConstants,
    /// 通量格式
    pub flux_scheme: FluxSchemeType,
    /// 控制方程模式
    pub equations: GoverningEquations,
    /// 并行策略
    pub strategy: ParallelStrategy,
    /// 最小并行面数（低于此值 `Auto` 退化为串行）
    pub min_parallel_faces: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gas: GasConstants::default(),
            flux_scheme: FluxSchemeType::default(),
            equations: GoverningEquations::default(),
            strategy: ParallelStrategy::default(),
            min_parallel_faces: 1000,
        }
    }
}

impl SolverConfig {
    /// 校验配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gas.validate()
    }
}

// ============================================================
// 配置错误
// ============================================================

/// 配置错误
///
/// 全部发生在进入并行循环之前，调用方应视为致命错误。
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// 未知的通量格式标识
    #[error("未知的通量格式: '{0}'")]
    UnknownScheme(String),
    /// Godunov 格式需要外部精确黎曼求解器
    #[error("格式 '{0}' 需要精确黎曼求解器，但未提供")]
    MissingExactSolver(FluxSchemeType),
    /// 气体模型常数非法
    #[error("气体模型参数 {field} 违反约束: {constraint}")]
    InvalidGasModel {
        field: &'static str,
        constraint: &'static str,
    },
}
