// src/engine/flux_integrator.rs

//! 逐面通量积分器
//!
//! 求解器外层每次迭代调用一次 [`FluxIntegrator::compute_fluxes`]，
//! 对每个物理面执行：
//!
//! 1. 将两侧重构状态旋转到面法向坐标系
//! 2. 调用黎曼求解器得到局部对流通量
//! 3. 将动量分量旋转回全局坐标系
//! 4. 粘性模式下扣除扩散通量在法向上的投影
//! 5. 按面长缩放（中点求积）
//! 6. 写入主半边，镜像半边写入精确取反值
//!
//! 第 6 步是守恒性的唯一保证机制：任何一个面对两侧单元的
//! 贡献严格相消（位级精确），不依赖浮点求和顺序。
//!
//! 扩散通量使用两侧单元梯度的算术平均，并沿形心连线做
//! 非正交修正：平均梯度在连线方向上的分量被连线方向差商替换。

use std::time::{Duration, Instant};

use rayon::prelude::*;
use thiserror::Error;

use crate::mesh::FvMesh;
use crate::schemes::diffusion::DiffusiveFluxEvaluator;
use crate::schemes::riemann::{create_solver, ExactRiemannSolver, FaceFlux, RiemannSolver};
use crate::state::{EulerState, PrimitiveGradient, RotatedPrimitive};
use crate::types::{ConfigError, GoverningEquations, ParallelStrategy, SolverConfig};

use std::sync::Arc;

// ============================================================
// 错误
// ============================================================

/// 通量计算错误
///
/// 全部为结构性错误，在进入逐面循环之前检出。
/// 数值域错误（负密度开方等）不在此列，按 IEEE 规则以
/// NaN/Inf 传播，由调用方通过 [`FaceFlux::is_valid`] 检测。
#[derive(Debug, Clone, Error)]
pub enum FluxError {
    /// 粘性模式缺少单元梯度
    #[error("粘性模式需要单元梯度，但状态未提供")]
    GradientsMissing,
    /// 状态与网格的半边数不一致
    #[error("状态半边数 {state} 与网格半边数 {mesh} 不一致")]
    SideCountMismatch { state: usize, mesh: usize },
    /// 状态与网格的单元数不一致
    #[error("状态单元数 {state} 与网格单元数 {mesh} 不一致")]
    CellCountMismatch { state: usize, mesh: usize },
    /// 输出缓冲长度不匹配
    #[error("输出缓冲长度 {out} 与网格半边数 {mesh} 不一致")]
    OutputLengthMismatch { out: usize, mesh: usize },
}

// ============================================================
// 统计
// ============================================================

/// 通量计算统计
#[derive(Debug, Clone, Copy, Default)]
pub struct FluxComputeMetrics {
    /// 调用次数
    pub total_calls: u64,
    /// 累计处理的物理面数
    pub faces_processed: u64,
    /// 并行执行次数
    pub parallel_runs: u64,
    /// 串行执行次数
    pub sequential_runs: u64,
    /// 累计计算耗时
    pub total_time: Duration,
}

impl FluxComputeMetrics {
    /// 重置统计
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ============================================================
// 积分器
// ============================================================

/// 逐面通量积分器
pub struct FluxIntegrator {
    solver: Box<dyn RiemannSolver>,
    diffusion: Option<DiffusiveFluxEvaluator>,
    strategy: ParallelStrategy,
    min_parallel_faces: usize,
    metrics: FluxComputeMetrics,
}

impl FluxIntegrator {
    /// 由配置构建积分器
    ///
    /// 配置校验与求解器构建全部在此完成，热循环内不再分发。
    pub fn from_config(
        config: &SolverConfig,
        exact: Option<Arc<dyn ExactRiemannSolver>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let solver = create_solver(config.flux_scheme, config.gas, exact)?;
        let diffusion = match config.equations {
            GoverningEquations::Euler => None,
            GoverningEquations::NavierStokes => Some(DiffusiveFluxEvaluator::new(config.gas)),
        };
        log::info!(
            "通量积分器: 格式={}, 方程={:?}, 策略={:?}",
            solver.name(),
            config.equations,
            config.strategy
        );
        Ok(Self {
            solver,
            diffusion,
            strategy: config.strategy,
            min_parallel_faces: config.min_parallel_faces,
            metrics: FluxComputeMetrics::default(),
        })
    }

    /// 直接由部件构建（测试与嵌入场景）
    pub fn new(
        solver: Box<dyn RiemannSolver>,
        diffusion: Option<DiffusiveFluxEvaluator>,
        strategy: ParallelStrategy,
        min_parallel_faces: usize,
    ) -> Self {
        Self {
            solver,
            diffusion,
            strategy,
            min_parallel_faces,
            metrics: FluxComputeMetrics::default(),
        }
    }

    /// 当前求解器名称
    pub fn solver_name(&self) -> &'static str {
        self.solver.name()
    }

    /// 是否包含粘性通量
    pub fn is_viscous(&self) -> bool {
        self.diffusion.is_some()
    }

    /// 计算统计
    pub fn metrics(&self) -> &FluxComputeMetrics {
        &self.metrics
    }

    /// 重置计算统计
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// 计算全部面通量
    ///
    /// `side_flux` 逐半边写入：主半边为积分通量，镜像半边为其
    /// 精确取反值。调用前的内容被完全覆盖。
    pub fn compute_fluxes(
        &mut self,
        mesh: &FvMesh,
        state: &EulerState,
        side_flux: &mut [FaceFlux],
    ) -> Result<(), FluxError> {
        if state.n_sides() != mesh.n_sides() {
            return Err(FluxError::SideCountMismatch {
                state: state.n_sides(),
                mesh: mesh.n_sides(),
            });
        }
        if state.n_cells() != mesh.n_cells() {
            return Err(FluxError::CellCountMismatch {
                state: state.n_cells(),
                mesh: mesh.n_cells(),
            });
        }
        if side_flux.len() != mesh.n_sides() {
            return Err(FluxError::OutputLengthMismatch {
                out: side_flux.len(),
                mesh: mesh.n_sides(),
            });
        }
        if self.diffusion.is_some() && state.gradients.is_none() {
            return Err(FluxError::GradientsMissing);
        }

        let start = Instant::now();
        let n_faces = mesh.n_faces();
        let parallel = match self.strategy {
            ParallelStrategy::Sequential => false,
            ParallelStrategy::CollectThenAccumulate => true,
            ParallelStrategy::Auto => n_faces >= self.min_parallel_faces,
        };

        if parallel {
            // 并行计算各面通量，串行写回；主半边与镜像半边的
            // 写入来自同一个面，不存在竞争。
            let fluxes: Vec<(usize, FaceFlux)> = mesh
                .primary_sides()
                .par_iter()
                .map(|&side| (side, self.face_flux(mesh, state, side)))
                .collect();
            for (side, flux) in fluxes {
                side_flux[side] = flux;
                side_flux[mesh.side_connection(side)] = flux.negated();
            }
            self.metrics.parallel_runs += 1;
        } else {
            for &side in mesh.primary_sides() {
                let flux = self.face_flux(mesh, state, side);
                side_flux[side] = flux;
                side_flux[mesh.side_connection(side)] = flux.negated();
            }
            self.metrics.sequential_runs += 1;
        }

        self.metrics.total_calls += 1;
        self.metrics.faces_processed += n_faces as u64;
        let elapsed = start.elapsed();
        self.metrics.total_time += elapsed;
        log::debug!("通量批次: {n_faces} 个面, 并行={parallel}, 耗时 {elapsed:?}");
        Ok(())
    }

    /// 单个主半边的积分通量（全局坐标，已按面长缩放）
    fn face_flux(&self, mesh: &FvMesh, state: &EulerState, side: usize) -> FaceFlux {
        let conn = mesh.side_connection(side);
        let normal = mesh.side_normal(side);

        let left = RotatedPrimitive::from_global(&state.side_primitives[side], normal);
        let right = RotatedPrimitive::from_global(&state.side_primitives[conn], normal);
        let local = self.solver.flux(&left, &right);

        let mut flux = FaceFlux::from_rotated(local, normal);

        if let (Some(diffusion), Some(gradients)) = (&self.diffusion, &state.gradients) {
            let owner = mesh.side_owner(side);
            let neighbor = mesh.side_owner(conn);

            let mean = state.side_primitives[side].mean(&state.side_primitives[conn]);
            let grad_x_mean = gradients.x[owner].mean(&gradients.x[neighbor]);
            let grad_y_mean = gradients.y[owner].mean(&gradients.y[neighbor]);

            // 非正交修正：平均梯度在形心连线方向上的分量
            // 被连线方向差商替换
            let bary = mesh.bary_unit(side);
            let dist = mesh.bary_dist(side);
            let prim_o = &state.cell_primitives[owner];
            let prim_n = &state.cell_primitives[neighbor];
            let directional = PrimitiveGradient::new(
                (prim_n.rho - prim_o.rho) / dist,
                (prim_n.vel.x - prim_o.vel.x) / dist,
                (prim_n.vel.y - prim_o.vel.y) / dist,
                (prim_n.p - prim_o.p) / dist,
            );
            let correction = grad_x_mean
                .scaled(bary.x)
                .add(&grad_y_mean.scaled(bary.y))
                .sub(&directional);
            let grad_x = grad_x_mean.sub(&correction.scaled(bary.x));
            let grad_y = grad_y_mean.sub(&correction.scaled(bary.y));

            let (f, g) = diffusion.flux(&mean, &grad_x, &grad_y);
            flux.mass -= f[0] * normal.x + g[0] * normal.y;
            flux.momentum_x -= f[1] * normal.x + g[1] * normal.y;
            flux.momentum_y -= f[2] * normal.x + g[2] * normal.y;
            flux.energy -= f[3] * normal.x + g[3] * normal.y;
        }

        flux.scaled(mesh.side_length(side))
    }
}
