// src/lib.rs

//! 二维非结构网格可压缩流通量核心
//!
//! 提供有限体积求解器外层每次迭代调用的数值通量层，包括：
//! - 网格只读视图与不变量校验 (mesh)
//! - 核心类型与配置 (types)
//! - 流动状态与坐标旋转 (state)
//! - 数值格式 (schemes) - 黎曼求解器族、粘性通量
//! - 积分引擎 (engine) - 逐面通量积分、并行策略
//! - 源项处理 (sources) - 人工解验证源项与单元求积
//!
//! # 职责边界
//!
//! 本库不负责时间推进、梯度重构与边界条件：调用方在每次
//! 外层迭代写入重构状态（含镜像边界的幽灵半边状态），
//! 本库计算所有面的积分通量与单元源项。
//!
//! # 守恒性
//!
//! 每个物理面只计算一次通量，镜像半边写入精确取反值，
//! 两侧单元的贡献位级相消。该机制不依赖浮点求和顺序，
//! 对全部通量格式与并行策略成立。
//!
//! # 错误哲学
//!
//! 配置与拓扑错误在进入热循环之前以 `Result` 返回；
//! 数值域错误（负密度开方、退化分母）不做钳制修复，
//! 按 IEEE 规则产生 NaN/Inf 并向上传播，由调用方通过
//! [`FaceFlux::is_valid`] 检测失稳。

pub mod engine;
pub mod mesh;
pub mod schemes;
pub mod sources;
pub mod state;
pub mod types;

// 重导出常用类型
pub use engine::{FluxComputeMetrics, FluxError, FluxIntegrator};
pub use mesh::{CellSpec, FvMesh, MeshError, SideSpec};
pub use schemes::riemann::{
    create_solver, AusmdSolver, AusmdvSolver, CentralSolver, ExactRiemannSolver, FaceFlux,
    GodunovSolver, HllSolver, HllcSolver, HlleSolver, LaxFriedrichsSolver, LocalFlux,
    RiemannSolver, RiemannStarState, RoeSolver, SolverCapabilities, StegerWarmingSolver,
    VanLeerSolver,
};
pub use schemes::DiffusiveFluxEvaluator;
pub use sources::{ManufacturedSource, SourceContribution, SourceEvaluator, SourceTerm};
pub use state::{
    CellGradients, ConservedState, EulerState, PrimitiveGradient, PrimitiveState,
    RotatedPrimitive,
};
pub use types::{
    ConfigError, FluxSchemeType, GasConstants, GoverningEquations, ParallelStrategy, SolverConfig,
};
