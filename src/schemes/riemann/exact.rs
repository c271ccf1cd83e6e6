// src/schemes/riemann/exact.rs

//! 精确黎曼求解器接口
//!
//! Godunov 通量依赖一个外部协作者：给定左右密度、法向速度、
//! 压强与声速，通过迭代求根得到界面处（ξ = x/t = 0）采样的
//! 精确状态。求根算法本身不属于通量核心，本模块只定义接口。

/// 界面采样状态
///
/// 黎曼扇在 ξ=0 处的原始状态（星区或穿过稀疏波内部的状态）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiemannStarState {
    /// 界面密度
    pub rho: f64,
    /// 界面法向速度
    pub vn: f64,
    /// 界面压强
    pub p: f64,
}

/// 精确黎曼求解器（外部协作者）
///
/// 实现方负责求根迭代的收敛性；本核心将返回值直接代入
/// 物理通量表达式，不做二次校验。
pub trait ExactRiemannSolver: Send + Sync {
    /// 在 ξ=0 处采样精确解
    ///
    /// # 参数
    /// - `rho_l`, `rho_r`: 左右密度
    /// - `vn_l`, `vn_r`: 左右法向速度
    /// - `p_l`, `p_r`: 左右压强
    /// - `c_l`, `c_r`: 左右声速
    fn solve(
        &self,
        rho_l: f64,
        rho_r: f64,
        vn_l: f64,
        vn_r: f64,
        p_l: f64,
        p_r: f64,
        c_l: f64,
        c_r: f64,
    ) -> RiemannStarState;
}
