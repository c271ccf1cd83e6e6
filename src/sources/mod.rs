// src/sources/mod.rs

//! 源项模块
//!
//! - [`SourceTerm`]: 时间与空间的纯函数源项接口
//! - [`ManufacturedSource`]: 人工解验证源项
//! - [`SourceEvaluator`]: 对单元积分规则做求积并逐单元写入

mod manufactured;
mod traits;

pub use manufactured::ManufacturedSource;
pub use traits::{SourceContribution, SourceTerm};

use rayon::prelude::*;

use crate::mesh::FvMesh;

use std::sync::Arc;

/// 源项求积器
///
/// 对每个单元按其积分规则（积分点 × 权重）对源项求积。
/// 写入为覆盖语义：每次调用完全重写输出，重复调用同一时刻
/// 得到逐位相同的结果。
pub struct SourceEvaluator {
    term: Arc<dyn SourceTerm>,
}

impl SourceEvaluator {
    /// 创建求积器
    pub fn new(term: Arc<dyn SourceTerm>) -> Self {
        log::debug!("创建源项求积器: {}", term.name());
        Self { term }
    }

    /// 源项名称
    pub fn term_name(&self) -> &'static str {
        self.term.name()
    }

    /// 对全部单元求积并覆盖写入
    ///
    /// # Panics
    /// `cell_source` 长度与网格单元数不一致时 panic（上游分配错误）。
    pub fn accumulate(&self, mesh: &FvMesh, time: f64, cell_source: &mut [SourceContribution]) {
        assert_eq!(cell_source.len(), mesh.n_cells());
        cell_source
            .par_iter_mut()
            .enumerate()
            .for_each(|(cell, out)| {
                let mut acc = SourceContribution::ZERO;
                let points = mesh.cell_quad_points(cell);
                let weights = mesh.cell_quad_weights(cell);
                for (point, weight) in points.iter().zip(weights) {
                    let value = self.term.evaluate(*point, time);
                    acc.add_weighted(&value, *weight);
                }
                *out = acc;
            });
    }
}
