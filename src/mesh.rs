// src/mesh.rs

//! 网格视图
//!
//! 通量核心不负责网格生成与连接关系构建，本模块只提供
//! 外部网格数据的只读视图 `FvMesh`，并在构建时一次性校验
//! 逐面循环依赖的全部不变量：
//!
//! - 每个半边 (Side) 恰有一个镜像半边，`connection[connection[i]] == i`（对合）
//! - 半边不自配对，且镜像半边属于不同单元
//! - 法向量为单位向量，面长为正
//!
//! 对合不变量保证主半边循环中任意两次迭代写入的累加器互不重叠，
//! 循环体内部不再做防御性检查。

use glam::DVec2;
use thiserror::Error;

/// 法向量单位长度容差
const UNIT_NORMAL_TOL: f64 = 1e-12;

// ============================================================
// 输入描述
// ============================================================

/// 半边描述（网格构建阶段的输入）
///
/// 每个半边持有其所属单元的外法向，镜像半边各自持有
/// 相对于自己单元的外法向，二者不要求互为相反向量。
#[derive(Debug, Clone, Copy)]
pub struct SideSpec {
    /// 所属单元
    pub owner: usize,
    /// 镜像半边索引
    pub connection: usize,
    /// 所属单元的外法向（单位向量）
    pub normal: DVec2,
    /// 面长 [m]
    pub length: f64,
}

/// 单元描述
#[derive(Debug, Clone)]
pub struct CellSpec {
    /// 单元形心
    pub center: DVec2,
    /// 源项积分点
    pub quad_points: Vec<DVec2>,
    /// 源项积分权重
    pub quad_weights: Vec<f64>,
}

impl CellSpec {
    /// 单点（形心）积分规则
    pub fn midpoint(center: DVec2, area: f64) -> Self {
        Self {
            center,
            quad_points: vec![center],
            quad_weights: vec![area],
        }
    }
}

// ============================================================
// 网格错误
// ============================================================

/// 网格校验错误
#[derive(Debug, Clone, Error)]
pub enum MeshError {
    /// 镜像索引越界
    #[error("半边 {side} 的镜像索引 {connection} 越界（共 {n_sides} 个半边）")]
    ConnectionOutOfRange {
        side: usize,
        connection: usize,
        n_sides: usize,
    },
    /// 半边自配对
    #[error("半边 {side} 与自身配对")]
    SelfConnection { side: usize },
    /// 对合关系破坏
    #[error("半边配对非对合: connection[connection[{side}]] == {other}，应为 {side}")]
    BrokenInvolution { side: usize, other: usize },
    /// 镜像半边与本半边属于同一单元
    #[error("半边 {side} 与其镜像属于同一单元 {owner}")]
    SharedOwner { side: usize, owner: usize },
    /// 所属单元索引越界
    #[error("半边 {side} 的所属单元 {owner} 越界（共 {n_cells} 个单元）")]
    OwnerOutOfRange {
        side: usize,
        owner: usize,
        n_cells: usize,
    },
    /// 法向量非单位长度
    #[error("半边 {side} 的法向量模长 {length} 偏离 1")]
    NonUnitNormal { side: usize, length: f64 },
    /// 面长非正
    #[error("半边 {side} 的面长 {length} 非正")]
    NonPositiveLength { side: usize, length: f64 },
    /// 积分点与权重数量不一致
    #[error("单元 {cell} 的积分点数 {points} 与权重数 {weights} 不一致")]
    QuadratureMismatch {
        cell: usize,
        points: usize,
        weights: usize,
    },
}

// ============================================================
// 网格视图
// ============================================================

/// 有限体积网格视图（SoA 布局）
///
/// 拓扑在整个模拟期间固定；构建成功即代表逐面循环的
/// 写入不相交不变量成立。
#[derive(Debug, Clone)]
pub struct FvMesh {
    n_cells: usize,
    side_owner: Vec<usize>,
    side_connection: Vec<usize>,
    side_normal: Vec<DVec2>,
    side_length: Vec<f64>,
    /// 主半边列表：每个物理面取 index < connection 的一侧
    primary_sides: Vec<usize>,
    /// 本单元形心指向镜像单元形心的单位向量（逐半边）
    bary_unit: Vec<DVec2>,
    /// 形心间距（逐半边）
    bary_dist: Vec<f64>,
    cell_center: Vec<DVec2>,
    cell_quad_points: Vec<Vec<DVec2>>,
    cell_quad_weights: Vec<Vec<f64>>,
}

impl FvMesh {
    /// 从外部网格数据构建视图并校验不变量
    pub fn new(sides: &[SideSpec], cells: &[CellSpec]) -> Result<Self, MeshError> {
        let n_sides = sides.len();
        let n_cells = cells.len();

        for (i, side) in sides.iter().enumerate() {
            if side.owner >= n_cells {
                return Err(MeshError::OwnerOutOfRange {
                    side: i,
                    owner: side.owner,
                    n_cells,
                });
            }
            if side.connection >= n_sides {
                return Err(MeshError::ConnectionOutOfRange {
                    side: i,
                    connection: side.connection,
                    n_sides,
                });
            }
            if side.connection == i {
                return Err(MeshError::SelfConnection { side: i });
            }
            let mirror = sides[side.connection].connection;
            if mirror != i {
                return Err(MeshError::BrokenInvolution {
                    side: i,
                    other: mirror,
                });
            }
            if sides[side.connection].owner == side.owner {
                return Err(MeshError::SharedOwner {
                    side: i,
                    owner: side.owner,
                });
            }
            let normal_len = side.normal.length();
            if (normal_len - 1.0).abs() > UNIT_NORMAL_TOL {
                return Err(MeshError::NonUnitNormal {
                    side: i,
                    length: normal_len,
                });
            }
            if !(side.length > 0.0) {
                return Err(MeshError::NonPositiveLength {
                    side: i,
                    length: side.length,
                });
            }
        }

        for (i, cell) in cells.iter().enumerate() {
            if cell.quad_points.len() != cell.quad_weights.len() {
                return Err(MeshError::QuadratureMismatch {
                    cell: i,
                    points: cell.quad_points.len(),
                    weights: cell.quad_weights.len(),
                });
            }
        }

        // 对合成立后，i < connection[i] 恰好每个物理面取到一次
        let primary_sides: Vec<usize> = (0..n_sides).filter(|&i| i < sides[i].connection).collect();

        let mut bary_unit = Vec::with_capacity(n_sides);
        let mut bary_dist = Vec::with_capacity(n_sides);
        for side in sides {
            let neighbor = sides[side.connection].owner;
            let delta = cells[neighbor].center - cells[side.owner].center;
            let dist = delta.length();
            bary_dist.push(dist);
            bary_unit.push(if dist > 0.0 { delta / dist } else { DVec2::ZERO });
        }

        Ok(Self {
            n_cells,
            side_owner: sides.iter().map(|s| s.owner).collect(),
            side_connection: sides.iter().map(|s| s.connection).collect(),
            side_normal: sides.iter().map(|s| s.normal).collect(),
            side_length: sides.iter().map(|s| s.length).collect(),
            primary_sides,
            bary_unit,
            bary_dist,
            cell_center: cells.iter().map(|c| c.center).collect(),
            cell_quad_points: cells.iter().map(|c| c.quad_points.clone()).collect(),
            cell_quad_weights: cells.iter().map(|c| c.quad_weights.clone()).collect(),
        })
    }

    /// 单元数量
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.n_cells
    }

    /// 半边数量
    #[inline]
    pub fn n_sides(&self) -> usize {
        self.side_owner.len()
    }

    /// 物理面数量
    #[inline]
    pub fn n_faces(&self) -> usize {
        self.primary_sides.len()
    }

    /// 主半边列表（每个物理面恰好一次）
    #[inline]
    pub fn primary_sides(&self) -> &[usize] {
        &self.primary_sides
    }

    /// 半边所属单元
    #[inline]
    pub fn side_owner(&self, side: usize) -> usize {
        self.side_owner[side]
    }

    /// 镜像半边索引
    #[inline]
    pub fn side_connection(&self, side: usize) -> usize {
        self.side_connection[side]
    }

    /// 半边外法向（单位向量）
    #[inline]
    pub fn side_normal(&self, side: usize) -> DVec2 {
        self.side_normal[side]
    }

    /// 面长
    #[inline]
    pub fn side_length(&self, side: usize) -> f64 {
        self.side_length[side]
    }

    /// 形心连线单位向量（指向镜像单元）
    #[inline]
    pub fn bary_unit(&self, side: usize) -> DVec2 {
        self.bary_unit[side]
    }

    /// 形心间距
    #[inline]
    pub fn bary_dist(&self, side: usize) -> f64 {
        self.bary_dist[side]
    }

    /// 单元形心
    #[inline]
    pub fn cell_center(&self, cell: usize) -> DVec2 {
        self.cell_center[cell]
    }

    /// 单元积分点
    #[inline]
    pub fn cell_quad_points(&self, cell: usize) -> &[DVec2] {
        &self.cell_quad_points[cell]
    }

    /// 单元积分权重
    #[inline]
    pub fn cell_quad_weights(&self, cell: usize) -> &[f64] {
        &self.cell_quad_weights[cell]
    }

    /// 单元编号区间
    pub fn cells(&self) -> std::ops::Range<usize> {
        0..self.n_cells
    }
}
