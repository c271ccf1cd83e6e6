// tests/common/mod.rs

//! 集成测试公共设施：精确黎曼求解器与网格构造

#![allow(dead_code)]

use glam::DVec2;

use aeroflux::{CellSpec, ExactRiemannSolver, FvMesh, RiemannStarState, SideSpec};

/// Newton 迭代精确黎曼求解器（Toro 第 4 章）
///
/// 压强初值取 PVRS 近似，牛顿迭代至相对增量 1e-12，
/// 随后在 ξ=0 处采样（含稀疏波内部）。
pub struct ToroExactSolver {
    pub gamma: f64,
}

impl ToroExactSolver {
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }

    /// 单侧压强函数 f_K(p) 及其导数
    fn pressure_fn(&self, p: f64, rho_k: f64, p_k: f64, c_k: f64) -> (f64, f64) {
        let gam = self.gamma;
        if p > p_k {
            // 激波分支
            let a_k = 2.0 / ((gam + 1.0) * rho_k);
            let b_k = (gam - 1.0) / (gam + 1.0) * p_k;
            let sqrt_term = (a_k / (p + b_k)).sqrt();
            let f = (p - p_k) * sqrt_term;
            let df = sqrt_term * (1.0 - 0.5 * (p - p_k) / (p + b_k));
            (f, df)
        } else {
            // 稀疏波分支
            let exponent = 0.5 * (gam - 1.0) / gam;
            let ratio = (p / p_k).powf(exponent);
            let f = 2.0 * c_k / (gam - 1.0) * (ratio - 1.0);
            let df = 1.0 / (rho_k * c_k) * (p / p_k).powf(-0.5 * (gam + 1.0) / gam);
            (f, df)
        }
    }

    /// 求星区压强与速度
    fn star_region(
        &self,
        rho_l: f64,
        rho_r: f64,
        u_l: f64,
        u_r: f64,
        p_l: f64,
        p_r: f64,
        c_l: f64,
        c_r: f64,
    ) -> (f64, f64) {
        let du = u_r - u_l;
        // PVRS 初值
        let p_pv = 0.5 * (p_l + p_r) - 0.125 * du * (rho_l + rho_r) * (c_l + c_r);
        let mut p = p_pv.max(1e-8 * (p_l + p_r));

        for _ in 0..50 {
            let (f_l, df_l) = self.pressure_fn(p, rho_l, p_l, c_l);
            let (f_r, df_r) = self.pressure_fn(p, rho_r, p_r, c_r);
            let f = f_l + f_r + du;
            let step = f / (df_l + df_r);
            let p_new = (p - step).max(1e-10 * p);
            let change = 2.0 * (p_new - p).abs() / (p_new + p);
            p = p_new;
            if change < 1e-14 {
                break;
            }
        }

        let (f_l, _) = self.pressure_fn(p, rho_l, p_l, c_l);
        let (f_r, _) = self.pressure_fn(p, rho_r, p_r, c_r);
        let u = 0.5 * (u_l + u_r) + 0.5 * (f_r - f_l);
        (p, u)
    }
}

impl ExactRiemannSolver for ToroExactSolver {
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
    ) -> RiemannStarState {
        let gam = self.gamma;
        let g1 = (gam - 1.0) / (gam + 1.0);
        let (p_star, u_star) = self.star_region(rho_l, rho_r, vn_l, vn_r, p_l, p_r, c_l, c_r);

        if u_star >= 0.0 {
            // 界面位于接触波左侧
            if p_star > p_l {
                // 左激波
                let shock_speed = vn_l
                    - c_l
                        * (0.5 * (gam + 1.0) / gam * p_star / p_l + 0.5 * (gam - 1.0) / gam)
                            .sqrt();
                if shock_speed >= 0.0 {
                    RiemannStarState {
                        rho: rho_l,
                        vn: vn_l,
                        p: p_l,
                    }
                } else {
                    let rho = rho_l * (p_star / p_l + g1) / (g1 * p_star / p_l + 1.0);
                    RiemannStarState {
                        rho,
                        vn: u_star,
                        p: p_star,
                    }
                }
            } else {
                // 左稀疏波
                let head = vn_l - c_l;
                let c_star = c_l * (p_star / p_l).powf(0.5 * (gam - 1.0) / gam);
                let tail = u_star - c_star;
                if head >= 0.0 {
                    RiemannStarState {
                        rho: rho_l,
                        vn: vn_l,
                        p: p_l,
                    }
                } else if tail <= 0.0 {
                    RiemannStarState {
                        rho: rho_l * (p_star / p_l).powf(1.0 / gam),
                        vn: u_star,
                        p: p_star,
                    }
                } else {
                    // 波扇内部，ξ=0
                    let c = 2.0 / (gam + 1.0) * (c_l + 0.5 * (gam - 1.0) * vn_l);
                    RiemannStarState {
                        rho: rho_l * (c / c_l).powf(2.0 / (gam - 1.0)),
                        vn: c,
                        p: p_l * (c / c_l).powf(2.0 * gam / (gam - 1.0)),
                    }
                }
            }
        } else {
            // 界面位于接触波右侧
            if p_star > p_r {
                // 右激波
                let shock_speed = vn_r
                    + c_r
                        * (0.5 * (gam + 1.0) / gam * p_star / p_r + 0.5 * (gam - 1.0) / gam)
                            .sqrt();
                if shock_speed <= 0.0 {
                    RiemannStarState {
                        rho: rho_r,
                        vn: vn_r,
                        p: p_r,
                    }
                } else {
                    let rho = rho_r * (p_star / p_r + g1) / (g1 * p_star / p_r + 1.0);
                    RiemannStarState {
                        rho,
                        vn: u_star,
                        p: p_star,
                    }
                }
            } else {
                // 右稀疏波
                let head = vn_r + c_r;
                let c_star = c_r * (p_star / p_r).powf(0.5 * (gam - 1.0) / gam);
                let tail = u_star + c_star;
                if head <= 0.0 {
                    RiemannStarState {
                        rho: rho_r,
                        vn: vn_r,
                        p: p_r,
                    }
                } else if tail >= 0.0 {
                    RiemannStarState {
                        rho: rho_r * (p_star / p_r).powf(1.0 / gam),
                        vn: u_star,
                        p: p_star,
                    }
                } else {
                    let c = 2.0 / (gam + 1.0) * (c_r - 0.5 * (gam - 1.0) * vn_r);
                    RiemannStarState {
                        rho: rho_r * (c / c_r).powf(2.0 / (gam - 1.0)),
                        vn: -c,
                        p: p_r * (c / c_r).powf(2.0 * gam / (gam - 1.0)),
                    }
                }
            }
        }
    }
}

/// 两单元一面网格，面法向可指定
pub fn two_cell_mesh(normal: DVec2) -> FvMesh {
    let sides = vec![
        SideSpec {
            owner: 0,
            connection: 1,
            normal,
            length: 1.0,
        },
        SideSpec {
            owner: 1,
            connection: 0,
            normal: -normal,
            length: 1.0,
        },
    ];
    let cells = vec![
        CellSpec::midpoint(DVec2::ZERO, 1.0),
        CellSpec::midpoint(normal, 1.0),
    ];
    match FvMesh::new(&sides, &cells) {
        Ok(mesh) => mesh,
        Err(e) => panic!("mesh: {e}"),
    }
}

/// 2×2 单元环带网格：4 个单元、8 个半边、4 个内部面
///
/// 单元按行排列 (0 1 / 2 3)，水平相邻与竖直相邻各 2 对。
pub fn four_cell_mesh() -> FvMesh {
    // 面 0: 0-1 (x 法向), 面 1: 2-3 (x 法向),
    // 面 2: 0-2 (y 法向), 面 3: 1-3 (y 法向)
    let pairs = [
        (0usize, 1usize, DVec2::X),
        (2, 3, DVec2::X),
        (0, 2, DVec2::Y),
        (1, 3, DVec2::Y),
    ];
    let mut sides = Vec::new();
    for (owner, neighbor, normal) in pairs {
        let i = sides.len();
        sides.push(SideSpec {
            owner,
            connection: i + 1,
            normal,
            length: 1.0,
        });
        sides.push(SideSpec {
            owner: neighbor,
            connection: i,
            normal: -normal,
            length: 1.0,
        });
    }
    let cells = vec![
        CellSpec::midpoint(DVec2::new(0.0, 0.0), 1.0),
        CellSpec::midpoint(DVec2::new(1.0, 0.0), 1.0),
        CellSpec::midpoint(DVec2::new(0.0, 1.0), 1.0),
        CellSpec::midpoint(DVec2::new(1.0, 1.0), 1.0),
    ];
    match FvMesh::new(&sides, &cells) {
        Ok(mesh) => mesh,
        Err(e) => panic!("mesh: {e}"),
    }
}
