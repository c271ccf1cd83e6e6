// tests/source_quadrature.rs

//! 源项求积：权重线性性、多点求积与覆盖语义

use std::sync::Arc;

use glam::DVec2;

use aeroflux::{
    CellSpec, FvMesh, GasConstants, GoverningEquations, ManufacturedSource, SideSpec,
    SourceContribution, SourceEvaluator, SourceTerm,
};

/// 两单元网格，单元 1 使用三点求积规则
fn quad_mesh() -> FvMesh {
    let sides = vec![
        SideSpec {
            owner: 0,
            connection: 1,
            normal: DVec2::X,
            length: 1.0,
        },
        SideSpec {
            owner: 1,
            connection: 0,
            normal: -DVec2::X,
            length: 1.0,
        },
    ];
    let cells = vec![
        CellSpec::midpoint(DVec2::new(0.1, 0.2), 2.0),
        CellSpec {
            center: DVec2::new(1.0, 0.0),
            quad_points: vec![
                DVec2::new(0.8, -0.1),
                DVec2::new(1.0, 0.0),
                DVec2::new(1.2, 0.1),
            ],
            quad_weights: vec![0.25, 0.5, 0.25],
        },
    ];
    match FvMesh::new(&sides, &cells) {
        Ok(mesh) => mesh,
        Err(e) => panic!("mesh: {e}"),
    }
}

#[test]
fn multi_point_quadrature_matches_manual_sum() {
    let mesh = quad_mesh();
    let term = ManufacturedSource::new(GasConstants::air(), GoverningEquations::Euler);
    let eval = SourceEvaluator::new(Arc::new(term.clone()));

    let time = 0.42;
    let mut out = vec![SourceContribution::ZERO; 2];
    eval.accumulate(&mesh, time, &mut out);

    let mut expected = SourceContribution::ZERO;
    for (point, weight) in mesh.cell_quad_points(1).iter().zip(mesh.cell_quad_weights(1)) {
        expected.add_weighted(&term.evaluate(*point, time), *weight);
    }
    assert_eq!(out[1].mass.to_bits(), expected.mass.to_bits());
    assert_eq!(out[1].momentum_x.to_bits(), expected.momentum_x.to_bits());
    assert_eq!(out[1].energy.to_bits(), expected.energy.to_bits());
}

#[test]
fn repeated_accumulation_bit_identical() {
    let mesh = quad_mesh();
    let eval = SourceEvaluator::new(Arc::new(ManufacturedSource::new(
        GasConstants::air(),
        GoverningEquations::NavierStokes,
    )));

    let mut a = vec![SourceContribution::ZERO; 2];
    let mut b = vec![
        SourceContribution {
            mass: -5.0,
            momentum_x: 7.0,
            momentum_y: -11.0,
            energy: 13.0,
        };
        2
    ];
    eval.accumulate(&mesh, 1.23, &mut a);
    eval.accumulate(&mesh, 1.23, &mut b);

    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.mass.to_bits(), y.mass.to_bits());
        assert_eq!(x.momentum_x.to_bits(), y.momentum_x.to_bits());
        assert_eq!(x.momentum_y.to_bits(), y.momentum_y.to_bits());
        assert_eq!(x.energy.to_bits(), y.energy.to_bits());
    }
}

#[test]
fn quadrature_scales_linearly_with_cell_area() {
    // 单点规则：源项贡献与积分权重（单元面积）成正比
    let term = ManufacturedSource::new(GasConstants::air(), GoverningEquations::Euler);
    let center = DVec2::new(0.1, 0.2);
    let point = term.evaluate(center, 0.9);

    let mesh = quad_mesh();
    let eval = SourceEvaluator::new(Arc::new(term));
    let mut out = vec![SourceContribution::ZERO; 2];
    eval.accumulate(&mesh, 0.9, &mut out);
    // 单元 0 面积 2.0
    assert!((out[0].mass - 2.0 * point.mass).abs() < 1e-15 * (1.0 + point.mass.abs()));
    assert!((out[0].energy - 2.0 * point.energy).abs() < 1e-14 * (1.0 + point.energy.abs()));
}
