//! Reference cabinets with hand-checked figures.

use cabinetkit_core::constants::PANEL_THICKNESS;
use cabinetkit_core::{Block, BlockKind, CabinetConfig, Point3, ViewMode};
use cabinetkit_designer::layout::shelf_positions;
use cabinetkit_designer::{CabinetCompiler, Hinge, PanelRole, PanelShape};

#[test]
fn test_two_shelves_in_a_900_block() {
    let config = CabinetConfig {
        blocks: vec![Block::new("a", 900.0, 1, 1, BlockKind::Shelves { shelves: 2 })],
        ..CabinetConfig::default()
    };
    let view = CabinetCompiler::new()
        .compile_view(&config, ViewMode::Perspective)
        .unwrap();

    let spacing = (900.0 - PANEL_THICKNESS) / 3.0;
    let first = -450.0 + PANEL_THICKNESS / 2.0;
    let expected = vec![first + spacing, first + 2.0 * spacing];
    assert_eq!(shelf_positions(900.0, 2), expected);

    let shelves: Vec<f64> = view
        .panels_with_role(PanelRole::Shelf)
        .map(|p| p.center.y)
        .collect();
    assert_eq!(shelves, vec![-147.0, 147.0]);
}

#[test]
fn test_three_feet_per_row_on_a_plinth() {
    let config = CabinetConfig {
        show_feet: true,
        floor_height: 100.0,
        recess_distance: 50.0,
        feet_per_row: 3,
        ..CabinetConfig::default()
    };
    assert_eq!(config.feet_inset(), 70.0);

    let view = CabinetCompiler::new()
        .compile_view(&config, ViewMode::Perspective)
        .unwrap();
    let feet: Vec<_> = view.panels_with_role(PanelRole::Foot).collect();
    assert_eq!(feet.len(), 6);

    let mut xs: Vec<f64> = feet.iter().map(|f| f.center.x).collect();
    xs.dedup();
    assert_eq!(xs, vec![-530.0, 0.0, 530.0]);
    assert!(feet
        .iter()
        .all(|f| matches!(f.shape, PanelShape::Cylinder { .. }) && f.center.y == -500.0));
}

#[test]
fn test_stacked_blocks_are_centered() {
    let config = CabinetConfig {
        blocks: vec![
            Block::new("low", 400.0, 1, 1, BlockKind::Shelves { shelves: 0 }),
            Block::new("high", 900.0, 1, 2, BlockKind::default()),
        ],
        ..CabinetConfig::default()
    };
    let compiled = CabinetCompiler::new().compile(&config).unwrap();
    assert_eq!(compiled.total_height, 1300.0);

    let bases: Vec<f64> = compiled.model.block_bounds.iter().map(|b| b.base_y).collect();
    assert_eq!(bases, vec![-650.0, -250.0]);
    for view in &compiled.views {
        assert_eq!(view.block_bounds, compiled.model.block_bounds);
    }
    assert_eq!(compiled.model.origin, Point3::new(0.0, 650.0, 0.0));
}

#[test]
fn test_right_hinged_door_swings_a_quarter_circle() {
    let config = CabinetConfig::default();
    let plan = CabinetCompiler::new()
        .compile_view(&config, ViewMode::Plan)
        .unwrap();

    let pose = plan.pose("door-block-1-0-1").unwrap();
    assert_eq!(pose.hinge, Some(Hinge::Right));
    assert_eq!(pose.open, 90.0);
    assert_eq!(pose.pivot, Point3::new(600.0, 0.0, 309.0));

    let arc = plan
        .arcs
        .iter()
        .find(|a| a.element_id == "door-block-1-0-1")
        .unwrap();
    assert_eq!(arc.radius, 600.0);
    assert!((arc.sweep.abs() - 90.0).abs() < 1e-9);
    // from the closed edge to the open edge
    assert_eq!(arc.start, Point3::new(0.0, 0.0, 309.0));
    assert_eq!(arc.end, Point3::new(600.0, 0.0, 909.0));
    assert!(((arc.start - arc.center).norm() - (arc.end - arc.center).norm()).abs() < 1e-9);
}
