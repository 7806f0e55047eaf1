use cabinetkit_core::{Block, BlockKind, CabinetConfig, ViewMode};
use cabinetkit_designer::layout::{compile, feet, shelf_positions, stack_blocks};
use cabinetkit_designer::{PanelRole, PanelShape};

fn shelves(id: &str, height: f64, n: u32) -> Block {
    Block::new(id, height, 1, 1, BlockKind::Shelves { shelves: n })
}

fn trunk(id: &str, height: f64, lid: f64) -> Block {
    Block::new(
        id,
        height,
        1,
        1,
        BlockKind::Trunk {
            lid_height: lid,
            lid_open: false,
        },
    )
}

#[test]
fn test_plain_block_panels() {
    let config = CabinetConfig {
        blocks: vec![shelves("a", 900.0, 0)],
        ..CabinetConfig::default()
    };
    let layout = compile(&config, ViewMode::Perspective).unwrap();
    let roles: Vec<PanelRole> = layout.panels.iter().map(|p| p.role).collect();
    assert_eq!(
        roles,
        vec![
            PanelRole::Side,
            PanelRole::Side,
            PanelRole::Top,
            PanelRole::Bottom,
            PanelRole::Back
        ]
    );

    let top = &layout.panels[2];
    assert_eq!(top.center.y, 441.0);
    assert_eq!(top.size.x, 1200.0 - 36.0);
    assert_eq!(top.size.z, 600.0);

    let back = &layout.panels[4];
    assert_eq!(back.center.z, -291.0);
    assert_eq!(back.size.x, 1200.0);
    assert_eq!(back.size.y, 900.0);
}

#[test]
fn test_shelves_are_placed_in_the_cabinet_frame() {
    let config = CabinetConfig {
        blocks: vec![shelves("low", 400.0, 0), shelves("high", 900.0, 2)],
        ..CabinetConfig::default()
    };
    let layout = compile(&config, ViewMode::Perspective).unwrap();
    let ys: Vec<f64> = layout
        .panels
        .iter()
        .filter(|p| p.role == PanelRole::Shelf)
        .map(|p| p.center.y)
        .collect();
    // high block center sits at 200
    assert_eq!(ys, vec![200.0 - 147.0, 200.0 + 147.0]);

    let shelf = layout
        .panels
        .iter()
        .find(|p| p.role == PanelRole::Shelf)
        .unwrap();
    assert_eq!(shelf.size.z, 580.0);
    assert_eq!(shelf.block_id.as_deref(), Some("high"));
}

#[test]
fn test_drawer_blocks_have_no_shelves() {
    let config = CabinetConfig {
        blocks: vec![Block::new("d", 600.0, 3, 1, BlockKind::Drawers { open: false })],
        ..CabinetConfig::default()
    };
    let layout = compile(&config, ViewMode::Perspective).unwrap();
    assert!(layout.panels.iter().all(|p| p.role != PanelRole::Shelf));
}

#[test]
fn test_trunk_panels() {
    let config = CabinetConfig {
        blocks: vec![trunk("t", 500.0, 100.0)],
        ..CabinetConfig::default()
    };
    let layout = compile(&config, ViewMode::Perspective).unwrap();
    let roles: Vec<PanelRole> = layout.panels.iter().map(|p| p.role).collect();
    assert_eq!(
        roles,
        vec![
            PanelRole::Bottom,
            PanelRole::Side,
            PanelRole::Side,
            PanelRole::Front,
            PanelRole::Back,
            PanelRole::Lid
        ]
    );

    // body 400 at the bottom of a block spanning [-250, 250]
    let side = &layout.panels[1];
    assert_eq!(side.size.y, 400.0);
    assert_eq!(side.center.y, -50.0);

    let lid = &layout.panels[5];
    assert_eq!(lid.center.y, 200.0);
    assert_eq!(lid.size.y, 100.0);
    assert_eq!(lid.size.z, 600.0);
    assert_eq!(lid.element_id.as_deref(), Some("lid-t"));
}

#[test]
fn test_trunk_without_lid_emits_no_lid_panel() {
    let config = CabinetConfig {
        blocks: vec![trunk("t", 500.0, 0.0)],
        ..CabinetConfig::default()
    };
    let layout = compile(&config, ViewMode::Section).unwrap();
    assert!(layout.panels.iter().all(|p| p.role != PanelRole::Lid));
    assert_eq!(
        layout
            .panels
            .iter()
            .filter(|p| p.role == PanelRole::Side)
            .count(),
        1
    );
}

#[test]
fn test_skirting_under_the_stack() {
    let config = CabinetConfig {
        floor_height: 100.0,
        show_skirting: true,
        recess_distance: 50.0,
        blocks: vec![shelves("a", 900.0, 0)],
        ..CabinetConfig::default()
    };
    let layout = compile(&config, ViewMode::Perspective).unwrap();
    let skirting = layout
        .panels
        .iter()
        .find(|p| p.role == PanelRole::Skirting)
        .unwrap();
    assert_eq!(skirting.center.y, -500.0);
    assert_eq!(skirting.center.z, 25.0);
    assert_eq!(skirting.size.y, 100.0);
    assert_eq!(skirting.size.z, 550.0);
    assert_eq!(skirting.size.x, 1200.0);
}

#[test]
fn test_no_skirting_or_feet_without_a_plinth() {
    let config = CabinetConfig {
        floor_height: 0.0,
        show_skirting: true,
        show_feet: true,
        ..CabinetConfig::default()
    };
    let layout = compile(&config, ViewMode::Perspective).unwrap();
    assert!(layout.feet.is_empty());
    assert!(layout.panels.iter().all(|p| p.role != PanelRole::Skirting));
}

#[test]
fn test_feet_are_cylinders_sitting_on_the_floor() {
    let config = CabinetConfig {
        floor_height: 120.0,
        show_feet: true,
        blocks: vec![shelves("a", 800.0, 0)],
        ..CabinetConfig::default()
    };
    let feet = feet(&config);
    assert_eq!(feet.len(), 4);
    for foot in &feet {
        assert_eq!(foot.shape, PanelShape::Cylinder { radius: 15.0 });
        assert_eq!(foot.center.y, -460.0);
        assert_eq!(foot.size.y, 120.0);
        // bottom of the foot touches world y = 0
        assert_eq!(foot.min().y + config.world_origin_y(), 0.0);
    }
    assert_eq!(feet[0].center.z, 300.0 - 70.0);
    assert_eq!(feet[1].center.z, -300.0 + 70.0);
}

#[test]
fn test_block_bounds_are_contiguous() {
    let config = CabinetConfig {
        blocks: vec![
            shelves("a", 300.0, 0),
            shelves("b", 450.0, 0),
            shelves("c", 250.0, 0),
        ],
        ..CabinetConfig::default()
    };
    let bounds = stack_blocks(&config);
    assert_eq!(bounds[0].base_y, -500.0);
    assert_eq!(bounds[0].top_y, bounds[1].base_y);
    assert_eq!(bounds[1].top_y, bounds[2].base_y);
    assert_eq!(bounds[2].top_y, 500.0);
    assert_eq!(bounds[1].height(), 450.0);
    assert_eq!(bounds[2].index, 2);
}

#[test]
fn test_single_shelf_sits_at_center() {
    assert_eq!(shelf_positions(618.0, 1), vec![0.0]);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = CabinetConfig {
        blocks: vec![shelves("a", 10.0, 0)],
        ..CabinetConfig::default()
    };
    let err = compile(&config, ViewMode::Perspective).unwrap_err();
    assert!(err.is_degeneracy());
}
