use cabinetkit_core::{Block, BlockKind, CabinetConfig, Point3, TechView, Vector3, ViewMode};
use cabinetkit_designer::layout::stack_blocks;
use cabinetkit_designer::openings::generate;
use cabinetkit_designer::{Hinge, Motion, OpeningKind, Openings, PanelRole, PanelShape};

fn openings_for(config: &CabinetConfig, view: ViewMode) -> Openings {
    let bounds = stack_blocks(config);
    let mut all = Openings::default();
    for (block, b) in config.blocks.iter().zip(&bounds) {
        let o = generate(config, block, b, view);
        all.panels.extend(o.panels);
        all.poses.extend(o.poses);
        all.arcs.extend(o.arcs);
    }
    all
}

fn single(kind: BlockKind, rows: u32, cols: u32) -> CabinetConfig {
    CabinetConfig {
        blocks: vec![Block::new("b", 900.0, rows, cols, kind)],
        ..CabinetConfig::default()
    }
}

#[test]
fn test_doors_alternate_hinges() {
    let config = CabinetConfig::default();
    let o = openings_for(&config, ViewMode::Perspective);

    assert_eq!(o.poses.len(), 2);
    let left = &o.poses[0];
    assert_eq!(left.element_id, "door-block-1-0-0");
    assert_eq!(left.kind, OpeningKind::Door);
    assert_eq!(left.hinge, Some(Hinge::Left));
    assert_eq!(left.pivot, Point3::new(-600.0, 0.0, 309.0));
    assert_eq!(left.open, -90.0);
    assert_eq!(left.closed, 0.0);
    assert!(left.is_open);
    assert_eq!(left.motion, Motion::Rotation { axis: Vector3::y() });

    let right = &o.poses[1];
    assert_eq!(right.hinge, Some(Hinge::Right));
    assert_eq!(right.pivot.x, 600.0);
    assert_eq!(right.open, 90.0);
}

#[test]
fn test_door_leaf_and_knob() {
    let config = CabinetConfig::default();
    let o = openings_for(&config, ViewMode::Perspective);

    let doors: Vec<_> = o.panels.iter().filter(|p| p.role == PanelRole::Door).collect();
    assert_eq!(doors.len(), 2);
    assert_eq!(doors[0].center, Point3::new(-300.0, 0.0, 309.0));
    assert_eq!(doors[0].size, Vector3::new(598.0, 898.0, 18.0));
    assert_eq!(doors[0].element_id.as_deref(), Some("door-block-1-0-0"));

    let knobs: Vec<_> = o.panels.iter().filter(|p| p.role == PanelRole::Knob).collect();
    assert_eq!(knobs.len(), 2);
    // left-hinged leaf: knob near its right edge
    assert_eq!(knobs[0].center.x, -300.0 + 299.0 - 30.0);
    assert_eq!(knobs[0].center.z, 309.0 + 9.0 + 8.0);
    assert_eq!(knobs[1].center.x, 300.0 - 299.0 + 30.0);
    assert_eq!(knobs[0].shape, PanelShape::Sphere { radius: 8.0 });
}

#[test]
fn test_door_arcs_only_in_plan() {
    let config = CabinetConfig::default();
    assert!(openings_for(&config, ViewMode::Perspective).arcs.is_empty());
    assert!(openings_for(&config, ViewMode::Elevation).arcs.is_empty());

    let plan = openings_for(&config, ViewMode::Plan);
    assert_eq!(plan.arcs.len(), 2);
    assert!(plan.arcs.iter().all(|a| a.view == TechView::Plan));
    // plan view shows no knobs
    assert!(plan.panels.iter().all(|p| p.role != PanelRole::Knob));
}

#[test]
fn test_closed_doors_have_no_arcs() {
    let config = single(
        BlockKind::Doors {
            open: false,
            shelves: 0,
        },
        1,
        2,
    );
    let plan = openings_for(&config, ViewMode::Plan);
    assert!(plan.arcs.is_empty());
    assert!(plan.poses.iter().all(|p| p.target() == 0.0));
}

#[test]
fn test_section_omits_doors() {
    let config = CabinetConfig::default();
    let o = openings_for(&config, ViewMode::Section);
    assert!(o.panels.is_empty());
    assert!(o.poses.is_empty());
}

#[test]
fn test_open_drawers_pull_out_bottom_row_only() {
    let config = single(BlockKind::Drawers { open: true }, 3, 1);
    let o = openings_for(&config, ViewMode::Perspective);

    assert_eq!(o.poses.len(), 3);
    for pose in &o.poses {
        assert_eq!(pose.kind, OpeningKind::Drawer);
        assert!((pose.open - 400.0).abs() < 1e-9);
        assert_eq!(
            pose.motion,
            Motion::Translation {
                direction: Vector3::z()
            }
        );
    }
    assert!(o.poses[0].is_open);
    assert!(!o.poses[1].is_open);
    assert!(!o.poses[2].is_open);
    assert!((o.poses[0].target() - 400.0).abs() < 1e-9);

    let boxes: Vec<_> = o.panels.iter().filter(|p| p.role == PanelRole::DrawerBox).collect();
    assert_eq!(boxes.len(), 4);
    assert!(boxes
        .iter()
        .all(|p| p.element_id.as_deref() == Some("drawer-b-0-0")));
    // box bottom spans the inner width
    assert_eq!(boxes[0].size, Vector3::new(1198.0 - 36.0, 18.0, 564.0));
}

#[test]
fn test_drawer_faces_and_handles() {
    let config = single(BlockKind::Drawers { open: false }, 2, 2);
    let o = openings_for(&config, ViewMode::Elevation);

    let faces: Vec<_> = o
        .panels
        .iter()
        .filter(|p| p.role == PanelRole::DrawerFace)
        .collect();
    assert_eq!(faces.len(), 4);
    assert_eq!(faces[0].size, Vector3::new(598.0, 448.0, 18.0));
    assert_eq!(faces[0].center, Point3::new(-300.0, -225.0, 309.0));

    // 598 wide faces carry a single centered handle
    let handles: Vec<_> = o
        .panels
        .iter()
        .filter(|p| p.role == PanelRole::DrawerHandle)
        .collect();
    assert_eq!(handles.len(), 4);
    assert_eq!(handles[0].center.x, -300.0);
}

#[test]
fn test_wide_drawers_get_two_handles() {
    let config = single(BlockKind::Drawers { open: false }, 1, 1);
    let o = openings_for(&config, ViewMode::Perspective);
    let xs: Vec<f64> = o
        .panels
        .iter()
        .filter(|p| p.role == PanelRole::DrawerHandle)
        .map(|p| p.center.x)
        .collect();
    let inset = 1198.0 / 2.0 - 1198.0 / 5.0;
    assert_eq!(xs, vec![-inset, inset]);
}

#[test]
fn test_drawers_stay_closed_in_technical_views() {
    let config = single(BlockKind::Drawers { open: true }, 2, 1);
    let o = openings_for(&config, ViewMode::Elevation);
    assert!(o.poses.iter().all(|p| !p.is_open));
    assert!(o.panels.iter().all(|p| p.role != PanelRole::DrawerBox));
}

#[test]
fn test_section_drawer_profiles_use_first_column() {
    let config = single(BlockKind::Drawers { open: true }, 3, 2);
    let o = openings_for(&config, ViewMode::Section);

    let profiles: Vec<_> = o
        .panels
        .iter()
        .filter(|p| p.role == PanelRole::DrawerProfile)
        .collect();
    assert_eq!(profiles.len(), 3);
    assert!(profiles.iter().all(|p| p.shape == PanelShape::Outline));
    assert_eq!(profiles[0].center, Point3::new(0.0, -300.0, 0.0));
    assert_eq!(profiles[0].size.y, 298.0);
    assert_eq!(profiles[0].size.z, 564.0);
    assert!(o.poses.is_empty());
}

#[test]
fn test_trunk_lid_pose_and_arc() {
    let config = CabinetConfig {
        depth: 500.0,
        blocks: vec![Block::new(
            "chest",
            600.0,
            1,
            1,
            BlockKind::Trunk {
                lid_height: 100.0,
                lid_open: true,
            },
        )],
        ..CabinetConfig::default()
    };

    let persp = openings_for(&config, ViewMode::Perspective);
    assert_eq!(persp.poses.len(), 1);
    let lid = &persp.poses[0];
    assert_eq!(lid.element_id, "lid-chest");
    assert_eq!(lid.kind, OpeningKind::Lid);
    assert_eq!(lid.pivot, Point3::new(0.0, 200.0, -250.0));
    assert_eq!(lid.open, -90.0);
    assert_eq!(lid.motion, Motion::Rotation { axis: Vector3::x() });
    assert!(persp.arcs.is_empty());

    let section = openings_for(&config, ViewMode::Section);
    assert_eq!(section.arcs.len(), 1);
    let arc = &section.arcs[0];
    assert_eq!(arc.radius, 500.0);
    assert_eq!(arc.view, TechView::Section);
    assert_eq!(arc.end, Point3::new(0.0, 700.0, -250.0));
}

#[test]
fn test_open_lid_stands_upright() {
    let config = single(
        BlockKind::Trunk {
            lid_height: 60.0,
            lid_open: true,
        },
        1,
        1,
    );
    let o = openings_for(&config, ViewMode::Perspective);
    let pose = &o.poses[0];
    // the front edge of the closed lid ends up straight above the hinge
    let front_edge = pose.pivot + Vector3::new(0.0, 0.0, 600.0);
    let moved = pose.settled_transform() * front_edge;
    assert!((moved.y - (pose.pivot.y + 600.0)).abs() < 1e-9);
    assert!((moved.z - pose.pivot.z).abs() < 1e-9);
}
