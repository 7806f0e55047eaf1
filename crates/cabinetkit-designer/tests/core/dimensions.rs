use cabinetkit_core::{
    Block, BlockKind, CabinetConfig, DimensionTier, DrawingStyle, Point2, TechView,
};
use cabinetkit_designer::dimensions::{annotate, ground_line, run_label};
use cabinetkit_designer::layout::stack_blocks;
use cabinetkit_designer::{DimensionAxis, DimensionLine, DimensionRole};

fn dims(view: TechView, config: &CabinetConfig) -> Vec<DimensionLine> {
    annotate(view, config, &stack_blocks(config), &DrawingStyle::default())
}

fn with_role(lines: &[DimensionLine], role: DimensionRole) -> Vec<DimensionLine> {
    lines.iter().filter(|d| d.role == role).cloned().collect()
}

#[test]
fn test_elevation_default_cabinet() {
    let config = CabinetConfig::default();
    let lines = dims(TechView::Elevation, &config);
    let roles: Vec<DimensionRole> = lines.iter().map(|d| d.role).collect();
    assert_eq!(
        roles,
        vec![
            DimensionRole::OverallWidth,
            DimensionRole::OverallHeight,
            DimensionRole::BlockHeight,
            DimensionRole::ShelfGap,
            DimensionRole::ShelfGap,
            DimensionRole::ShelfGap,
        ]
    );

    let width = &lines[0];
    assert_eq!(width.axis, DimensionAxis::Horizontal);
    assert_eq!(width.label, "1200");
    assert_eq!(width.tier, DimensionTier::Main);
    assert_eq!(width.start, Point2::new(-600.0, 450.0));
    assert_eq!(width.leaders[0].start, Point2::new(-600.0, 630.0));

    let height = &lines[1];
    assert_eq!(height.tier, DimensionTier::Outer);
    assert_eq!(height.label, "900");
    assert_eq!(height.leaders[0].start.x, -1100.0);
}

#[test]
fn test_shelf_gaps_measure_between_center_lines() {
    let config = CabinetConfig::default();
    let gaps = with_role(&dims(TechView::Elevation, &config), DimensionRole::ShelfGap);
    assert_eq!(gaps.len(), 3);
    assert_eq!(gaps[0].end, Point2::new(-600.0, -441.0));
    assert_eq!(gaps[0].start, Point2::new(-600.0, -147.0));
    assert_eq!(gaps[2].start, Point2::new(-600.0, 441.0));
    for (i, gap) in gaps.iter().enumerate() {
        assert_eq!(gap.label, "294");
        assert_eq!(gap.tier, DimensionTier::Main);
        assert!(!gap.text_outside);
        assert_eq!(gap.text_shift, if i % 2 == 0 { -28.0 } else { 28.0 });
        assert_eq!(gap.block_id.as_deref(), Some("block-1"));
    }
}

#[test]
fn test_base_height_only_with_a_plinth() {
    let mut config = CabinetConfig::default();
    let lines = dims(TechView::Elevation, &config);
    assert!(with_role(&lines, DimensionRole::BaseHeight).is_empty());

    config.floor_height = 100.0;
    let lines = dims(TechView::Elevation, &config);
    let base = with_role(&lines, DimensionRole::BaseHeight);
    assert_eq!(base.len(), 1);
    assert_eq!(base[0].tier, DimensionTier::Middle);
    assert_eq!(base[0].label, "100");
    assert_eq!(base[0].start, Point2::new(-600.0, -450.0));
    assert_eq!(base[0].end, Point2::new(-600.0, -550.0));

    let overall = with_role(&lines, DimensionRole::OverallHeight);
    assert_eq!(overall[0].label, "1000");
}

#[test]
fn test_section_measures_depth_across() {
    let config = CabinetConfig::default();
    let lines = dims(TechView::Section, &config);
    assert_eq!(lines[0].role, DimensionRole::OverallDepth);
    assert_eq!(lines[0].label, "600");
    assert_eq!(lines[0].start, Point2::new(-300.0, 450.0));
    assert_eq!(lines[0].end, Point2::new(300.0, 450.0));

    // the same stack dimensions as the elevation, on the depth edge
    let elevation = dims(TechView::Elevation, &config);
    assert_eq!(lines.len(), elevation.len());
    assert!(lines[1..].iter().all(|d| d.start.x == -300.0));
}

#[test]
fn test_tight_drawer_rows_suppress_odd_labels() {
    let config = CabinetConfig {
        blocks: vec![Block::new("d", 560.0, 8, 1, BlockKind::Drawers { open: false })],
        ..CabinetConfig::default()
    };
    let rows = with_role(&dims(TechView::Elevation, &config), DimensionRole::DrawerRow);
    assert_eq!(rows.len(), 4);
    for row in &rows {
        assert!(row.text_outside);
        assert_eq!(row.label, "70");
        assert_eq!(row.text_shift, -28.0);
    }
    // index 0, 2, 4, 6
    assert_eq!(rows[1].end, Point2::new(-600.0, -280.0 + 140.0));
}

#[test]
fn test_roomy_drawer_rows_are_all_labeled() {
    let config = CabinetConfig {
        blocks: vec![Block::new("d", 900.0, 3, 1, BlockKind::Drawers { open: false })],
        ..CabinetConfig::default()
    };
    let rows = with_role(&dims(TechView::Elevation, &config), DimensionRole::DrawerRow);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| !r.text_outside && r.label == "300"));
}

#[test]
fn test_lid_split_is_always_labeled() {
    let config = CabinetConfig {
        blocks: vec![Block::new(
            "t",
            500.0,
            1,
            1,
            BlockKind::Trunk {
                lid_height: 60.0,
                lid_open: false,
            },
        )],
        ..CabinetConfig::default()
    };
    let lids = with_role(&dims(TechView::Section, &config), DimensionRole::LidHeight);
    assert_eq!(lids.len(), 1);
    assert_eq!(lids[0].label, "60");
    assert!(lids[0].text_outside);
    assert_eq!(lids[0].start, Point2::new(-300.0, 250.0));
    assert_eq!(lids[0].end, Point2::new(-300.0, 190.0));
    // outside labels move up the axis
    assert_eq!(lids[0].label_anchor.x, -480.0);
    assert!((lids[0].label_anchor.y - 271.0).abs() < 1e-9);
}

#[test]
fn test_short_block_label_goes_outside() {
    let config = CabinetConfig {
        blocks: vec![
            Block::new("plinth", 80.0, 1, 1, BlockKind::Shelves { shelves: 0 }),
            Block::new("body", 800.0, 1, 1, BlockKind::Shelves { shelves: 0 }),
        ],
        ..CabinetConfig::default()
    };
    let blocks = with_role(&dims(TechView::Elevation, &config), DimensionRole::BlockHeight);
    assert!(blocks[0].text_outside);
    assert!(!blocks[1].text_outside);
}

#[test]
fn test_ground_line_overhangs_both_sides() {
    let config = CabinetConfig {
        floor_height: 100.0,
        ..CabinetConfig::default()
    };
    let style = DrawingStyle::default();
    let elevation = ground_line(TechView::Elevation, &config, &style).unwrap();
    assert_eq!(elevation.start, Point2::new(-800.0, -550.0));
    assert_eq!(elevation.end, Point2::new(800.0, -550.0));

    let section = ground_line(TechView::Section, &config, &style).unwrap();
    assert_eq!(section.length(), 1000.0);
}

#[test]
fn test_run_label_keeps_even_indices() {
    let style = DrawingStyle::default();
    let labeled: Vec<usize> = (0..7).filter(|i| run_label(*i, 40.0, &style).is_some()).collect();
    assert_eq!(labeled, vec![0, 2, 4, 6]);
    assert!((0..7).all(|i| run_label(i, 98.0, &style).is_some()));
}
