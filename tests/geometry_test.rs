// ==========================================
// 成形舱几何预处理 集成测试
// ==========================================

mod test_helpers;

use am_lca::domain::{LpbfMachine, Part};
use am_lca::engine::derive_splits;
use am_lca::error::YieldError;
use test_helpers::{assert_close, test_machine, test_part};

#[test]
fn test_splits_with_supports() {
    let splits = derive_splits(&test_machine(0.0, 0.0), &test_part(400.0, 100.0)).unwrap();

    assert_close(splits.fill_volume, 1000.0);
    assert_close(splits.part_split, 0.4);
    assert_close(splits.chamber_scrap_split, 0.6);
    assert_close(splits.scrap_volume, 600.0);
    assert_close(splits.melted_scrap_waste_split, 1.0 / 6.0);
    assert_close(splits.powder_scrap_split, 5.0 / 6.0);
    assert_close(splits.recyclable_scrap_split(), 0.5);
}

#[test]
fn test_fill_uses_part_height_not_envelope_height() {
    let machine = LpbfMachine::new("machine_test", 325.0, 250.0, 250.0);
    let part = Part::new("part_test", 150.0, 1_500_000.0, 10_000.0);

    let splits = derive_splits(&machine, &part).unwrap();
    assert_close(splits.fill_volume, 250.0 * 250.0 * 150.0);
    assert_close(splits.part_split, 0.16);
}

#[test]
fn test_zero_envelope_is_invalid_geometry() {
    let machine = LpbfMachine::new("machine_test", 10.0, 10.0, 0.0);
    let err = derive_splits(&machine, &test_part(400.0, 0.0)).unwrap_err();

    assert_eq!(
        err,
        YieldError::InvalidGeometry {
            field: "fill_volume",
            value: 0.0
        }
    );
}

#[test]
fn test_supports_without_scrap_is_invalid_geometry() {
    let err = derive_splits(&test_machine(0.0, 0.0), &test_part(1000.0, 10.0)).unwrap_err();

    assert!(matches!(
        err,
        YieldError::InvalidGeometry {
            field: "scrap_volume",
            ..
        }
    ));
}

#[test]
fn test_negative_support_volume_rejected() {
    let err = derive_splits(&test_machine(0.0, 0.0), &test_part(400.0, -1.0)).unwrap_err();

    assert_eq!(
        err,
        YieldError::InvalidGeometry {
            field: "support_volume",
            value: -1.0
        }
    );
}

#[test]
fn test_non_positive_part_volume_rejected() {
    let err = derive_splits(&test_machine(0.0, 0.0), &test_part(0.0, 0.0)).unwrap_err();

    assert!(matches!(
        err,
        YieldError::InvalidGeometry {
            field: "part_volume",
            ..
        }
    ));
}

#[test]
fn test_tall_part_only_warns() {
    let machine = LpbfMachine::new("machine_test", 5.0, 10.0, 10.0);
    let splits = derive_splits(&machine, &test_part(400.0, 0.0)).unwrap();

    assert_close(splits.fill_volume, 1000.0);
}
