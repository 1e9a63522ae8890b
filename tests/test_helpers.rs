// ==========================================
// 测试辅助 - 构建器与浮点断言
// ==========================================

#![allow(dead_code)]

use am_lca::domain::{AmPowder, LcaMetrics, LpbfMachine, Part, PowderFab, RawFeedstock, StageYieldModel};

pub const TOL: f64 = 1e-9;

/// 浮点近似相等断言
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOL,
        "expected {}, got {} (diff {})",
        expected,
        actual,
        (actual - expected).abs()
    );
}

/// 10×10×10 测试成形舱
pub fn test_machine(reuse: f64, coprod: f64) -> LpbfMachine {
    LpbfMachine::new("machine_test", 10.0, 10.0, 10.0).with_scrap_fractions(reuse, coprod)
}

/// 高度 10 的测试零件
pub fn test_part(volume: f64, support_volume: f64) -> Part {
    Part::new("part_test", 10.0, volume, support_volume)
}

pub fn test_powderfab(yield_fraction: f64, reuse: f64, coprod: f64) -> PowderFab {
    PowderFab::new(
        "powderfab_test",
        StageYieldModel {
            yield_fraction,
            reuse_fraction: reuse,
            coproduct_fraction: coprod,
        },
        LcaMetrics::new("powderfab_test", 20.0, 100.0),
    )
}

pub fn test_feedstock() -> RawFeedstock {
    RawFeedstock {
        name: "material_test".to_string(),
        form: "bar".to_string(),
        lca_metrics: LcaMetrics::new("material_test", 10.0, 50.0),
    }
}

pub fn test_powder() -> AmPowder {
    AmPowder {
        name: "ampowder_test".to_string(),
    }
}
