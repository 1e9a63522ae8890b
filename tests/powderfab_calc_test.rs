// ==========================================
// 粉末制备物料计算 集成测试
// ==========================================

mod test_helpers;

use am_lca::domain::RecyclePolicy;
use am_lca::engine::calc_feedstock_per_kg_ampowder;
use am_lca::error::YieldError;
use test_helpers::{assert_close, test_powderfab};

#[test]
fn test_yield100_needs_no_extra_feedstock() {
    let pf = test_powderfab(1.0, 0.0, 0.0);
    let flow = calc_feedstock_per_kg_ampowder(&pf, RecyclePolicy::Unbounded).unwrap();

    assert_eq!(flow.virgin_input_per_unit_output, 1.0);
    assert_eq!(flow.coproduct_per_unit_output, 0.0);
    assert_eq!(flow.waste_per_unit_output, 0.0);
}

#[test]
fn test_yield60_reuse0_coprod0() {
    let pf = test_powderfab(0.6, 0.0, 0.0);
    let flow = calc_feedstock_per_kg_ampowder(&pf, RecyclePolicy::Unbounded).unwrap();

    assert_close(flow.virgin_input_per_unit_output, 1.0 / 0.6);
    assert_close(flow.coproduct_per_unit_output, 0.0);
    assert_close(flow.waste_per_unit_output, 1.0 / 0.6 - 1.0);
}

#[test]
fn test_yield60_reuse30_coprod0() {
    let pf = test_powderfab(0.6, 0.3, 0.0);
    let flow = calc_feedstock_per_kg_ampowder(&pf, RecyclePolicy::Unbounded).unwrap();

    assert_close(flow.virgin_input_per_unit_output, 0.7 / 0.54);
    assert_close(flow.coproduct_per_unit_output, 0.0);
    assert_close(flow.waste_per_unit_output, 0.7 / 0.54 - 1.0);
}

#[test]
fn test_yield60_reuse30_coprod10() {
    let pf = test_powderfab(0.6, 0.3, 0.1);
    let flow = calc_feedstock_per_kg_ampowder(&pf, RecyclePolicy::Unbounded).unwrap();

    assert_close(flow.virgin_input_per_unit_output, 0.7 / 0.54);
    assert_close(flow.coproduct_per_unit_output, 0.016 / 0.54);
    assert_close(flow.waste_per_unit_output, 0.144 / 0.54);
}

#[test]
fn test_no_recycle_ignores_reuse_fraction() {
    let pf = test_powderfab(0.6, 0.3, 0.1);
    let flow = calc_feedstock_per_kg_ampowder(&pf, RecyclePolicy::NoRecycle).unwrap();

    assert_close(flow.virgin_input_per_unit_output, 1.0 / 0.6);
    assert_close(flow.coproduct_per_unit_output, (1.0 / 0.6 - 1.0) * 0.1);
}

#[test]
fn test_single_recycle_pass() {
    // 0.6 + 0.4 * 0.3
    let pf = test_powderfab(0.6, 0.3, 0.0);
    let flow = calc_feedstock_per_kg_ampowder(&pf, RecyclePolicy::FixedCount(1)).unwrap();

    assert_close(flow.virgin_input_per_unit_output, 1.0 / 0.72);
}

#[test]
fn test_full_reuse_unbounded_is_degenerate() {
    let pf = test_powderfab(0.6, 1.0, 0.0);
    let err = calc_feedstock_per_kg_ampowder(&pf, RecyclePolicy::Unbounded).unwrap_err();

    assert_eq!(err, YieldError::DegenerateRecycle { reuse_fraction: 1.0 });
}

#[test]
fn test_full_reuse_fixed_count_uses_limit() {
    // Σ_{k=1..4} 1^k = 4 => 0.6 + 0.4 * 4
    let pf = test_powderfab(0.6, 1.0, 0.0);
    let flow = calc_feedstock_per_kg_ampowder(&pf, RecyclePolicy::FixedCount(4)).unwrap();

    assert_close(flow.virgin_input_per_unit_output, 1.0 / 2.2);
}

#[test]
fn test_invalid_fraction_rejected() {
    let pf = test_powderfab(1.2, 0.0, 0.0);
    let err = calc_feedstock_per_kg_ampowder(&pf, RecyclePolicy::NoRecycle).unwrap_err();

    assert_eq!(
        err,
        YieldError::InvalidFraction {
            field: "yield_fraction",
            value: 1.2
        }
    );
}

#[test]
fn test_zero_yield_without_recycle_fails() {
    let pf = test_powderfab(0.0, 0.0, 0.0);
    let err = calc_feedstock_per_kg_ampowder(&pf, RecyclePolicy::NoRecycle).unwrap_err();

    assert!(matches!(
        err,
        YieldError::NoEffectiveOutput {
            stage: "powder_fab",
            ..
        }
    ));
}

#[test]
fn test_inputs_not_mutated() {
    let pf = test_powderfab(0.6, 0.3, 0.1);
    let before = pf.clone();
    let first = calc_feedstock_per_kg_ampowder(&pf, RecyclePolicy::Unbounded).unwrap();
    let second = calc_feedstock_per_kg_ampowder(&pf, RecyclePolicy::Unbounded).unwrap();

    assert_eq!(pf, before);
    assert_eq!(first, second);
}
