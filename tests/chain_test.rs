// ==========================================
// 全链路组合 集成测试
// ==========================================

mod test_helpers;

use am_lca::domain::RecyclePolicy;
use am_lca::engine::{evaluate_chain, ChainInput};
use test_helpers::{assert_close, test_feedstock, test_machine, test_part, test_powder, test_powderfab};

#[test]
fn test_chain_multiplies_stage_ratios() {
    am_lca::logging::init_test();

    let feedstock = test_feedstock();
    let powderfab = test_powderfab(0.5, 0.0, 0.0);
    let powder = test_powder();
    let machine = test_machine(0.0, 0.0);
    let part = test_part(400.0, 0.0);

    let result = evaluate_chain(&ChainInput {
        feedstock: &feedstock,
        powderfab: &powderfab,
        powder: &powder,
        machine: &machine,
        part: &part,
        powderfab_policy: RecyclePolicy::NoRecycle,
        am_policy: RecyclePolicy::NoRecycle,
    })
    .unwrap();

    assert_close(result.powderfab_flow.virgin_input_per_unit_output, 2.0);
    assert_close(result.am_flow.virgin_input_per_unit_output, 2.5);
    assert_close(result.feedstock_per_kg_part, 5.0);
    assert_close(result.part_per_kg_feedstock, 0.2);
    assert_eq!(result.feedstock_name, "material_test");
    assert_eq!(result.powder_name, "ampowder_test");
    assert_eq!(result.part_name, "part_test");
}

#[test]
fn test_chain_forwards_lca_annotations_unchanged() {
    let feedstock = test_feedstock();
    let powderfab = test_powderfab(0.6, 0.3, 0.1);
    let powder = test_powder();
    let machine = test_machine(0.5, 0.2);
    let part = test_part(400.0, 100.0);

    let result = evaluate_chain(&ChainInput {
        feedstock: &feedstock,
        powderfab: &powderfab,
        powder: &powder,
        machine: &machine,
        part: &part,
        powderfab_policy: RecyclePolicy::Unbounded,
        am_policy: RecyclePolicy::FixedCount(3),
    })
    .unwrap();

    let mut expected = feedstock.lca_metrics.labeled();
    expected.extend(powderfab.lca_metrics.labeled());
    assert_eq!(result.lca_annotations, expected);
    assert_eq!(result.lca_annotations[0].unit, "MJ/kg");
    assert_eq!(result.lca_annotations[1].unit, "kg_CO2/kg");
    assert_eq!(result.lca_annotations[2].value, 20.0);
}

#[test]
fn test_chain_fails_atomically() {
    let feedstock = test_feedstock();
    let powderfab = test_powderfab(0.6, 0.3, 0.1);
    let powder = test_powder();
    let machine = test_machine(1.0, 0.0);
    let part = test_part(400.0, 0.0);

    let err = evaluate_chain(&ChainInput {
        feedstock: &feedstock,
        powderfab: &powderfab,
        powder: &powder,
        machine: &machine,
        part: &part,
        powderfab_policy: RecyclePolicy::Unbounded,
        am_policy: RecyclePolicy::Unbounded,
    })
    .unwrap_err();

    assert!(matches!(err, am_lca::YieldError::DegenerateRecycle { .. }));
}
