// ==========================================
// 增材制造物料平衡 - 全链路组合
// ==========================================
// 原料 -> 粉末制备 -> AM 粉末 -> LPBF -> 零件
// 两道工序独立计算,原生投入比相乘得到每 kg 零件所需原料
// LCA 指标仅透传,不参与运算
// ==========================================

use crate::domain::am::{LpbfMachine, Part};
use crate::domain::flow::MaterialFlowResult;
use crate::domain::lca::LabeledMetric;
use crate::domain::powderfab::{AmPowder, PowderFab, RawFeedstock};
use crate::domain::types::RecyclePolicy;
use crate::engine::am::calc_ampowder_per_kg_part;
use crate::engine::powderfab::calc_feedstock_per_kg_ampowder;
use crate::error::YieldResult;
use crate::perf::PerfGuard;
use serde::{Deserialize, Serialize};

/// 全链路输入
#[derive(Debug, Clone)]
pub struct ChainInput<'a> {
    pub feedstock: &'a RawFeedstock,
    pub powderfab: &'a PowderFab,
    pub powder: &'a AmPowder,
    pub machine: &'a LpbfMachine,
    pub part: &'a Part,
    pub powderfab_policy: RecyclePolicy,
    pub am_policy: RecyclePolicy,
}

/// 全链路结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainResult {
    pub feedstock_name: String,
    pub powder_name: String,
    pub part_name: String,

    // ===== 分工序结果 =====
    pub powderfab_flow: MaterialFlowResult, // 每 kg AM 粉末
    pub am_flow: MaterialFlowResult,        // 每 kg 零件

    // ===== 组合比例 =====
    pub feedstock_per_kg_part: f64,
    pub part_per_kg_feedstock: f64,

    // ===== 透传标注 =====
    pub lca_annotations: Vec<LabeledMetric>,
}

/// 计算全链路物料平衡
pub fn evaluate_chain(input: &ChainInput<'_>) -> YieldResult<ChainResult> {
    let _perf = PerfGuard::new("evaluate_chain");

    let powderfab_flow = calc_feedstock_per_kg_ampowder(input.powderfab, input.powderfab_policy)?;
    let am_flow = calc_ampowder_per_kg_part(input.machine, input.part, input.am_policy)?;

    let feedstock_per_kg_part =
        am_flow.virgin_input_per_unit_output * powderfab_flow.virgin_input_per_unit_output;

    let mut lca_annotations = input.feedstock.lca_metrics.labeled();
    lca_annotations.extend(input.powderfab.lca_metrics.labeled());

    tracing::info!(
        feedstock = %input.feedstock.name,
        part = %input.part.name,
        feedstock_per_kg_part,
        "全链路物料平衡完成"
    );

    Ok(ChainResult {
        feedstock_name: input.feedstock.name.clone(),
        powder_name: input.powder.name.clone(),
        part_name: input.part.name.clone(),
        powderfab_flow,
        am_flow,
        feedstock_per_kg_part,
        part_per_kg_feedstock: 1.0 / feedstock_per_kg_part,
        lca_annotations,
    })
}
