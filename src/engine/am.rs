// ==========================================
// 增材制造物料平衡 - LPBF 物料计算
// ==========================================
// 输出: 每 kg 零件所需原生 AM 粉末、副产品、废弃量
// 约定: 单次打印一个零件
// ==========================================
// 有效收率 = part_split
// 有效废料 = chamber_scrap_split × powder_scrap_split（支撑为熔融废料,不回用）
// 合格率修正: 打印批次系数 b = 1 / part_yield
//   coproduct' = coproduct × b
//   waste'     = waste × b + V × (b - 1)
// ==========================================

use crate::domain::am::{LpbfMachine, Part};
use crate::domain::flow::MaterialFlowResult;
use crate::domain::types::RecyclePolicy;
use crate::engine::geometry::{self, BuildSplits};
use crate::engine::series::{self, SeriesInput};
use crate::error::{ensure_fraction, YieldError, YieldResult};

/// 计算每 kg 零件所需 AM 粉末（含零件合格率修正）
pub fn calc_ampowder_per_kg_part(
    machine: &LpbfMachine,
    part: &Part,
    policy: RecyclePolicy,
) -> YieldResult<MaterialFlowResult> {
    let splits = geometry::derive_splits(machine, part)?;
    let flow = calc_ampowder_for_splits(machine, &splits, policy)?;
    let corrected = apply_part_yield(flow, machine.part_yield)?;

    if corrected.has_negative_flows() {
        tracing::warn!(
            machine = %machine.machine_name,
            part = %part.name,
            policy = %policy,
            kg_waste = corrected.waste_per_unit_output,
            kg_coproduct = corrected.coproduct_per_unit_output,
            "物料流为负: 回用比例较高时回收废粉超过实际可用废粉"
        );
    }

    tracing::debug!(
        machine = %machine.machine_name,
        part = %part.name,
        policy = %policy,
        ampowder_per_kg_part = corrected.virgin_input_per_unit_output,
        kg_waste = corrected.waste_per_unit_output,
        kg_coproduct = corrected.coproduct_per_unit_output,
        "LPBF 物料平衡"
    );

    Ok(corrected)
}

/// 按已导出的分配比例求解（未做合格率修正）
pub fn calc_ampowder_for_splits(
    machine: &LpbfMachine,
    splits: &BuildSplits,
    policy: RecyclePolicy,
) -> YieldResult<MaterialFlowResult> {
    series::solve(
        &SeriesInput {
            stage: "lpbf",
            effective_yield: splits.part_split,
            effective_scrap: splits.recyclable_scrap_split(),
            reuse_fraction: machine.scrap_reuse_frac,
            coproduct_fraction: machine.scrap_coprod_frac,
        },
        policy,
    )
}

/// 零件合格率修正
///
/// 失败打印消耗的粉末全部计入废弃;合格打印的废料仍按副产品比例拆分。
/// part_yield = 1 时结果不变。
pub fn apply_part_yield(flow: MaterialFlowResult, part_yield: f64) -> YieldResult<MaterialFlowResult> {
    let part_yield = ensure_fraction("part_yield", part_yield)?;
    if part_yield == 0.0 {
        return Err(YieldError::ZeroPartYield);
    }

    let builds = 1.0 / part_yield;
    let virgin = flow.virgin_input_per_unit_output;

    Ok(MaterialFlowResult {
        virgin_input_per_unit_output: virgin,
        waste_per_unit_output: flow.waste_per_unit_output * builds + virgin * (builds - 1.0),
        coproduct_per_unit_output: flow.coproduct_per_unit_output * builds,
    })
}
