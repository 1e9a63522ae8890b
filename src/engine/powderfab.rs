// ==========================================
// 增材制造物料平衡 - 粉末制备物料计算
// ==========================================
// 输出: 每 kg AM 粉末所需原生原料、副产品、废弃量
// ==========================================

use crate::domain::flow::MaterialFlowResult;
use crate::domain::powderfab::PowderFab;
use crate::domain::types::RecyclePolicy;
use crate::engine::series::{self, SeriesInput};
use crate::error::YieldResult;

/// 计算每 kg AM 粉末所需原料
///
/// # 参数
/// - `powderfab`: 粉末制备工序
/// - `policy`: 制备废料的回收策略
///
/// # 返回
/// - virgin_input_per_unit_output: kg 原生原料 / kg 粉末
/// - waste_per_unit_output: kg 废弃 / kg 粉末
/// - coproduct_per_unit_output: kg 副产品 / kg 粉末
pub fn calc_feedstock_per_kg_ampowder(
    powderfab: &PowderFab,
    policy: RecyclePolicy,
) -> YieldResult<MaterialFlowResult> {
    let stage = &powderfab.stage;
    stage.validate()?;

    let flow = series::solve(
        &SeriesInput {
            stage: "powder_fab",
            effective_yield: stage.yield_fraction,
            effective_scrap: stage.scrap_fraction(),
            reuse_fraction: stage.reuse_fraction,
            coproduct_fraction: stage.coproduct_fraction,
        },
        policy,
    )?;

    tracing::debug!(
        process = %powderfab.name,
        policy = %policy,
        feedstock_per_kg_ampowder = flow.virgin_input_per_unit_output,
        kg_waste = flow.waste_per_unit_output,
        kg_coproduct = flow.coproduct_per_unit_output,
        "粉末制备物料平衡"
    );

    Ok(flow)
}
