// ==========================================
// 增材制造物料平衡 - 回收几何级数
// ==========================================
// 粉末制备与 LPBF 共用的回收循环算法
// 第 k 次回用的废料量 = effective_scrap * r^k (k 从 1 开始)
// V = 1 / (effective_yield + effective_scrap * Σ r^k)
// ==========================================

use crate::domain::flow::MaterialFlowResult;
use crate::domain::types::RecyclePolicy;
use crate::error::{ensure_fraction, YieldError, YieldResult};

/// 级数输入（各调用方自行计算有效收率/有效废料）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesInput {
    pub stage: &'static str,
    pub effective_yield: f64,
    pub effective_scrap: f64,
    pub reuse_fraction: f64,
    pub coproduct_fraction: f64,
}

/// 回用级数和 Σ_{k=1..n} r^k
///
/// # 返回
/// - NoRecycle / FixedCount(0): 0
/// - FixedCount(n): r(1 - r^n)/(1 - r)，r = 1 时取极限 n
/// - Unbounded: r/(1 - r)，r = 1 时级数发散
pub fn recycled_sum(policy: RecyclePolicy, reuse_fraction: f64) -> YieldResult<f64> {
    let r = reuse_fraction;
    match policy {
        RecyclePolicy::NoRecycle | RecyclePolicy::FixedCount(0) => Ok(0.0),
        RecyclePolicy::FixedCount(n) => {
            if r == 1.0 {
                Ok(f64::from(n))
            } else {
                Ok(r * (1.0 - r.powf(f64::from(n))) / (1.0 - r))
            }
        }
        RecyclePolicy::Unbounded => {
            if r >= 1.0 {
                return Err(YieldError::DegenerateRecycle { reuse_fraction: r });
            }
            Ok(r / (1.0 - r))
        }
    }
}

/// 求解单位产出的原生投入量 V 及废料分配
///
/// (V - 1) 为全部回收轮次产生的废料总量,按副产品比例拆分为副产品与废弃。
pub fn solve(input: &SeriesInput, policy: RecyclePolicy) -> YieldResult<MaterialFlowResult> {
    crate::perf::record_series_eval();

    let r = ensure_fraction("reuse_fraction", input.reuse_fraction)?;
    let c = ensure_fraction("coproduct_fraction", input.coproduct_fraction)?;

    // 无废料时回收策略不起作用（含 r = 1 的无限回收）
    let recycled = if input.effective_scrap == 0.0 {
        0.0
    } else {
        input.effective_scrap * recycled_sum(policy, r)?
    };
    let effective_output = input.effective_yield + recycled;
    if effective_output <= 0.0 || !effective_output.is_finite() {
        return Err(YieldError::NoEffectiveOutput {
            stage: input.stage,
            effective_output,
        });
    }

    let virgin = 1.0 / effective_output;
    let scrap = virgin - 1.0;

    Ok(MaterialFlowResult {
        virgin_input_per_unit_output: virgin,
        waste_per_unit_output: scrap * (1.0 - c),
        coproduct_per_unit_output: scrap * c,
    })
}
