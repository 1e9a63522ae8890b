// ==========================================
// 增材制造物料平衡 - 回收次数扫描
// ==========================================
// 依次计算 FixedCount(0..=max_n),最后追加 Unbounded（级数极限）
// 用于观察固定次数回收向无限回收的收敛
// ==========================================

use crate::domain::am::{LpbfMachine, Part};
use crate::domain::flow::MaterialFlowResult;
use crate::domain::powderfab::PowderFab;
use crate::domain::types::RecyclePolicy;
use crate::engine::am::calc_ampowder_per_kg_part;
use crate::engine::powderfab::calc_feedstock_per_kg_ampowder;
use crate::error::{YieldError, YieldResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub policy: RecyclePolicy,
    pub flow: MaterialFlowResult,
}

/// 粉末制备回收次数扫描
pub fn sweep_powderfab(powderfab: &PowderFab, max_n: u32) -> YieldResult<Vec<SweepPoint>> {
    sweep_with(max_n, |policy| calc_feedstock_per_kg_ampowder(powderfab, policy))
}

/// LPBF 回收次数扫描
pub fn sweep_am(machine: &LpbfMachine, part: &Part, max_n: u32) -> YieldResult<Vec<SweepPoint>> {
    sweep_with(max_n, |policy| calc_ampowder_per_kg_part(machine, part, policy))
}

fn sweep_with<F>(max_n: u32, calc: F) -> YieldResult<Vec<SweepPoint>>
where
    F: Fn(RecyclePolicy) -> YieldResult<MaterialFlowResult>,
{
    let mut points = Vec::with_capacity(max_n as usize + 2);
    for n in 0..=max_n {
        let policy = RecyclePolicy::FixedCount(n);
        points.push(SweepPoint {
            policy,
            flow: calc(policy)?,
        });
    }

    match calc(RecyclePolicy::Unbounded) {
        Ok(flow) => points.push(SweepPoint {
            policy: RecyclePolicy::Unbounded,
            flow,
        }),
        // reuse = 1 时无限回收发散,仅保留固定次数结果
        Err(YieldError::DegenerateRecycle { reuse_fraction }) => {
            tracing::warn!(reuse_fraction, "无限回收发散,扫描结果不含 inf 行");
        }
        Err(e) => return Err(e),
    }

    Ok(points)
}
