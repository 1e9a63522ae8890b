// ==========================================
// 增材制造物料平衡 - 粉末制备领域模型
// ==========================================
// 工序: 原料 (棒材/矿石/板材) -> AM 级粉末
// ==========================================

use crate::domain::lca::LcaMetrics;
use crate::domain::stage::StageYieldModel;
use serde::{Deserialize, Serialize};

/// 粉末制备的原料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFeedstock {
    pub name: String,
    pub form: String, // 形态: bar / ore / sheet ...
    pub lca_metrics: LcaMetrics,
}

// ==========================================
// PowderFab - 粉末制备工序
// ==========================================
// stage.yield_fraction: AM 级粉末收率
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowderFab {
    pub name: String,
    pub stage: StageYieldModel,
    pub lca_metrics: LcaMetrics,
}

impl PowderFab {
    pub fn new(name: impl Into<String>, stage: StageYieldModel, lca_metrics: LcaMetrics) -> Self {
        Self {
            name: name.into(),
            stage,
            lca_metrics,
        }
    }
}

/// 粉末制备产出的 AM 粉末
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmPowder {
    pub name: String,
}
