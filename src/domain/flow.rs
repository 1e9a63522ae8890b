// ==========================================
// 增材制造物料平衡 - 物料流结果
// ==========================================
// 均以"每单位工序产出"计;每次调用重新计算,不缓存
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialFlowResult {
    pub virgin_input_per_unit_output: f64,
    pub waste_per_unit_output: f64,
    pub coproduct_per_unit_output: f64,
}

impl MaterialFlowResult {
    /// 废料合计（废弃 + 副产品）
    pub fn scrap_per_unit_output(&self) -> f64 {
        self.waste_per_unit_output + self.coproduct_per_unit_output
    }

    /// 是否出现负流量（高回用 + 支撑熔融场景下可能出现）
    pub fn has_negative_flows(&self) -> bool {
        self.waste_per_unit_output < 0.0 || self.coproduct_per_unit_output < 0.0
    }
}
