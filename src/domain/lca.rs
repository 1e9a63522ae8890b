// ==========================================
// 增材制造物料平衡 - LCA 指标
// ==========================================
// 用途: 能耗/碳排等 LCA 标注,仅存储与透传
// 红线: 计算核心不读取数值,不与物料比例做运算
// ==========================================

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENERGY_UNIT: &str = "MJ/kg";
pub const DEFAULT_CO2_UNIT: &str = "kg_CO2/kg";

/// 带标签的指标（名称 + 数值 + 单位）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledMetric {
    pub name: String,
    pub value: f64,
    pub unit: String,
}

impl LabeledMetric {
    pub fn new(name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
        }
    }
}

// ==========================================
// LcaMetrics - 材料/工序的 LCA 指标
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LcaMetrics {
    pub name: String,        // 关联的材料/工序名称
    pub energy: LabeledMetric, // 单位能耗
    pub co2: LabeledMetric,    // 单位碳排
}

impl LcaMetrics {
    /// 使用默认单位创建（MJ/kg, kg_CO2/kg）
    pub fn new(name: impl Into<String>, energy: f64, co2: f64) -> Self {
        Self::with_units(name, energy, co2, DEFAULT_ENERGY_UNIT, DEFAULT_CO2_UNIT)
    }

    pub fn with_units(
        name: impl Into<String>,
        energy: f64,
        co2: f64,
        energy_unit: impl Into<String>,
        co2_unit: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            energy: LabeledMetric::new(format!("{}/energy", name), energy, energy_unit),
            co2: LabeledMetric::new(format!("{}/co2", name), co2, co2_unit),
            name,
        }
    }

    /// 展开为标注列表（用于结果透传）
    pub fn labeled(&self) -> Vec<LabeledMetric> {
        vec![self.energy.clone(), self.co2.clone()]
    }
}
