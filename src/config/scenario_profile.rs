use crate::domain::am::{LpbfMachine, Part};
use crate::domain::lca::{LcaMetrics, DEFAULT_CO2_UNIT, DEFAULT_ENERGY_UNIT};
use crate::domain::stage::StageYieldModel;
use crate::domain::types::RecyclePolicy;
use crate::error::YieldResult;
use serde::{Deserialize, Serialize};

/// 场景配置（JSON 持久化对象）
///
/// 描述一条完整的 原料 -> 粉末 -> 零件 链路
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioProfile {
    /// 场景 ID
    pub scenario_id: String,

    /// 说明（可选）
    #[serde(default)]
    pub description: Option<String>,

    pub feedstock: FeedstockProfile,
    pub powder_fab: PowderFabProfile,

    /// AM 粉末名称
    pub powder_name: String,

    pub lpbf: LpbfMachine,
    pub part: Part,

    /// LPBF 废粉回收次数（"inf" 或非负整数,默认 "inf"）
    #[serde(default)]
    pub am_recycle_times: RecycleTimes,
}

/// 原料配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedstockProfile {
    pub name: String,
    pub form: String,
    pub lca: LcaProfile,
}

/// 粉末制备配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowderFabProfile {
    pub name: String,
    pub stage: StageYieldModel,
    pub lca: LcaProfile,

    /// 制备废料回收次数（"inf" 或非负整数,默认 "inf"）
    #[serde(default)]
    pub recycle_times: RecycleTimes,
}

/// LCA 指标配置（单位可省略,默认 MJ/kg 与 kg_CO2/kg）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LcaProfile {
    pub energy: f64,
    pub co2: f64,
    #[serde(default)]
    pub energy_unit: Option<String>,
    #[serde(default)]
    pub co2_unit: Option<String>,
}

impl LcaProfile {
    pub fn to_metrics(&self, name: &str) -> LcaMetrics {
        LcaMetrics::with_units(
            name,
            self.energy,
            self.co2,
            self.energy_unit.as_deref().unwrap_or(DEFAULT_ENERGY_UNIT),
            self.co2_unit.as_deref().unwrap_or(DEFAULT_CO2_UNIT),
        )
    }
}

/// 回收次数（兼容 "inf" 字符串与整数两种写法）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecycleTimes {
    Count(i64),
    Label(String),
}

impl Default for RecycleTimes {
    fn default() -> Self {
        RecycleTimes::Label("inf".to_string())
    }
}

impl RecycleTimes {
    pub fn to_policy(&self) -> YieldResult<RecyclePolicy> {
        match self {
            RecycleTimes::Count(n) => RecyclePolicy::from_count(*n),
            RecycleTimes::Label(s) => s.parse(),
        }
    }
}
