// ==========================================
// 增材制造物料平衡 - 工序收率模型
// ==========================================
// 用途: 粉末制备与 LPBF 两道工序共用
// ==========================================

use crate::error::{ensure_fraction, YieldResult};
use serde::{Deserialize, Serialize};

// ==========================================
// StageYieldModel - 单工序收率与废料分配
// ==========================================
// reuse_fraction: 废料回用到本工序的比例
// coproduct_fraction: 未回用废料中转作副产品的比例,其余为废弃
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageYieldModel {
    pub yield_fraction: f64,
    #[serde(default)]
    pub reuse_fraction: f64,
    #[serde(default)]
    pub coproduct_fraction: f64,
}

impl StageYieldModel {
    /// 创建并校验（三个比例均须位于 [0, 1]）
    pub fn new(yield_fraction: f64, reuse_fraction: f64, coproduct_fraction: f64) -> YieldResult<Self> {
        let model = Self {
            yield_fraction,
            reuse_fraction,
            coproduct_fraction,
        };
        model.validate()?;
        Ok(model)
    }

    /// 仅指定收率,不回用、无副产品
    pub fn with_yield(yield_fraction: f64) -> YieldResult<Self> {
        Self::new(yield_fraction, 0.0, 0.0)
    }

    pub fn validate(&self) -> YieldResult<()> {
        ensure_fraction("yield_fraction", self.yield_fraction)?;
        ensure_fraction("reuse_fraction", self.reuse_fraction)?;
        ensure_fraction("coproduct_fraction", self.coproduct_fraction)?;
        Ok(())
    }

    /// 废料比例 (1 - yield)
    pub fn scrap_fraction(&self) -> f64 {
        1.0 - self.yield_fraction
    }
}
