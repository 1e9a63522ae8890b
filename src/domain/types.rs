// ==========================================
// 增材制造物料平衡 - 领域类型定义
// ==========================================
// 回收策略: 不回收 / 固定回收次数 / 无限回收
// ==========================================

use crate::error::{YieldError, YieldResult};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 回收策略 (Recycle Policy)
// ==========================================
// 红线: 次数与"无限"分开表达,不混用字符串/整数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecyclePolicy {
    NoRecycle,       // 不回收
    FixedCount(u32), // 固定回收次数
    Unbounded,       // 无限回收 (几何级数极限)
}

impl RecyclePolicy {
    /// 由有符号回收次数构造
    ///
    /// # 返回
    /// - 0: NoRecycle
    /// - n > 0: FixedCount(n)
    /// - n < 0: InvalidRecycleCount
    pub fn from_count(count: i64) -> YieldResult<Self> {
        match count {
            c if c < 0 => Err(YieldError::InvalidRecycleCount(c)),
            0 => Ok(RecyclePolicy::NoRecycle),
            c => u32::try_from(c)
                .map(RecyclePolicy::FixedCount)
                .map_err(|_| YieldError::InvalidRecycleCount(c)),
        }
    }

    /// 回收次数（无限回收返回 None）
    pub fn recycle_times(&self) -> Option<u32> {
        match self {
            RecyclePolicy::NoRecycle => Some(0),
            RecyclePolicy::FixedCount(n) => Some(*n),
            RecyclePolicy::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, RecyclePolicy::Unbounded)
    }
}

impl Default for RecyclePolicy {
    fn default() -> Self {
        RecyclePolicy::Unbounded
    }
}

impl fmt::Display for RecyclePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecyclePolicy::NoRecycle => write!(f, "0"),
            RecyclePolicy::FixedCount(n) => write!(f, "{}", n),
            RecyclePolicy::Unbounded => write!(f, "inf"),
        }
    }
}

impl std::str::FromStr for RecyclePolicy {
    type Err = YieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().to_lowercase();
        match raw.as_str() {
            "inf" | "infinite" | "unbounded" => Ok(RecyclePolicy::Unbounded),
            "none" | "no_recycle" | "no-recycle" => Ok(RecyclePolicy::NoRecycle),
            other => match other.parse::<i64>() {
                Ok(n) => RecyclePolicy::from_count(n),
                Err(_) => Err(YieldError::InvalidRecyclePolicy(s.trim().to_string())),
            },
        }
    }
}
