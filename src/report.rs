// ==========================================
// 增材制造物料平衡 - CSV 报表
// ==========================================
// 工具: csv + serde
// 列: recycle_times, virgin_input, waste, coproduct（每单位产出）
// ==========================================

use crate::engine::sweep::SweepPoint;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

/// 报表错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("报表输出失败: {0}")]
    Io(#[from] std::io::Error),
}

/// Result 类型别名
pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Debug, Serialize)]
struct SweepRow {
    recycle_times: String, // "inf" 表示无限回收
    virgin_input_per_unit_output: f64,
    waste_per_unit_output: f64,
    coproduct_per_unit_output: f64,
}

impl From<&SweepPoint> for SweepRow {
    fn from(point: &SweepPoint) -> Self {
        Self {
            recycle_times: point.policy.to_string(),
            virgin_input_per_unit_output: point.flow.virgin_input_per_unit_output,
            waste_per_unit_output: point.flow.waste_per_unit_output,
            coproduct_per_unit_output: point.flow.coproduct_per_unit_output,
        }
    }
}

/// 写出扫描结果（含表头）
pub fn write_sweep_csv<W: Write>(writer: W, points: &[SweepPoint]) -> ReportResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in points {
        wtr.serialize(SweepRow::from(point))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MaterialFlowResult, RecyclePolicy};

    #[test]
    fn test_writes_header_and_inf_row() {
        let flow = MaterialFlowResult {
            virgin_input_per_unit_output: 1.5,
            waste_per_unit_output: 0.5,
            coproduct_per_unit_output: 0.0,
        };
        let points = vec![
            SweepPoint {
                policy: RecyclePolicy::FixedCount(0),
                flow,
            },
            SweepPoint {
                policy: RecyclePolicy::Unbounded,
                flow,
            },
        ];

        let mut buf = Vec::new();
        write_sweep_csv(&mut buf, &points).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "recycle_times,virgin_input_per_unit_output,waste_per_unit_output,coproduct_per_unit_output"
        );
        assert_eq!(lines[1], "0,1.5,0.5,0.0");
        assert!(lines[2].starts_with("inf,"));
    }
}
