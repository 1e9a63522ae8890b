// ==========================================
// 增材制造物料平衡 - 命令行入口
// ==========================================
// 用法:
//   am-lca [scenario.json] [--sweep N] [--json-log] [--perf]
//
// 无场景文件时使用内置演示场景
// ==========================================

use am_lca::config::ScenarioConfigManager;
use am_lca::engine::{evaluate_chain, sweep_am, sweep_powderfab};
use am_lca::report::write_sweep_csv;
use anyhow::{bail, Context};

struct CliArgs {
    scenario_path: Option<String>,
    sweep: Option<u32>,
    json_log: bool,
    perf: bool,
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut cli = CliArgs {
        scenario_path: None,
        sweep: None,
        json_log: false,
        perf: false,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sweep" => {
                let raw = args.next().context("--sweep 需要回收次数上限")?;
                cli.sweep = Some(
                    raw.trim()
                        .parse()
                        .with_context(|| format!("--sweep 参数无效: {}", raw))?,
                );
            }
            "--json-log" => cli.json_log = true,
            "--perf" => cli.perf = true,
            other if other.starts_with("--") => bail!("未知参数: {}", other),
            path => cli.scenario_path = Some(path.to_string()),
        }
    }

    Ok(cli)
}

fn main() -> anyhow::Result<()> {
    let cli = parse_args()?;

    if cli.json_log {
        am_lca::logging::init_json();
    } else {
        am_lca::logging::init();
    }
    if cli.perf {
        am_lca::perf::force_enable();
    }

    tracing::info!("{} v{}", am_lca::APP_NAME, am_lca::VERSION);

    let manager = match &cli.scenario_path {
        Some(path) => ScenarioConfigManager::load(path)
            .with_context(|| format!("无法加载场景文件: {}", path))?,
        None => {
            tracing::info!("未指定场景文件,使用内置演示场景");
            ScenarioConfigManager::builtin_demo()
        }
    };
    let scenario = manager.build()?;

    let result = evaluate_chain(&scenario.chain_input())?;

    println!("==================================================");
    println!("场景: {}", scenario.scenario_id);
    println!("原料: {} ({})", result.feedstock_name, scenario.feedstock.form);
    println!("粉末: {}", result.powder_name);
    println!("零件: {}", result.part_name);
    println!("==================================================");
    println!(
        "粉末制备 [回收 {}]: 原料 {:.4} kg/kg粉末, 副产品 {:.4}, 废弃 {:.4}",
        scenario.powderfab_policy,
        result.powderfab_flow.virgin_input_per_unit_output,
        result.powderfab_flow.coproduct_per_unit_output,
        result.powderfab_flow.waste_per_unit_output,
    );
    println!(
        "LPBF [回收 {}]: 粉末 {:.4} kg/kg零件, 副产品 {:.4}, 废弃 {:.4}",
        scenario.am_policy,
        result.am_flow.virgin_input_per_unit_output,
        result.am_flow.coproduct_per_unit_output,
        result.am_flow.waste_per_unit_output,
    );
    println!("原料 / 零件: {:.4} kg/kg", result.feedstock_per_kg_part);
    println!("零件 / 原料: {:.4} kg/kg", result.part_per_kg_feedstock);
    for metric in &result.lca_annotations {
        println!("LCA {}: {} {}", metric.name, metric.value, metric.unit);
    }

    if let Some(max_n) = cli.sweep {
        let stdout = std::io::stdout();

        println!();
        println!("# powder_fab sweep");
        let points = sweep_powderfab(&scenario.powderfab, max_n)?;
        write_sweep_csv(stdout.lock(), &points)?;

        println!();
        println!("# lpbf sweep");
        let points = sweep_am(&scenario.machine, &scenario.part, max_n)?;
        write_sweep_csv(stdout.lock(), &points)?;
    }

    Ok(())
}
