use anyhow::Context;
use bazi_chart::adapters::http::chart_to_json;
use bazi_chart::utils::logger;
use bazi_chart::{Chart, ChartEngine, CliConfig};
use clap::Parser;

fn print_table(chart: &Chart) {
    let rows = [
        ("Year", chart.pillars.year),
        ("Month", chart.pillars.month),
        ("Day", chart.pillars.day),
        ("Hour", chart.pillars.hour),
    ];
    for (label, pillar) in rows {
        println!(
            "{:<6} {}  {:<10} {}",
            label,
            pillar,
            pillar.romanized(),
            pillar.stem.element()
        );
    }
    println!();
    println!(
        "Day master: {} ({}, {})",
        chart.day_master,
        chart.day_master.name(),
        chart.day_master_element
    );
    let counts: Vec<String> = chart
        .five_elements
        .iter()
        .map(|(element, count)| format!("{} {}", element, count))
        .collect();
    println!("Elements:   {}", counts.join(", "));
    println!("Missing:    {}", chart.missing_element);
}

fn run(config: &CliConfig, engine: &ChartEngine) -> anyhow::Result<()> {
    let input = config.birth_input();
    let chart = engine
        .calculate(&input)
        .with_context(|| format!("cannot compute chart for {}-{}-{}", input.year, input.month, input.day))?;

    if config.json {
        let value = chart_to_json(&chart)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print_table(&chart);
    }
    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    // 設定檔錯誤時 logger 尚未初始化，直接輸出到 stderr
    let settings = match config.load_file().and_then(|file| config.settings(file.as_ref())) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    logger::init_cli_logger(&settings.log_level);
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Resolved settings: {:?}", settings);

    let engine = ChartEngine::from_config(&settings);

    if let Err(e) = run(&config, &engine) {
        tracing::error!("❌ Chart calculation failed: {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
