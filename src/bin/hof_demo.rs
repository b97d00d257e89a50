use image_hof::config::load_config;
use image_hof::diagnostics::RunReport;
use image_hof::io::write_json_file;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let input = config.canvas.build();
    let pipeline = config.pipeline();
    let result = pipeline.run(&input);

    let report = RunReport::from_run(&input, &result);
    print_text_summary(&report);

    write_json_file(&config.output.summary_json, &report)?;
    println!(
        "\nSummary written to {}",
        config.output.summary_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: hof_demo <config.json>".to_string()
}

fn print_text_summary(report: &RunReport) {
    println!("Canvas {}x{}", report.input.width, report.input.height);
    for (name, summary) in [("input", &report.input), ("output", &report.output)] {
        let [r, g, b] = summary.mean_color;
        println!(
            "  {name}: grayish={}/{} ({:.1}%) mean=[{:.1} {:.1} {:.1}]",
            summary.grayish_pixels,
            summary.pixel_count,
            summary.grayish_ratio() * 100.0,
            r,
            g,
            b
        );
    }
    println!("\nTimings (ms): total={:.3}", report.timing.total_ms);
    for stage in &report.timing.stages {
        println!("  {}: {:.3}", stage.label, stage.elapsed_ms);
    }
}
