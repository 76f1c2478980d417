use icon_canvas::config::restore::{self, RestoreToolConfig};
use icon_canvas::diagnostics::RestoreReport;
use icon_canvas::image::io::{load_rgb_image, save_png, write_json_file};
use icon_canvas::image::split_grid;
use icon_canvas::restorer::{restore_batch, CanvasRestorer};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = restore::load_config(Path::new(&config_path))?;

    let input = load_rgb_image(&config.input)?;
    let images = match &config.grid {
        Some(layout) => split_grid(&input, layout)?,
        None => vec![input],
    };

    let restorer = CanvasRestorer::new(config.resolve_params());
    let results = restore_batch(&restorer, images);

    let mut entries = Vec::with_capacity(results.len());
    for (index, result) in results.iter().enumerate() {
        let name = config.output_name(index);
        let path = config.output.dir.join(format!("{name}.png"));
        save_png(&result.image, &path)?;
        println!("{name}: {}", result.report.summary());
        for degradation in &result.report.degradations {
            println!("  warning: {degradation}");
        }
        entries.push(ReportEntry {
            name,
            output: path.display().to_string(),
            report: &result.report,
        });
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &ToolReport { config: &config_path, icons: entries })?;
        println!("Report written to {}", path.display());
    }
    print_params(&config);
    Ok(())
}

fn print_params(config: &RestoreToolConfig) {
    let p = config.resolve_params();
    println!(
        "params: threshold={:.1} margin_ratio={:.3} depth={} step={} corners={:?}",
        p.background_threshold,
        p.margin_ratio,
        p.edge_sampling.depth,
        p.edge_sampling.step,
        p.corner_fill
    );
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolReport<'a> {
    config: &'a str,
    icons: Vec<ReportEntry<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportEntry<'a> {
    name: String,
    output: String,
    report: &'a RestoreReport,
}

fn usage() -> String {
    "Usage: restore_icon <config.json>".to_string()
}
