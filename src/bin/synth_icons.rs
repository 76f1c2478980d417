use icon_canvas::config::synth;
use icon_canvas::image::io::{save_coverage_png, save_png};
use icon_canvas::synth::{emblem_coverage, synthesize_batch};
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
    let config = synth::load_config(Path::new(&config_path))?;
    let icons = config.resolve_icons()?;

    let specs: Vec<_> = icons.iter().map(|(_, spec)| spec.clone()).collect();
    let rendered = synthesize_batch(&specs);

    for ((name, spec), result) in icons.iter().zip(rendered) {
        let image = result.map_err(|e| format!("Failed to synthesize '{name}': {e}"))?;
        let path = config.output.dir.join(format!("icon_{name}.png"));
        save_png(&image, &path)?;
        println!("{name}: {}x{} -> {}", image.w, image.h, path.display());

        if let Some(dir) = &config.output.coverage_dir {
            let cov = emblem_coverage(image.w, image.h, &spec.emblem);
            save_coverage_png(cov.mask(), &dir.join(format!("emblem_{name}.png")))?;
        }
    }
    Ok(())
}

fn usage() -> String {
    "Usage: synth_icons <config.json>".to_string()
}
