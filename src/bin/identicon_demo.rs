use identicon::config::demo::{load_config, DemoConfig, OutputConfig};
use identicon::diagnostics::PipelineTrace;
use identicon::io::write_json_file;
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "identicon_demo".to_string());
    let config = parse_cli(&program)?;

    let (rendered, trace) =
        PipelineTrace::capture(&config.input).map_err(|e| e.to_string())?;
    let path = rendered
        .save(config.output_dir(), config.output_name())
        .map_err(|e| e.to_string())?;
    println!("identicon written to {}", path.display());

    if let Some(trace_path) = &config.output.trace_out {
        write_json_file(trace_path, &trace).map_err(|e| e.to_string())?;
        println!("trace written to {}", trace_path.display());
    }

    print_text_summary(&trace);
    Ok(())
}

fn parse_cli(program: &str) -> Result<DemoConfig, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [flag, path] if flag == "--config" => load_config(path.as_ref()).map_err(|e| e.to_string()),
        [input] => Ok(demo_config(input, None)),
        [input, out_dir] => Ok(demo_config(input, Some(PathBuf::from(out_dir)))),
        _ => Err(format!(
            "Usage: {program} <input> [out_dir]\n       {program} --config <config.json>"
        )),
    }
}

fn demo_config(input: &str, dir: Option<PathBuf>) -> DemoConfig {
    DemoConfig {
        input: input.to_string(),
        output: OutputConfig {
            dir,
            name: None,
            trace_out: None,
        },
    }
}

fn print_text_summary(trace: &PipelineTrace) {
    println!("Pipeline summary");
    println!("  input: {}", trace.input);
    println!(
        "  color: ({}, {}, {})",
        trace.color.r, trace.color.g, trace.color.b
    );
    println!("  cells: {}/{} painted", trace.cells_painted, trace.cells_total);
    println!("  canvas: {0}x{0}", trace.canvas_side);
    println!("  png_bytes: {}", trace.png_bytes);
    println!("  elapsed_ms: {:.3}", trace.elapsed_ms);
}
