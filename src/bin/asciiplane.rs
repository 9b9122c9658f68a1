// structure of the program
// ASCII diagram file as input
// |
// Parse it into segments, anchors and bullets
// |
// Build the induced planar graph
// |
// Extract minimal cycles and filaments
// |
// Print a summary, or the full structure as JSON with --json

use clap::Parser;
use planargrid::{extract_all_primitives, fileoperation, graph_from_segments, parse_text_lines};
use std::path::PathBuf;
use std::process::ExitCode;

/// Parses an ASCII box-and-line diagram and reports its geometric structure.
#[derive(Debug, Parser)]
#[command(name = "asciiplane", version, about)]
struct Args {
    /// Path to the diagram file to parse. Omit to read from stdin.
    path: Option<PathBuf>,

    /// Print the full parse result and extraction output as JSON instead
    /// of a one-line summary.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let lines = match &args.path {
        Some(path) => fileoperation::load_lines(path),
        None => fileoperation::read_stdin_lines(),
    };
    let lines = match lines {
        Ok(lines) => lines,
        Err(why) => {
            eprintln!("Error: {why}");
            return ExitCode::FAILURE;
        }
    };

    let source = args.path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "<stdin>".to_string());
    log::debug!("parsed {} line(s) from {source}", lines.len());
    let parse_result = parse_text_lines(&lines);
    let graph = graph_from_segments(&parse_result);
    let (cycles, filaments) = extract_all_primitives(graph);

    if args.json {
        // Point isn't a string, so it can't be a JSON object key directly;
        // flatten the anchor map to pairs instead.
        let anchors: Vec<(planargrid::Point, planargrid::AnchorKind)> =
            parse_result.anchors.iter().map(|(p, k)| (*p, *k)).collect();
        let report = serde_json::json!({
            "anchors": anchors,
            "bullets": parse_result.bullets,
            "segments": parse_result.segments,
            "cycles": cycles,
            "filaments": filaments,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(why) => {
                eprintln!("Error: failed to serialize report: {why}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!(
            "{source}: {} segment(s), {} anchor(s), {} bullet(s), {} cycle(s), {} filament(s)",
            parse_result.segments.len(),
            parse_result.anchors.len(),
            parse_result.bullets.len(),
            cycles.len(),
            filaments.len(),
        );
    }

    ExitCode::SUCCESS
}
