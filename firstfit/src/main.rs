use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use firstfit::config::FFConfig;
use firstfit::io::cli::Cli;
use firstfit::io::output::FFOutput;
use firstfit::opt::ff_optimizer::FFOptimizer;
use firstfit::{EPOCH, io};
use log::{info, warn};
use maskpack::io::export;
use maskpack::io::import::Importer;
use maskpack::io::svg::s_layout_to_svg;

fn main() -> Result<()> {
    LazyLock::force(&EPOCH);
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: FFConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    config.validate().context("invalid configuration")?;
    info!("Successfully parsed FFConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let importer = Importer::new(config.import_config);
    let instance = importer.import_instance(&ext_instance)?;

    info!(
        "[MAIN] instance {:?}: container {:?} with area {}, {} items with total area {}",
        ext_instance.name,
        instance.container.dim(),
        instance.container.area(),
        instance.items.len(),
        instance.total_item_area()
    );
    if instance.items.is_empty() {
        warn!("[MAIN] instance contains no items, the answer is false");
    }

    let mut optimizer = FFOptimizer::new(instance.clone(), config);
    let sol = optimizer.solve();
    let answer = !instance.items.is_empty() && sol.is_success();

    info!("[MAIN] answer: {answer} ({})", sol.verdict);

    {
        let output = FFOutput {
            instance: ext_instance,
            solution: export::export(&instance, &sol, *EPOCH),
            answer,
            n_candidates: optimizer.candidate_counter,
            config,
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    if let Some(s_layout) = &sol.layout_snapshot {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.svg"));
        let svg = s_layout_to_svg(s_layout, config.svg_draw_options, &sol.verdict.to_string());

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
