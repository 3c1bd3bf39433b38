use anyhow::{Context, Result};
use clap::Parser;
use cuedoc_config::Config;
use cuedoc_engine::{
    CodeStyle, CommonMarkRenderer, Dispatcher, PageTemplate, Transformer, discover, schema_pattern,
};
use std::path::PathBuf;
use std::process;

/// Generate interleaved HTML documentation from CUE schema comments
#[derive(Debug, Parser)]
#[command(name = "cuedoc", version, about)]
struct Cli {
    /// Directory searched for schema files [default: .]
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    input: Option<PathBuf>,

    /// Directory the pages are written under [default: dist]
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default()?;
    log::debug!("Config path: {}", Config::config_path().display());

    let input = cli.input.unwrap_or_else(|| config.input_path.clone());
    let output = cli.output.unwrap_or_else(|| config.output_path.clone());

    // The template is parsed before any file is touched
    let template = PageTemplate::load(&config.template_path)?;
    let pattern = schema_pattern(&config.pattern)?;
    let discovery = discover(&input, &pattern)
        .with_context(|| format!("Discovery failed for {}", input.display()))?;

    let transformer = Transformer::new(
        CommonMarkRenderer::default(),
        CodeStyle {
            language: config.code_language.clone(),
            escape: config.escape_code,
        },
    );
    let written = Dispatcher::new(&transformer, &template, &discovery.root, &output)
        .parallel(config.parallel)
        .run(&discovery.files)?;

    log::info!("Wrote {} page(s) to {}", written.len(), output.display());
    Ok(())
}
