use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use spg_core::config::{self, CONFIG_FILE_NAME, SpgConfig};
use spg_core::ir::{Shape, ServiceIr, infer_shape};
use spg_core::parse;
use spg_core::transform::{GenerationRules, filter_operations, service_to_ir};
use spg_core::{DeclarationGenerator, GeneratedFile, NoShapes, ShapeSource};
use spg_docs::{DocsClient, extract_response_example};
use spg_dts::{DtsConfig, DtsGenerator};

#[derive(Parser)]
#[command(name = "spg", about = "Service-proxy declaration generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate declaration files from a directory of service documents
    Generate {
        /// Directory of service-definition JSON documents
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Validate a single service document
    Validate {
        /// Path to the service document
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Inspect the IR derived from a service document
    Inspect {
        /// Path to the service document
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new spg configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input } => cmd_generate(input),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "spg", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<SpgConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Collect document stems (file names without `.json`) from the input
/// directory, skipping configured stems, sorted for deterministic output.
fn scan_documents(input_dir: &Path, skip: &[String]) -> Result<Vec<String>> {
    let entries = fs::read_dir(input_dir)
        .with_context(|| format!("failed to read input directory {}", input_dir.display()))?;

    let mut stems = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        let Some(stem) = name.strip_suffix(".json") else {
            continue;
        };
        if skip.iter().any(|s| s == stem) {
            continue;
        }
        stems.push(stem.to_string());
    }

    stems.sort();
    Ok(stems)
}

/// A `ShapeSource` backed by remote documentation pages.
struct DocsShapeSource {
    client: DocsClient,
    ceiling: usize,
}

impl ShapeSource for DocsShapeSource {
    fn response_shape(&self, service_name: &str, method_name: &str) -> Option<Shape> {
        let page = match self.client.fetch_operation_page(service_name, method_name) {
            Ok(page) => page,
            Err(err) => {
                log::debug!("no documentation page for {service_name}.{method_name}: {err}");
                return None;
            }
        };
        match extract_response_example(&page) {
            Ok(example) => Some(infer_shape(&example, self.ceiling)),
            Err(err) => {
                log::warn!("{service_name}.{method_name}: {err}");
                None
            }
        }
    }
}

/// Build the shape source configured for this run. Any client build
/// failure degrades to the no-op source.
fn build_shape_source(cfg: &SpgConfig) -> Box<dyn ShapeSource> {
    let Some(docs) = cfg.docs.as_ref().filter(|d| !d.url_template.is_empty()) else {
        return Box::new(NoShapes);
    };
    match DocsClient::new(docs) {
        Ok(client) => Box::new(DocsShapeSource {
            client,
            ceiling: cfg.shape_ceiling,
        }),
        Err(err) => {
            log::warn!("documentation lookup disabled: {err}");
            Box::new(NoShapes)
        }
    }
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

fn cmd_generate(input: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input_dir = input.unwrap_or_else(|| PathBuf::from(&cfg.input));

    let stems = scan_documents(&input_dir, &cfg.skip_documents)?;
    let rules = GenerationRules::from_config(&cfg);
    let shapes = build_shape_source(&cfg);

    // One document's failure never prevents generation for the rest.
    let mut services: Vec<ServiceIr> = Vec::with_capacity(stems.len());
    for stem in &stems {
        let path = input_dir.join(format!("{stem}.json"));
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => {
                log::warn!("File does not exist: {}", path.display());
                continue;
            }
        };
        match parse::from_json(&content) {
            Ok(doc) => services.push(service_to_ir(&doc, &rules, shapes.as_ref())),
            Err(err) => {
                log::warn!("{stem}.json - {err}");
            }
        }
    }

    let dts_config = DtsConfig {
        file_prefix: cfg.file_prefix.clone(),
        extension: cfg.extension.clone(),
    };
    let files = DtsGenerator
        .generate(&services, &dts_config)
        .map_err(|e| anyhow::anyhow!(e))?;

    let output_dir = PathBuf::from(&cfg.output);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    eprintln!("Generating {} declarations → {}", services.len(), output_dir.display());
    write_files(&output_dir, &files)?;
    eprintln!("Generated {} files in {}", files.len(), output_dir.display());

    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let content = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let doc = parse::from_json(&content)?;

    let cfg = try_load_config()?.unwrap_or_default();
    let rules = GenerationRules::from_config(&cfg);
    let retained = filter_operations(&doc.service_name, &doc.operations, &rules);

    eprintln!("Valid service document: {}", doc.service_name);
    eprintln!("  Operations: {}", doc.operations.len());
    eprintln!("  Retained after filtering: {}", retained.len());

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let content = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let doc = parse::from_json(&content)?;

    let cfg = try_load_config()?.unwrap_or_default();
    let rules = GenerationRules::from_config(&cfg);
    let ir = service_to_ir(&doc, &rules, &NoShapes);

    let summary = build_inspect_summary(&ir);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(ir: &ServiceIr) -> serde_json::Value {
    let operations: Vec<serde_json::Value> = ir
        .operations
        .iter()
        .map(|op| {
            let params: Vec<serde_json::Value> = op
                .params
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "name": p.name,
                        "raw_type": p.raw_type,
                        "type": p.ts_type,
                    })
                })
                .collect();
            serde_json::json!({
                "name": op.name,
                "params": params,
            })
        })
        .collect();

    serde_json::json!({
        "service": ir.service_name,
        "operations": operations,
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
