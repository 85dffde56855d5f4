//! # breeze
//!
//! Checks Breeze configuration documents before a generator runs: loads the
//! document, resolves plugins, merges typography overrides and expands
//! content patterns.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use breeze_config::{
    BuildPlan, ConfigDocument, LoadOptions, PlanContext, PluginRegistry, Warning,
    CONFIG_FILE_NAMES,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "breeze")]
#[command(about = "Check and inspect Breeze configuration documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Verbose output level (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the document, resolve plugins and content, report problems
    Check(DocumentArgs),

    /// List the plugins this build knows about
    Plugins,

    /// List the files matched by the content patterns
    Content(DocumentArgs),

    /// Print the merged typography stylesheet
    Resolve {
        #[command(flatten)]
        doc: DocumentArgs,

        /// Only print this variant (DEFAULT, lg, ...)
        #[arg(long)]
        variant: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct DocumentArgs {
    /// Configuration file (default: breeze.config.yaml in the working directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Working directory for content patterns
    #[arg(long)]
    cwd: Option<PathBuf>,

    /// Reject unrecognized top-level keys
    #[arg(long)]
    strict: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("{} logging not initialized: {}", style("warning:").yellow().bold(), err);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Check(args) => check(&args),
        Command::Plugins => {
            list_plugins(&PluginRegistry::with_builtins());
            Ok(())
        }
        Command::Content(args) => content(&args),
        Command::Resolve {
            doc,
            variant,
            format,
        } => resolve(&doc, variant.as_deref(), format),
    }
}

/// A loaded document together with the directory content is resolved in.
struct Loaded {
    doc: ConfigDocument,
    cwd: PathBuf,
}

impl Loaded {
    fn plan(&self) -> Result<BuildPlan> {
        BuildPlan::prepare(
            &self.doc,
            &PluginRegistry::with_builtins(),
            &PlanContext::new(&self.cwd),
        )
        .context("failed to prepare build")
    }
}

fn load(args: &DocumentArgs) -> Result<Loaded> {
    let cwd = match &args.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("cannot determine working directory")?,
    };

    let path = match &args.config {
        Some(path) => path.clone(),
        None => match ConfigDocument::discover(&cwd) {
            Some(found) => found,
            None => bail!(
                "no config file found in {} (looked for {})",
                cwd.display(),
                CONFIG_FILE_NAMES.join(", ")
            ),
        },
    };

    let options = if args.strict {
        LoadOptions::strict()
    } else {
        LoadOptions::new()
    };
    let doc = ConfigDocument::from_file_with(&path, options)
        .with_context(|| format!("failed to load {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded config");

    Ok(Loaded { doc, cwd })
}

fn check(args: &DocumentArgs) -> Result<()> {
    let loaded = load(args)?;
    let plan = loaded.plan()?;

    if let Some(path) = loaded.doc.source_path() {
        println!("{} {}", style("config").bold(), path.display());
    }
    for key in loaded.doc.ignored_keys() {
        println!("  {} ignored key '{}'", style("·").dim(), key);
    }

    println!("{} {}", style("plugins").bold(), plan.plugins().len());
    for id in plan.plugins() {
        println!("  {}", id);
    }

    match plan.typography() {
        Some(sheet) => println!(
            "{} {} rules in {} variants ({} overrides)",
            style("typography").bold(),
            sheet.len(),
            sheet.variants().count(),
            loaded.doc.typography().len()
        ),
        None => println!("{} not loaded", style("typography").bold()),
    }

    println!("{} {} files", style("content").bold(), plan.files().len());
    print_warnings(plan.warnings());

    println!("{}", style("ok").green().bold());
    Ok(())
}

fn list_plugins(registry: &PluginRegistry) {
    for plugin in registry.iter() {
        let mut line = style(plugin.id()).bold().to_string();
        if !plugin.aliases().is_empty() {
            line.push_str(&format!(" (alias: {})", plugin.aliases().join(", ")));
        }
        if let Some(key) = plugin.theme_key() {
            line.push_str(&format!(" reads theme.extend.{}", key));
        }
        println!("{}", line);
    }
}

fn content(args: &DocumentArgs) -> Result<()> {
    let loaded = load(args)?;
    let plan = loaded.plan()?;

    for file in plan.files() {
        println!("{}", display_relative(file, &loaded.cwd).display());
    }
    print_warnings(plan.warnings());
    Ok(())
}

fn resolve(args: &DocumentArgs, variant: Option<&str>, format: Format) -> Result<()> {
    let loaded = load(args)?;
    let plan = loaded.plan()?;

    let Some(sheet) = plan.typography() else {
        bail!("no loaded plugin provides a typography stylesheet");
    };

    let text = match variant {
        Some(name) => {
            let rules = sheet
                .variant(name)
                .with_context(|| format!("variant '{}' has no rules", name))?;
            render(rules, format)?
        }
        None => render(sheet, format)?,
    };
    print!("{}", text);
    Ok(())
}

fn render<T: serde::Serialize>(value: &T, format: Format) -> Result<String> {
    match format {
        Format::Yaml => serde_yaml::to_string(value).context("failed to write YAML"),
        Format::Json => serde_json::to_string_pretty(value)
            .map(|json| json + "\n")
            .context("failed to write JSON"),
    }
}

fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("{} {}", style("warning:").yellow().bold(), warning);
    }
}

fn display_relative<'a>(path: &'a Path, base: &Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}
