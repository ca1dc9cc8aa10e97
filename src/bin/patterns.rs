use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use design_patterns::config::{RunConfig, DEFAULT_CONFIG_PATH};
use design_patterns::runner::run_into;
use design_patterns::{logger, readme, Catalog, Category, Config, Pattern, Runner, Stdout};

#[derive(Parser)]
#[command(name = "patterns")]
#[command(about = "Browse, run and verify the design patterns catalog")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List patterns
    List {
        /// Only this category
        #[arg(long)]
        category: Option<Category>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one pattern's description, code and documented output
    Show { pattern: String },

    /// Run demos; without arguments runs the selection from the config file
    Run {
        /// Pattern slugs or names
        patterns: Vec<String>,

        /// Run every pattern in this category
        #[arg(long, conflicts_with = "patterns")]
        category: Option<Category>,

        /// Run the whole catalog
        #[arg(long, conflicts_with_all = ["patterns", "category"])]
        all: bool,

        /// Print each pattern's code before its output
        #[arg(long)]
        source: bool,

        /// One uncoloured transcript, without headings or indentation
        #[arg(long, conflicts_with = "source")]
        plain: bool,
    },

    /// Check every demo against its documented output
    Verify,

    /// Render the catalog as Markdown
    Readme {
        /// Output file, overrides the config file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    let color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
    colored::control::set_override(color);
    logger::init_cli_logger(args.verbose, color);

    match execute(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// `--all` beats `--category`, which beats explicit patterns; with none of
/// them the configured selection runs.
fn run_selection(
    patterns: Vec<String>,
    category: Option<Category>,
    all: bool,
    configured: &RunConfig,
) -> RunConfig {
    if all {
        RunConfig::default()
    } else if let Some(category) = category {
        RunConfig {
            categories: vec![category],
            patterns: Vec::new(),
        }
    } else if !patterns.is_empty() {
        RunConfig {
            categories: Vec::new(),
            patterns,
        }
    } else {
        configured.clone()
    }
}

/// Prints a mark per pattern and a summary. Returns false when any demo
/// differs from its documented output.
fn verify_patterns(runner: &Runner, patterns: &[&'static Pattern]) -> bool {
    let failures = runner.run_and_verify(patterns);
    if failures.is_empty() {
        println!("All {} patterns match their documented output", patterns.len());
        return true;
    }

    for failure in &failures {
        eprintln!("{failure}");
    }
    eprintln!(
        "{} of {} patterns differ from their documentation",
        failures.len(),
        patterns.len()
    );
    false
}

fn execute(args: Args) -> Result<ExitCode> {
    let catalog = Catalog::standard();
    let mut config = Config::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if args.no_color {
        config.output.color = false;
    }
    config.output.color = config.use_color();
    colored::control::set_override(config.output.color);
    config.validate(&catalog).context("invalid configuration")?;
    tracing::debug!(?config, "configuration loaded");

    match args.command {
        Command::List { category, json } => {
            if json {
                println!("{}", catalog.to_json(category)?);
            } else {
                for pattern in catalog.iter() {
                    if category.map_or(true, |c| c == pattern.category) {
                        let kind = pattern.category;
                        println!("{:<26} {:<12} {}", pattern.slug, kind, pattern.name);
                    }
                }
            }
        }
        Command::Show { pattern } => {
            let pattern = catalog.find(&pattern)?;
            println!("{}\n", pattern.name.bold());
            println!("{}\n", pattern.summary);
            println!("{}\n", pattern.listing());
            println!("{}", "Output:".bold());
            for line in pattern.expected {
                println!("  {line}");
            }
        }
        Command::Run {
            patterns,
            category,
            all,
            source,
            plain,
        } => {
            let run = run_selection(patterns, category, all, &config.run);
            let selection = catalog.select(&run)?;
            if plain {
                run_into(&selection, &mut Stdout::new(false));
            } else {
                let runner = Runner::new(&config.output);
                let runner = runner.show_source(source || config.output.show_source);
                runner.run_all(&selection);
            }
        }
        Command::Verify => {
            let all: Vec<_> = catalog.iter().collect();
            if !verify_patterns(&Runner::new(&config.output), &all) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Readme { output } => {
            if let Some(path) = output {
                config.readme.path = path;
            }
            let written = readme::write_readme(&config.readme, &catalog)?;
            println!("Wrote {}", written.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use design_patterns::behavioral::strategy;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("patterns").chain(argv.iter().copied()))
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let argv = ["run", "strategy", "--no-color", "-v", "--config", "cars.toml"];
        let args = parse(&argv).unwrap();
        assert!(args.no_color);
        assert!(args.verbose);
        assert_eq!(args.config, PathBuf::from("cars.toml"));
        assert!(matches!(
            args.command,
            Command::Run { ref patterns, .. } if patterns == &["strategy"]
        ));
    }

    #[test]
    fn test_global_flags_before_subcommand() {
        let args = parse(&["--no-color", "verify"]).unwrap();
        assert!(args.no_color);
        assert!(!args.verbose);
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_run_conflicts() {
        let err = parse(&["run", "strategy", "--all"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = parse(&["run", "--category", "structural", "--all"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = parse(&["run", "proxy", "--category", "structural"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = parse(&["run", "--plain", "--source"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_category_argument() {
        let args = parse(&["list", "--category", "Behavioural"]).unwrap();
        assert!(matches!(
            args.command,
            Command::List { category: Some(Category::Behavioral), json: false }
        ));

        let err = parse(&["list", "--category", "functional"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_run_selection_precedence() {
        let configured = RunConfig {
            categories: Vec::new(),
            patterns: vec!["memento".to_string()],
        };
        let named = || vec!["proxy".to_string()];

        let run = run_selection(named(), Some(Category::Creational), true, &configured);
        assert_eq!(run, RunConfig::default());

        let run = run_selection(named(), Some(Category::Creational), false, &configured);
        assert_eq!(run.categories, vec![Category::Creational]);
        assert!(run.patterns.is_empty());

        let run = run_selection(named(), None, false, &configured);
        assert!(run.categories.is_empty());
        assert_eq!(run.patterns, named());

        let run = run_selection(Vec::new(), None, false, &configured);
        assert_eq!(run, configured);
    }

    static MISDOCUMENTED: Pattern = Pattern {
        slug: "strategy",
        name: "Strategy",
        category: Category::Behavioral,
        summary: "",
        source: "",
        expected: &["50000", "42500", "30000"],
        demo: strategy::demo,
    };

    #[test]
    fn test_verify_fails_on_mismatch() {
        let runner = Runner::default().color(false);
        assert!(!verify_patterns(&runner, &[&MISDOCUMENTED]));
    }

    #[test]
    fn test_verify_passes_standard_catalog() {
        let catalog = Catalog::standard();
        let all: Vec<_> = catalog.iter().collect();
        assert!(verify_patterns(&Runner::default().color(false), &all));
    }
}
