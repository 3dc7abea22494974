use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use mix_app::{AppError, AppResult, design_service, project_service, render};
use mix_design::{DesignOptions, DesignStage, MixState};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "mix-cli")]
#[command(about = "Preliminary concrete mix proportioning", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Design a mix from a design file
    Design {
        /// Path to the design file (.yaml, .yml or .json)
        design_path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Smallest accepted slump in mm
        #[arg(long)]
        min_slump: Option<f64>,
        /// Largest accepted slump in mm
        #[arg(long)]
        max_slump: Option<f64>,
        /// Print each design stage as it completes
        #[arg(long)]
        stages: bool,
    },
    /// Check that a design file loads and its inputs would be accepted
    Validate {
        /// Path to the design file
        design_path: PathBuf,
        /// Smallest accepted slump in mm
        #[arg(long)]
        min_slump: Option<f64>,
        /// Largest accepted slump in mm
        #[arg(long)]
        max_slump: Option<f64>,
    },
    /// List concrete grades
    Grades {
        /// Only grades whose name contains this text
        query: Option<String>,
    },
    /// List built-in exposure conditions
    Exposures,
    /// Write a sample design file
    Template {
        /// Output path (.yaml or .json); defaults to YAML on stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Include a superplasticizer and pumped placing
        #[arg(long)]
        admixture: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> AppResult<()> {
    match command {
        Commands::Design {
            design_path,
            format,
            min_slump,
            max_slump,
            stages,
        } => cmd_design(
            &design_path,
            format,
            &slump_options(min_slump, max_slump),
            stages,
        ),
        Commands::Validate {
            design_path,
            min_slump,
            max_slump,
        } => cmd_validate(&design_path, &slump_options(min_slump, max_slump)),
        Commands::Grades { query } => cmd_grades(query.as_deref().unwrap_or("")),
        Commands::Exposures => cmd_exposures(),
        Commands::Template { output, admixture } => cmd_template(output.as_deref(), admixture),
    }
}

fn slump_options(min_slump: Option<f64>, max_slump: Option<f64>) -> DesignOptions {
    let mut options = DesignOptions::default();
    if let Some(v) = min_slump {
        options.min_slump_mm = v;
    }
    if let Some(v) = max_slump {
        options.max_slump_mm = v;
    }
    options
}

fn cmd_design(
    design_path: &Path,
    format: OutputFormat,
    options: &DesignOptions,
    stages: bool,
) -> AppResult<()> {
    let mut print_stage = |stage: DesignStage, _state: &MixState| {
        if stage != DesignStage::Completed {
            println!("✓ {}", stage.label());
        }
    };
    let progress: Option<&mut dyn FnMut(DesignStage, &MixState)> = if stages {
        Some(&mut print_stage)
    } else {
        None
    };

    let outcome = design_service::run_design_file_with_progress(design_path, options, progress)?;

    match format {
        OutputFormat::Json => {
            println!("{}", render::render_json(&outcome)?);
            // Still exit non-zero on failure; the JSON already carries the details
            outcome.report()?;
        }
        OutputFormat::Text => {
            let report = outcome.report()?;
            println!("Mix design: {}", outcome.name);
            println!();
            println!("{}", render::render_text(report));
        }
    }
    Ok(())
}

fn cmd_validate(design_path: &Path, options: &DesignOptions) -> AppResult<()> {
    println!("Validating design file: {}", design_path.display());
    let file = project_service::load_design_file(design_path)?;
    design_service::check_design_file(&file, options)?;
    println!("✓ Design file is valid");
    Ok(())
}

fn cmd_grades(query: &str) -> AppResult<()> {
    let grades = design_service::list_grades(query);
    if grades.is_empty() {
        println!("No grades match '{}'", query);
        return Ok(());
    }

    println!("{:<6} {:>10} {:>14} {:>12}", "Grade", "fck [MPa]", "Std dev [MPa]", "Margin [MPa]");
    for g in grades {
        println!(
            "{:<6} {:>10.1} {:>14.1} {:>12.1}",
            g.name, g.fck_mpa, g.std_dev_mpa, g.margin_mpa
        );
    }
    Ok(())
}

fn cmd_exposures() -> AppResult<()> {
    println!("{:<12} {:>8} {:>22}", "Exposure", "Max w/c", "Min cement [kg/m³]");
    for e in design_service::list_exposures() {
        println!(
            "{:<12} {:>8.2} {:>22.0}",
            e.name, e.max_wc_ratio, e.min_cement_kg_m3
        );
    }
    Ok(())
}

fn cmd_template(output: Option<&Path>, admixture: bool) -> AppResult<()> {
    let file = if admixture {
        project_service::template_admixture_design_file()
    } else {
        project_service::template_design_file()
    };

    match output {
        Some(path) => {
            project_service::save_design_file(path, &file)?;
            println!("✓ Wrote {}", path.display());
        }
        None => {
            let yaml =
                serde_yaml::to_string(&file).map_err(|e| AppError::Serialization(e.to_string()))?;
            print!("{yaml}");
        }
    }
    Ok(())
}
