use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
enum AppError {
    #[error(transparent)]
    Model(#[from] sso_model::ModelError),

    #[error(transparent)]
    Graph(#[from] sso_graph::GraphError),

    #[error(transparent)]
    Turtle(#[from] sso_turtle::TurtleError),
}

#[derive(Parser)]
#[command(name = "sso-cli")]
#[command(about = "Convert OSAM structural-analysis documents to SSO Turtle graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an OSAM JSON document to a Turtle file
    Convert {
        /// Path to the OSAM JSON document
        input: PathBuf,
        /// Output Turtle file (defaults to the input path with a .ttl extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Parse a document and build the graph without writing output
    Validate {
        /// Path to the OSAM JSON document
        input: PathBuf,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Convert { input, output } => {
            let output = output.unwrap_or_else(|| input.with_extension("ttl"));
            cmd_convert(&input, &output)
        }
        Commands::Validate { input } => cmd_validate(&input),
    }
}

fn cmd_convert(input: &Path, output: &Path) -> AppResult<()> {
    let doc = sso_model::load_json(input)?;
    info!(name = %doc.name, "document loaded");

    let graph = sso_graph::build_graph(&doc)?;
    sso_turtle::write_to_file(output, &graph)?;

    println!(
        "✓ Converted {} ({} nodes, {} statements) -> {}",
        input.display(),
        graph.nodes().len(),
        graph.statements().len(),
        output.display()
    );
    Ok(())
}

fn cmd_validate(input: &Path) -> AppResult<()> {
    let doc = sso_model::load_json(input)?;
    let graph = sso_graph::build_graph(&doc)?;

    println!("✓ Document is convertible: {}", input.display());
    println!("  Materials: {}", doc.materials.len());
    println!("  Sections: {}", doc.sections.len());
    println!("  Objects: {}", doc.objects.len());
    println!("  Instances: {}", doc.assembly.instances.len());
    println!("  Boundary conditions: {}", doc.bc.len());
    println!("  Load cases: {}", doc.load_cases.len());
    println!("  Loads: {}", doc.loads.len());
    println!("  Graph statements: {}", graph.statements().len());
    Ok(())
}
