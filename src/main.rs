use clap::{Parser as ClapParser, Subcommand};
use esdsl::cli::{self, CliError, ExampleOptions};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "esdsl")]
#[command(about = "esdsl - Browse Elasticsearch DSL builders and render example request bodies")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List documentation categories and clauses
    Docs,

    /// Show documentation for a category or a clause
    Doc {
        /// Category or clause name (use 'esdsl docs' to list them)
        name: String,
    },

    /// Render the example payload of a clause
    Example {
        /// Clause name, optionally prefixed: query/terms, agg/terms
        name: String,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { name } => cli::get_doc(&name).map(|content| print!("{}", content)),
        Commands::Example { name, pretty } => run_example(name, pretty),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_example(name: String, pretty: bool) -> Result<(), CliError> {
    let options = ExampleOptions { name, pretty };
    let json = cli::execute_example(&options)?;
    println!("{}", json);
    Ok(())
}
