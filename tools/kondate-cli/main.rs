use clap::{Parser, Subcommand};
use kondate::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

/// Inspect a recipe catalog from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Only reject duplicate required items when they are listed next to each other
    #[arg(long, global = true)]
    adjacent_duplicates: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize a handwritten name
    Parse { input: String },
    /// Load a catalog file and report which entries are admitted
    Check {
        /// Path to a JSON array of entries
        catalog_path: String,
    },
    /// Print the flattened ingredient summary of a recipe
    Summary {
        /// Path to a JSON array of entries
        catalog_path: String,
        /// Recipe name, normalized before lookup
        name: String,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load a catalog and query recipes interactively
    Interactive {
        /// Path to a JSON array of entries
        catalog_path: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mode = if cli.adjacent_duplicates {
        DuplicateCheck::Adjacent
    } else {
        DuplicateCheck::Pairwise
    };

    match cli.command {
        Command::Parse { input } => match parse_handwriting(&input) {
            Some(name) => println!("{}", name),
            None => exit_with_error(&format!("'{}' is not a valid name", input)),
        },
        Command::Check { catalog_path } => run_check(&catalog_path, mode),
        Command::Summary {
            catalog_path,
            name,
            json,
        } => {
            let cookbook = load_cookbook(&catalog_path, mode);
            run_summary(&cookbook, &name, json);
        }
        Command::Interactive { catalog_path } => run_interactive(catalog_path, mode),
    }
}

fn load_file(path: &str) -> CatalogFile {
    CatalogFile::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn load_cookbook(path: &str, mode: DuplicateCheck) -> Cookbook {
    let start = Instant::now();
    let cookbook = Cookbook::builder().duplicate_check(mode).build();
    let admitted = cookbook
        .seed(load_file(path))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog '{}': {}", path, e)));
    eprintln!(
        "Loaded {} entries from '{}' in {:?}",
        admitted,
        path,
        start.elapsed()
    );
    cookbook
}

/// Admits each entry independently and reports every verdict instead of stopping early.
fn run_check(path: &str, mode: DuplicateCheck) {
    let file = load_file(path);
    let cookbook = Cookbook::builder().duplicate_check(mode).build();
    let total = file.entries.len();
    let mut rejected = 0;

    for request in file.entries {
        let label = format!("{} '{}'", request.kind, request.name);
        match cookbook.create_entry(request) {
            Ok(()) => println!("  ok       {}", label),
            Err(e) => {
                rejected += 1;
                println!("  rejected {}: {}", label, e);
            }
        }
    }

    println!("\n--- Catalog Summary ---");
    println!("Entries:  {}", total);
    println!("Admitted: {}", total - rejected);
    println!("Rejected: {}", rejected);

    let names = cookbook.store().names();
    let view = cookbook.store().view();
    let unresolvable: Vec<(String, ResolveError)> = names
        .into_iter()
        .filter(|name| matches!(view.entry(name), Some(CatalogEntry::Recipe(_))))
        .filter_map(|name| resolve(&name, &view).err().map(|e| (name, e)))
        .collect();
    drop(view);
    for (name, e) in &unresolvable {
        println!("  unresolvable recipe '{}': {}", name, e);
    }

    if rejected > 0 || !unresolvable.is_empty() {
        std::process::exit(1);
    }
}

fn run_summary(cookbook: &Cookbook, name: &str, json: bool) {
    let start = Instant::now();
    let summary = cookbook
        .summarize(name)
        .unwrap_or_else(|e| exit_with_error(&format!("Summary failed: {}", e)));
    let duration = start.elapsed();

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{}", text),
            Err(e) => exit_with_error(&format!("Failed to serialize summary: {}", e)),
        }
    } else {
        print_summary(&summary);
        println!("Resolved in {:?}", duration);
    }
}

fn print_summary(summary: &RecipeSummary) {
    println!("\nRecipe: {}", summary.name);
    println!("Cook time: {}", summary.cook_time);
    println!("Ingredients:");
    for ingredient in &summary.ingredients {
        println!("  -> {} x{}", ingredient.name, ingredient.quantity);
    }
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(catalog_path: Option<String>, mode: DuplicateCheck) {
    println!("--- Kondate Interactive Mode ---");

    let path = catalog_path
        .unwrap_or_else(|| prompt_for_input("Enter catalog path", Some("data/catalog.json")));
    let cookbook = load_cookbook(&path, mode);

    loop {
        let name = prompt_for_input("Recipe to summarize (empty to quit)", None);
        if name.is_empty() {
            break;
        }
        match cookbook.summarize(&name) {
            Ok(summary) => print_summary(&summary),
            Err(e) => println!("  -> {}", e),
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }
    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
