use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use gokarts::config::{DEFAULT_DATABASE_URL, DEFAULT_GEMINI_MODEL, GenerationConfig};
use gokarts::controllers::{ShoppingListAggregator, generate_ingredients};
use gokarts::generation::GeminiClient;
use gokarts::models::IngredientLine;
use gokarts::parsing;
use gokarts::session::{CommitOutcome, ParsedSelection};
use gokarts::storage::SqliteStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Turn dishes into a shopping list")]
struct Cli {
    #[arg(long, env = "GOKARTS_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask Gemini for a dish's ingredients
    Generate {
        dish: String,

        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        gemini_api_key: String,

        #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
        gemini_model: String,

        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Read a saved reply from a file instead of calling Gemini
    Parse {
        file: PathBuf,

        #[arg(long)]
        dish: String,

        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Print the shopping list
    List,
    /// Empty the shopping list
    Clear,
}

#[derive(Args, Debug)]
struct SelectionArgs {
    /// Ingredient number to add, as printed (repeatable)
    #[arg(long = "select", value_name = "N")]
    select: Vec<usize>,

    /// Add every ingredient
    #[arg(long, conflicts_with = "select")]
    all: bool,
}

impl SelectionArgs {
    fn is_empty(&self) -> bool {
        !self.all && self.select.is_empty()
    }

    /// Flag the requested lines; numbers are 1-based as printed
    fn apply(&self, selection: &mut ParsedSelection) -> gokarts::error::Result<()> {
        if self.all {
            selection.select_all();
            Ok(())
        } else {
            selection.select_numbered(&self.select)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing()?;
    let cli = Cli::parse();

    let store = SqliteStore::connect(&cli.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", cli.database_url))?;
    let aggregator = ShoppingListAggregator::new(store);

    match cli.command {
        Command::Generate {
            dish,
            gemini_api_key,
            gemini_model,
            selection,
        } => {
            let config = GenerationConfig::new(gemini_api_key).with_model(gemini_model);
            let client = GeminiClient::new(&config);

            // Person-facing message stays generic; details are in the log
            let lines = match generate_ingredients(&client, &dish).await {
                Ok(lines) => lines,
                Err(e) => {
                    tracing::error!(error = %e, "ingredient generation failed");
                    bail!("An error occurred while fetching the recipe.");
                }
            };
            review_and_commit(&aggregator, &dish, lines, &selection).await?;
        }
        Command::Parse {
            file,
            dish,
            selection,
        } => {
            let reply = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            review_and_commit(&aggregator, &dish, parsing::produce(&reply), &selection).await?;
        }
        Command::List => {
            let list = aggregator.load().await;
            if list.is_empty() {
                println!("Your shopping list is empty.");
            }
            for (i, item) in list.iter().enumerate() {
                println!("{:>3}. {}", i + 1, item);
            }
        }
        Command::Clear => {
            aggregator.clear().await?;
            println!("Shopping list cleared.");
        }
    }

    Ok(())
}

async fn review_and_commit(
    aggregator: &ShoppingListAggregator<SqliteStore>,
    dish: &str,
    lines: Vec<IngredientLine>,
    args: &SelectionArgs,
) -> anyhow::Result<()> {
    if lines.is_empty() {
        println!("No ingredients found for {}.", dish);
        return Ok(());
    }

    println!("Ingredients for {}:", dish);
    for (i, line) in lines.iter().enumerate() {
        println!("{:>3}. {} ({})", i + 1, line.name, line.quantity);
    }

    if args.is_empty() {
        return Ok(());
    }

    let mut selection = ParsedSelection::new(dish, lines);
    args.apply(&mut selection)?;

    match selection.commit(aggregator).await? {
        CommitOutcome::Committed(committed) => {
            println!(
                "Added {} item(s) for {}. Your list now has {} item(s).",
                committed.added().len(),
                committed.dish(),
                committed.list().len()
            );
        }
        CommitOutcome::NothingSelected(_) => {
            println!("Please select at least one ingredient.");
        }
    }

    Ok(())
}

fn setup_tracing() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gokarts=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set up tracing: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn curry() -> ParsedSelection {
        ParsedSelection::new(
            "Curry",
            parsing::produce("1. Chicken (500 g)\n2. Onion (150 g)\n3. Garam masala"),
        )
    }

    fn args(select: &[usize], all: bool) -> SelectionArgs {
        SelectionArgs {
            select: select.to_vec(),
            all,
        }
    }

    #[rstest]
    #[case(args(&[1], false), &["Chicken"])]
    #[case(args(&[3, 2], false), &["Onion", "Garam masala"])]
    #[case(args(&[], true), &["Chicken", "Onion", "Garam masala"])]
    #[case(args(&[], false), &[])]
    fn test_apply_selection(#[case] args: SelectionArgs, #[case] expected: &[&str]) {
        let mut selection = curry();

        args.apply(&mut selection).expect("selection should apply");

        let names: Vec<String> = selection.selected().into_iter().map(|l| l.name).collect();
        assert_eq!(names, expected);
    }

    #[rstest]
    #[case(args(&[0], false), 0)]
    #[case(args(&[4], false), 4)]
    #[case(args(&[2, 7], false), 7)]
    fn test_apply_selection_rejects_unknown_numbers(
        #[case] args: SelectionArgs,
        #[case] missing: usize,
    ) {
        let mut selection = curry();

        let result = args.apply(&mut selection);

        assert!(
            matches!(result, Err(gokarts::error::GoKartsError::NoSuchIngredient(n)) if n == missing)
        );
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn test_cli_parses_selection_flags() {
        let cli = Cli::try_parse_from([
            "gokarts", "parse", "reply.txt", "--dish", "Curry", "--select", "1", "--select", "3",
        ])
        .expect("arguments should parse");

        let Command::Parse { selection, .. } = cli.command else {
            panic!("Expected the parse subcommand");
        };
        assert_eq!(selection.select, vec![1, 3]);
        assert!(!selection.all);
    }

    #[test]
    fn test_cli_rejects_all_with_select() {
        let result = Cli::try_parse_from([
            "gokarts", "parse", "reply.txt", "--dish", "Curry", "--all", "--select", "1",
        ]);

        assert!(result.is_err());
    }
}
