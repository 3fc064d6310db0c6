use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::Repl;
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::display::{format_category_list, format_currency_table};
use expense_tracker::models::{Category, Currency};
use expense_tracker::session::Session;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    author = "Kaylee Beyene",
    version,
    about = "Track expenses and budgets from the terminal",
    long_about = "Record income and expenses, set per-category budgets, get \
                  warned before you overspend, earn saver badges, and ask a \
                  (scripted) assistant for advice. Nothing is saved between \
                  runs; use 'export' to keep a copy."
)]
struct Cli {
    /// Seed for the assistant's reply selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Delay before the assistant replies, in milliseconds
    #[arg(long, global = true)]
    reply_delay_ms: Option<u64>,

    /// Display currency code (e.g. EUR)
    #[arg(long, global = true)]
    currency: Option<String>,

    /// Log filter, e.g. "expense_tracker=debug"
    #[arg(long, global = true, env = "EXPENSE_TRACKER_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Repl,

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,

    /// List expense categories
    Categories,

    /// List supported currencies
    Currencies,
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths).context("could not load settings")?;

    init_logging(cli.log_level.as_deref().unwrap_or(&settings.log_filter));
    tracing::debug!(config = %paths.settings_file().display(), "settings loaded");

    if let Some(seed) = cli.seed {
        settings.assistant.seed = Some(seed);
    }
    if let Some(delay) = cli.reply_delay_ms {
        settings.assistant.reply_delay_ms = delay;
    }
    if let Some(code) = &cli.currency {
        settings.currency = code.clone();
    }

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let mut session = Session::new(settings)?;
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let mut stdout = io::stdout();

            Repl::new(&mut session)
                .with_prompt(interactive)
                .run(stdin.lock(), &mut stdout)?;
        }
        Commands::Init => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                Settings::default().save(&paths)?;
                println!("Wrote default settings to: {}", paths.settings_file().display());
            }
        }
        Commands::Config => {
            settings.validate()?;
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no (using defaults)" }
            );
            println!();
            println!("Settings:");
            println!("  Currency:          {}", settings.currency()?);
            println!(
                "  Alerts:            warn > {}%, exceeded > {}%, saver badge <= {}%",
                settings.alerts.warning_percent,
                settings.alerts.exceeded_percent,
                settings.alerts.saver_badge_percent
            );
            println!("  Reply delay:       {} ms", settings.assistant.reply_delay_ms);
            println!("  Reply policy:      {:?}", settings.assistant.reply_policy);
            match settings.assistant.seed {
                Some(seed) => println!("  Reply seed:        {}", seed),
                None => println!("  Reply seed:        random"),
            }
            println!("  Canned replies:    {}", settings.assistant.responses.len());
            println!("  Recent list size:  {}", settings.recent_expense_limit);
            println!("  Log filter:        {}", settings.log_filter);
        }
        Commands::Categories => {
            println!("{}", format_category_list(Category::all()));
        }
        Commands::Currencies => {
            let current = settings.currency()?;
            println!("{}", format_currency_table(Currency::all(), &current));
        }
    }

    Ok(())
}
