//! Interactive session commands
//!
//! Each input line is parsed with clap as if it were a command line of its
//! own, then passed straight to the session. Notifications queued by the
//! session are printed after every command, and assistant replies that have
//! come due are printed before the next prompt.

use std::io::{BufRead, Write};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::display::{
    format_currency_table, format_event, format_expense_line, format_expense_table,
    format_transcript,
};
use crate::error::TrackerResult;
use crate::export::{export_expenses_csv, export_session_json, export_session_yaml};
use crate::models::{Category, ChatMessage, Currency};
use crate::reports::{
    format_badges, format_tips, BudgetOverviewReport, OverviewReport, SpendingReport,
};
use crate::session::Session;

/// Export formats available from the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ReplLine {
    #[command(subcommand)]
    command: ReplCommand,
}

/// Commands accepted at the prompt
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ReplCommand {
    /// Set monthly income (non-numeric input counts as zero)
    Income {
        amount: String,
    },

    /// Record an expense: expense <amount> <category> [description...]
    #[command(alias = "add")]
    Expense {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        category: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },

    /// Set a category's monthly limit
    Budget {
        category: String,
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// Switch display currency, or list currencies when no code is given
    Currency {
        code: Option<String>,
    },

    /// Ask the assistant something
    #[command(alias = "ask")]
    Chat {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },

    /// Wait for pending assistant replies
    Wait,

    /// Income, spending and remaining totals
    Overview,

    /// Recent expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Show every expense, oldest first
        #[arg(short, long)]
        all: bool,
    },

    /// Budget progress per category
    Budgets,

    /// Spending breakdown by category
    Insights,

    /// Earned achievements
    Badges,

    /// Chat history
    Transcript,

    /// Financial tips
    Tips,

    /// List expense categories
    Categories,

    /// Write session data to stdout
    Export {
        #[arg(value_enum)]
        format: ExportFormat,
    },

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parse one input line; `Ok(None)` for a blank line
///
/// Chat messages and expense descriptions are passed through as typed,
/// inner spacing included. On a parse failure the rendered clap message
/// (which includes `help` output) is returned as the error.
pub fn parse_line(line: &str) -> Result<Option<ReplCommand>, String> {
    let Some(head) = line.split_whitespace().next() else {
        return Ok(None);
    };

    let leading = match head {
        "chat" | "ask" => 1,
        "expense" | "add" => 3,
        _ => usize::MAX,
    };
    let (mut args, rest) = split_words(line, leading);
    args.extend(rest);

    ReplLine::try_parse_from(args)
        .map(|parsed| Some(parsed.command))
        .map_err(|e| e.render().to_string())
}

/// Up to `n` leading words of `line`, plus whatever text follows them
/// with its inner whitespace intact
fn split_words(line: &str, n: usize) -> (Vec<&str>, Option<&str>) {
    let mut words = Vec::new();
    let mut rest = line.trim();
    while words.len() < n && !rest.is_empty() {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        words.push(&rest[..end]);
        rest = rest[end..].trim_start();
    }
    (words, Some(rest).filter(|r| !r.is_empty()))
}

/// Read-eval-print loop over a session
pub struct Repl<'s> {
    session: &'s mut Session,
    sleeper: Box<dyn FnMut(Duration) + 's>,
    prompt: bool,
}

impl<'s> Repl<'s> {
    /// A loop that sleeps on the real clock while waiting for replies
    pub fn new(session: &'s mut Session) -> Self {
        Self {
            session,
            sleeper: Box::new(std::thread::sleep),
            prompt: false,
        }
    }

    /// Replace how the loop waits for a deferred task to come due
    pub fn with_sleeper(mut self, sleeper: impl FnMut(Duration) + 's) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    /// Print a `> ` prompt before each line
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Process `input` until it ends or a `quit` command
    ///
    /// Pending assistant replies are waited for before returning.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> TrackerResult<()> {
        if self.prompt {
            writeln!(out, "Expense tracker. Type 'help' for commands.")?;
        }

        let mut lines = input.lines();
        loop {
            self.print_replies(out)?;
            if self.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            let flow = match parse_line(&line) {
                Ok(Some(command)) => self.execute(command, out)?,
                Ok(None) => Flow::Continue,
                Err(message) => {
                    write!(out, "{}", message)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        self.wait_for_replies(out)
    }

    /// Run a single parsed command and print its output and notifications
    pub fn execute<W: Write>(&mut self, command: ReplCommand, out: &mut W) -> TrackerResult<Flow> {
        debug!(?command, "executing");
        let currency = self.session.currency();

        match command {
            ReplCommand::Income { amount } => {
                self.session.set_income(&amount);
            }
            ReplCommand::Expense {
                amount,
                category,
                description,
            } => {
                let description = description.join(" ");
                if let Ok(expense) = self.session.add_expense(&amount, &category, &description) {
                    writeln!(out, "{}", format_expense_line(&expense, &currency))?;
                }
            }
            ReplCommand::Budget { category, limit } => {
                // rejections are reported through the event queue
                let _ = self.session.set_budget(&category, &limit);
            }
            ReplCommand::Currency { code: None } => {
                writeln!(out, "{}", format_currency_table(Currency::all(), &currency))?;
            }
            ReplCommand::Currency { code: Some(code) } => {
                let _ = self.session.set_currency(&code);
            }
            ReplCommand::Chat { message } => {
                let message = message.join(" ");
                if self.session.send_chat_message(&message) {
                    writeln!(out, "{}", ChatMessage::user(message))?;
                }
            }
            ReplCommand::Wait => self.wait_for_replies(out)?,
            ReplCommand::Overview => {
                write!(out, "{}", OverviewReport::generate(self.session).format_terminal())?;
            }
            ReplCommand::List { all } => {
                let table = if all {
                    format_expense_table(self.session.expenses(), &currency)
                } else {
                    format_expense_table(self.session.recent_expenses(), &currency)
                };
                writeln!(out, "{}", table)?;
            }
            ReplCommand::Budgets => {
                write!(
                    out,
                    "{}",
                    BudgetOverviewReport::generate(self.session).format_terminal()
                )?;
            }
            ReplCommand::Insights => {
                write!(out, "{}", SpendingReport::generate(self.session).format_terminal())?;
            }
            ReplCommand::Badges => write!(out, "{}", format_badges(self.session.achievements()))?,
            ReplCommand::Transcript => {
                writeln!(out, "{}", format_transcript(self.session.transcript()))?;
            }
            ReplCommand::Tips => write!(out, "{}", format_tips())?,
            ReplCommand::Categories => {
                for category in Category::all() {
                    writeln!(out, "{}", category)?;
                }
            }
            ReplCommand::Export { format } => match format {
                ExportFormat::Csv => export_expenses_csv(self.session.expenses(), &mut *out)?,
                ExportFormat::Json => export_session_json(self.session, out)?,
                ExportFormat::Yaml => export_session_yaml(self.session, out)?,
            },
            ReplCommand::Quit => {
                self.print_events(out)?;
                return Ok(Flow::Quit);
            }
        }

        self.print_events(out)?;
        Ok(Flow::Continue)
    }

    /// Block until every pending reply has been delivered
    pub fn wait_for_replies<W: Write>(&mut self, out: &mut W) -> TrackerResult<()> {
        while let Some(remaining) = self.session.time_until_next_task() {
            if !remaining.is_zero() {
                (self.sleeper)(remaining);
            }
            self.print_replies(out)?;
        }
        Ok(())
    }

    fn print_replies<W: Write>(&mut self, out: &mut W) -> TrackerResult<()> {
        for reply in self.session.run_due_tasks() {
            writeln!(out, "{}", reply)?;
        }
        Ok(())
    }

    fn print_events<W: Write>(&mut self, out: &mut W) -> TrackerResult<()> {
        let currency = self.session.currency();
        for event in self.session.drain_events() {
            writeln!(out, "{}", format_event(&event, &currency))?;
        }
        Ok(())
    }
}
