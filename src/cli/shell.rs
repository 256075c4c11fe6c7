//! Line-oriented shell. Each line is parsed as its own command line, with the
//! first word naming the command.
use crate::app::App;
use crate::cli::ui::{StyleType, new_styled_table, header_cell, render_panel, style_text};
use crate::command::{
    Command, EditAppointmentDescriptor, EditClientDescriptor, EditExpenseDescriptor,
    EditServiceDescriptor, NewAppointment, NewService, ServiceQuery,
};
use crate::core::entity::{Client, Expense};
use crate::core::types::{
    Amount, Date, Description, Duration, Email, Index, Name, Phone, ServiceCode, Tag, Time, Title,
    ValidationError,
};
use crate::store::Storage;
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use comfy_table::{Cell, Table};
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{0}")]
    Clap(#[from] clap::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Parser)]
#[command(multicall = true, disable_help_subcommand = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Add a client
    #[command(name = "addcli")]
    AddClient {
        #[arg(short, long, num_args = 1.., required = true)]
        name: Vec<String>,
        #[arg(short, long)]
        phone: Phone,
        #[arg(short, long)]
        email: Email,
        #[arg(short, long = "tag")]
        tags: Vec<Tag>,
    },
    /// Edit the client at INDEX of the displayed list
    #[command(name = "editcli")]
    EditClient {
        index: Index,
        #[arg(short, long, num_args = 1..)]
        name: Option<Vec<String>>,
        #[arg(short, long)]
        phone: Option<Phone>,
        #[arg(short, long)]
        email: Option<Email>,
        /// Replaces every tag of the client
        #[arg(short, long = "tag")]
        tags: Option<Vec<Tag>>,
    },
    /// Delete the client at INDEX of the displayed list
    #[command(name = "deletecli")]
    DeleteClient { index: Index },
    /// Find clients whose name contains any of the keywords
    #[command(name = "findcli")]
    FindClient {
        #[arg(required = true)]
        keywords: Vec<String>,
    },
    /// List all clients
    #[command(name = "listcli")]
    ListClient,
    /// Remove every client
    #[command(name = "clearcli")]
    ClearClient,

    /// Add a service; its code is assigned automatically
    #[command(name = "addsvc")]
    AddService {
        #[arg(short, long, num_args = 1.., required = true)]
        title: Vec<String>,
        /// Duration in hours, in steps of 0.5
        #[arg(short, long)]
        duration: Duration,
        #[arg(short, long)]
        price: Amount,
    },
    /// Edit the service at INDEX of the displayed list
    #[command(name = "editsvc")]
    EditService {
        index: Index,
        #[arg(short, long, num_args = 1..)]
        title: Option<Vec<String>>,
        #[arg(short, long)]
        duration: Option<Duration>,
        #[arg(short, long)]
        price: Option<Amount>,
    },
    /// Delete the service at INDEX of the displayed list
    #[command(name = "deletesvc")]
    DeleteService { index: Index },
    /// Find services by title keywords or by code
    #[command(name = "findsvc")]
    FindService {
        #[arg(short, long, num_args = 1.., required_unless_present = "code", conflicts_with = "code")]
        title: Option<Vec<String>>,
        #[arg(short, long)]
        code: Option<ServiceCode>,
    },
    /// List all services
    #[command(name = "listsvc")]
    ListService,
    /// Remove every service
    #[command(name = "clearsvc")]
    ClearService,

    /// Add an expense
    #[command(name = "addexp")]
    AddExpense {
        #[arg(short, long, num_args = 1.., required = true)]
        description: Vec<String>,
        #[arg(short, long)]
        value: Amount,
        /// Date in dd-MM-yyyy
        #[arg(long)]
        date: Date,
        #[arg(short, long)]
        tag: Tag,
        /// Mark the expense as a recurring fixed cost
        #[arg(short, long)]
        fixed: bool,
    },
    /// Edit the expense at INDEX of the displayed list
    #[command(name = "editexp")]
    EditExpense {
        index: Index,
        #[arg(short, long, num_args = 1..)]
        description: Option<Vec<String>>,
        #[arg(short, long)]
        value: Option<Amount>,
        #[arg(long)]
        date: Option<Date>,
        #[arg(short, long)]
        tag: Option<Tag>,
        #[arg(short, long)]
        fixed: Option<bool>,
    },
    /// Delete the expense at INDEX of the displayed list
    #[command(name = "deleteexp")]
    DeleteExpense { index: Index },
    /// Find expenses on a date (dd-MM-yyyy)
    #[command(name = "findexp")]
    FindExpense { date: Date },
    /// List all expenses
    #[command(name = "listexp")]
    ListExpense,
    /// Remove every expense
    #[command(name = "clearexp")]
    ClearExpense,
    /// Break down the expenses of a month by tag
    #[command(name = "breakdownexp")]
    BreakdownExpense {
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
        #[arg(value_parser = clap::value_parser!(i32).range(1..=9999))]
        year: i32,
    },

    /// Book a service for a client
    #[command(name = "addapt")]
    AddAppointment {
        /// Date in dd-MM-yyyy
        #[arg(short, long)]
        date: Date,
        /// Start time in HHmm
        #[arg(short, long)]
        time: Time,
        /// Phone number of the client
        #[arg(short, long)]
        phone: Phone,
        /// Code of the service
        #[arg(short, long)]
        code: ServiceCode,
    },
    /// Edit the appointment at INDEX of the displayed list
    #[command(name = "editapt")]
    EditAppointment {
        index: Index,
        #[arg(short, long)]
        date: Option<Date>,
        #[arg(short, long)]
        time: Option<Time>,
        #[arg(short, long)]
        phone: Option<Phone>,
        #[arg(short, long)]
        code: Option<ServiceCode>,
    },
    /// Delete the appointment at INDEX of the displayed list
    #[command(name = "deleteapt")]
    DeleteAppointment { index: Index },
    /// Mark the appointment at INDEX as done and record its revenue
    #[command(name = "done")]
    DoneAppointment { index: Index },
    /// Mark the appointment at INDEX as not done and drop its revenue
    #[command(name = "undone")]
    UndoneAppointment { index: Index },
    /// Find appointments on a date (dd-MM-yyyy)
    #[command(name = "findapt")]
    FindAppointment { date: Date },
    /// List all appointments
    #[command(name = "listapt")]
    ListAppointment,
    /// Remove every appointment
    #[command(name = "clearapt")]
    ClearAppointment,

    /// Find revenue earned on a date (dd-MM-yyyy)
    #[command(name = "findrev")]
    FindRevenue { date: Date },
    /// List all revenue
    #[command(name = "listrev")]
    ListRevenue,
    /// Remove every revenue entry
    #[command(name = "clearrev")]
    ClearRevenue,
    /// Break down the revenue of a month by service
    #[command(name = "breakdownrev")]
    BreakdownRevenue {
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
        #[arg(value_parser = clap::value_parser!(i32).range(1..=9999))]
        year: i32,
    },

    /// Undo the last command that changed data
    #[command(name = "undo")]
    Undo,
    /// Show the available commands
    #[command(name = "help")]
    Help,
    /// Save and quit
    #[command(name = "exit")]
    Exit,
}

fn join(words: Vec<String>) -> String {
    words.join(" ")
}

impl ShellCommand {
    fn into_command(self) -> Result<Command, ValidationError> {
        let command = match self {
            ShellCommand::AddClient {
                name,
                phone,
                email,
                tags,
            } => Command::AddClient(Client::new(
                Name::new(join(name))?,
                phone,
                email,
                tags.into_iter().collect(),
            )),
            ShellCommand::EditClient {
                index,
                name,
                phone,
                email,
                tags,
            } => Command::EditClient(
                index,
                EditClientDescriptor {
                    name: name.map(|n| Name::new(join(n))).transpose()?,
                    phone,
                    email,
                    tags: tags.map(|t| t.into_iter().collect()),
                },
            ),
            ShellCommand::DeleteClient { index } => Command::DeleteClient(index),
            ShellCommand::FindClient { keywords } => Command::FindClient(keywords),
            ShellCommand::ListClient => Command::ListClient,
            ShellCommand::ClearClient => Command::ClearClient,

            ShellCommand::AddService {
                title,
                duration,
                price,
            } => Command::AddService(NewService {
                title: Title::new(join(title))?,
                duration,
                price,
            }),
            ShellCommand::EditService {
                index,
                title,
                duration,
                price,
            } => Command::EditService(
                index,
                EditServiceDescriptor {
                    title: title.map(|t| Title::new(join(t))).transpose()?,
                    duration,
                    price,
                },
            ),
            ShellCommand::DeleteService { index } => Command::DeleteService(index),
            ShellCommand::FindService { title, code } => Command::FindService(match code {
                Some(code) => ServiceQuery::Code(code),
                None => ServiceQuery::Title(title.unwrap_or_default()),
            }),
            ShellCommand::ListService => Command::ListService,
            ShellCommand::ClearService => Command::ClearService,

            ShellCommand::AddExpense {
                description,
                value,
                date,
                tag,
                fixed,
            } => Command::AddExpense(Expense {
                description: Description::new(join(description))?,
                is_fixed: fixed,
                amount: value,
                date,
                tag,
            }),
            ShellCommand::EditExpense {
                index,
                description,
                value,
                date,
                tag,
                fixed,
            } => Command::EditExpense(
                index,
                EditExpenseDescriptor {
                    description: description
                        .map(|d| Description::new(join(d)))
                        .transpose()?,
                    is_fixed: fixed,
                    amount: value,
                    date,
                    tag,
                },
            ),
            ShellCommand::DeleteExpense { index } => Command::DeleteExpense(index),
            ShellCommand::FindExpense { date } => Command::FindExpense(date),
            ShellCommand::ListExpense => Command::ListExpense,
            ShellCommand::ClearExpense => Command::ClearExpense,
            ShellCommand::BreakdownExpense { month, year } => {
                Command::BreakdownExpense { month, year }
            }

            ShellCommand::AddAppointment {
                date,
                time,
                phone,
                code,
            } => Command::AddAppointment(NewAppointment {
                date,
                time,
                phone,
                code,
            }),
            ShellCommand::EditAppointment {
                index,
                date,
                time,
                phone,
                code,
            } => Command::EditAppointment(
                index,
                EditAppointmentDescriptor {
                    date,
                    time,
                    phone,
                    code,
                },
            ),
            ShellCommand::DeleteAppointment { index } => Command::DeleteAppointment(index),
            ShellCommand::DoneAppointment { index } => Command::DoneAppointment(index),
            ShellCommand::UndoneAppointment { index } => Command::UndoneAppointment(index),
            ShellCommand::FindAppointment { date } => Command::FindAppointment(date),
            ShellCommand::ListAppointment => Command::ListAppointment,
            ShellCommand::ClearAppointment => Command::ClearAppointment,

            ShellCommand::FindRevenue { date } => Command::FindRevenue(date),
            ShellCommand::ListRevenue => Command::ListRevenue,
            ShellCommand::ClearRevenue => Command::ClearRevenue,
            ShellCommand::BreakdownRevenue { month, year } => {
                Command::BreakdownRevenue { month, year }
            }

            ShellCommand::Undo => Command::Undo,
            ShellCommand::Help => Command::Help,
            ShellCommand::Exit => Command::Exit,
        };
        Ok(command)
    }
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let words = line.split_whitespace().collect::<Vec<_>>();
    if words.is_empty() {
        return Ok(None);
    }
    let parsed = ShellLine::try_parse_from(words)?;
    Ok(Some(parsed.command.into_command()?))
}

/// Every shell command with its one-line description.
pub fn help_table() -> Table {
    let mut table = new_styled_table();
    table.set_header(vec![header_cell("Command"), header_cell("Description")]);
    for sub in ShellLine::command().get_subcommands() {
        let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
        table.add_row(vec![Cell::new(sub.get_name()), Cell::new(about)]);
    }
    table
}

/// Reads commands from `input` until `exit` or end of input.
pub fn run_shell<S, R, W>(app: &mut App<S>, currency: &str, mut input: R, mut output: W) -> Result<()>
where
    S: Storage,
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "{}",
        style_text("Welcome to Homerce! Type `help` to list the commands.", StyleType::Title)
    )?;

    let mut line = String::new();
    loop {
        write!(output, "{} ", style_text(">", StyleType::Subtle))?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read command")? == 0 {
            debug!("End of input");
            break;
        }

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "{}", style_text(e.to_string().trim_end(), StyleType::Error))?;
                continue;
            }
        };

        match app.execute(&command) {
            Ok(result) => {
                writeln!(output, "{}", result.feedback)?;
                if let Some(panel) = &result.panel {
                    writeln!(output, "{}", render_panel(app.model(), panel, currency))?;
                }
                if result.show_help {
                    writeln!(output, "{}", help_table())?;
                }
                if result.exit {
                    break;
                }
            }
            Err(e) => {
                warn!(command = command.word(), error = %e, "Command failed");
                writeln!(output, "{}", style_text(&e.to_string(), StyleType::Error))?;
            }
        }
    }
    Ok(())
}
