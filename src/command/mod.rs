//! User commands and their effect on the model.
//!
//! Every command validates its indexes and references before touching the
//! model, so a command either applies completely or leaves the model as it was.
pub mod appointment;
pub mod client;
pub mod expense;
pub mod revenue;
pub mod service;

pub use appointment::{EditAppointmentDescriptor, NewAppointment};
pub use client::EditClientDescriptor;
pub use expense::EditExpenseDescriptor;
pub use service::{EditServiceDescriptor, NewService, ServiceQuery};

use crate::core::collection::Record;
use crate::core::entity::{Client, Expense};
use crate::core::error::ModelError;
use crate::core::history::HistoryManager;
use crate::core::model::Model;
use crate::core::report::Breakdown;
use crate::core::types::{Date, Index, Phone, ServiceCode, ValidationError};
use crate::store::StorageError;
use thiserror::Error;
use tracing::debug;

pub const HELP_MESSAGE: &str = "Enter `help <command>` for details on a command, or `help` for the full list.";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("The {0} index provided is invalid")]
    InvalidIndex(&'static str),
    #[error("No client with phone number {0} exists")]
    UnknownClient(Phone),
    #[error("No service with code {0} exists")]
    UnknownService(ServiceCode),
    #[error("At least one field to edit must be provided")]
    NothingToEdit,
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Could not save data to file: {0}")]
    Storage(#[from] StorageError),
}

pub type CommandOutcome = Result<CommandResult, CommandError>;

/// What the presentation layer should show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Clients,
    Services,
    Expenses,
    Revenues,
    Appointments,
    Breakdown(Breakdown),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
    pub panel: Option<Panel>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
            panel: None,
        }
    }

    pub fn showing(feedback: impl Into<String>, panel: Panel) -> Self {
        Self {
            panel: Some(panel),
            ..Self::new(feedback)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddClient(Client),
    EditClient(Index, EditClientDescriptor),
    DeleteClient(Index),
    FindClient(Vec<String>),
    ListClient,
    ClearClient,

    AddService(NewService),
    EditService(Index, EditServiceDescriptor),
    DeleteService(Index),
    FindService(ServiceQuery),
    ListService,
    ClearService,

    AddExpense(Expense),
    EditExpense(Index, EditExpenseDescriptor),
    DeleteExpense(Index),
    FindExpense(Date),
    ListExpense,
    ClearExpense,
    BreakdownExpense { month: u32, year: i32 },

    AddAppointment(NewAppointment),
    EditAppointment(Index, EditAppointmentDescriptor),
    DeleteAppointment(Index),
    DoneAppointment(Index),
    UndoneAppointment(Index),
    FindAppointment(Date),
    ListAppointment,
    ClearAppointment,

    FindRevenue(Date),
    ListRevenue,
    ClearRevenue,
    BreakdownRevenue { month: u32, year: i32 },

    Undo,
    Help,
    Exit,
}

impl Command {
    /// The word a user types to run this command.
    pub fn word(&self) -> &'static str {
        match self {
            Command::AddClient(_) => "addcli",
            Command::EditClient(..) => "editcli",
            Command::DeleteClient(_) => "deletecli",
            Command::FindClient(_) => "findcli",
            Command::ListClient => "listcli",
            Command::ClearClient => "clearcli",
            Command::AddService(_) => "addsvc",
            Command::EditService(..) => "editsvc",
            Command::DeleteService(_) => "deletesvc",
            Command::FindService(_) => "findsvc",
            Command::ListService => "listsvc",
            Command::ClearService => "clearsvc",
            Command::AddExpense(_) => "addexp",
            Command::EditExpense(..) => "editexp",
            Command::DeleteExpense(_) => "deleteexp",
            Command::FindExpense(_) => "findexp",
            Command::ListExpense => "listexp",
            Command::ClearExpense => "clearexp",
            Command::BreakdownExpense { .. } => "breakdownexp",
            Command::AddAppointment(_) => "addapt",
            Command::EditAppointment(..) => "editapt",
            Command::DeleteAppointment(_) => "deleteapt",
            Command::DoneAppointment(_) => "done",
            Command::UndoneAppointment(_) => "undone",
            Command::FindAppointment(_) => "findapt",
            Command::ListAppointment => "listapt",
            Command::ClearAppointment => "clearapt",
            Command::FindRevenue(_) => "findrev",
            Command::ListRevenue => "listrev",
            Command::ClearRevenue => "clearrev",
            Command::BreakdownRevenue { .. } => "breakdownrev",
            Command::Undo => "undo",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    /// False for commands that only read the model.
    pub fn is_state_changing(&self) -> bool {
        !matches!(
            self,
            Command::FindClient(_)
                | Command::ListClient
                | Command::FindService(_)
                | Command::ListService
                | Command::FindExpense(_)
                | Command::ListExpense
                | Command::BreakdownExpense { .. }
                | Command::FindAppointment(_)
                | Command::ListAppointment
                | Command::FindRevenue(_)
                | Command::ListRevenue
                | Command::BreakdownRevenue { .. }
                | Command::Undo
                | Command::Help
                | Command::Exit
        )
    }

    pub fn execute(&self, model: &mut Model, history: &mut HistoryManager) -> CommandOutcome {
        debug!(command = self.word(), "Executing command");
        match self {
            Command::AddClient(new) => client::add(model, new),
            Command::EditClient(index, descriptor) => client::edit(model, *index, descriptor),
            Command::DeleteClient(index) => client::delete(model, *index),
            Command::FindClient(keywords) => Ok(client::find(model, keywords)),
            Command::ListClient => Ok(client::list(model)),
            Command::ClearClient => Ok(client::clear(model)),

            Command::AddService(new) => service::add(model, new),
            Command::EditService(index, descriptor) => service::edit(model, *index, descriptor),
            Command::DeleteService(index) => service::delete(model, *index),
            Command::FindService(query) => Ok(service::find(model, query)),
            Command::ListService => Ok(service::list(model)),
            Command::ClearService => Ok(service::clear(model)),

            Command::AddExpense(new) => Ok(expense::add(model, new)),
            Command::EditExpense(index, descriptor) => expense::edit(model, *index, descriptor),
            Command::DeleteExpense(index) => expense::delete(model, *index),
            Command::FindExpense(date) => Ok(expense::find(model, *date)),
            Command::ListExpense => Ok(expense::list(model)),
            Command::ClearExpense => Ok(expense::clear(model)),
            Command::BreakdownExpense { month, year } => {
                Ok(expense::breakdown(model, *month, *year))
            }

            Command::AddAppointment(new) => appointment::add(model, new),
            Command::EditAppointment(index, descriptor) => {
                appointment::edit(model, *index, descriptor)
            }
            Command::DeleteAppointment(index) => appointment::delete(model, *index),
            Command::DoneAppointment(index) => appointment::done(model, *index),
            Command::UndoneAppointment(index) => appointment::undone(model, *index),
            Command::FindAppointment(date) => Ok(appointment::find(model, *date)),
            Command::ListAppointment => Ok(appointment::list(model)),
            Command::ClearAppointment => Ok(appointment::clear(model)),

            Command::FindRevenue(date) => Ok(revenue::find(model, *date)),
            Command::ListRevenue => Ok(revenue::list(model)),
            Command::ClearRevenue => Ok(revenue::clear(model)),
            Command::BreakdownRevenue { month, year } => {
                Ok(revenue::breakdown(model, *month, *year))
            }

            Command::Undo => {
                *model = history.undo()?;
                Ok(CommandResult::new("Undo successful!"))
            }
            Command::Help => Ok(CommandResult {
                show_help: true,
                ..CommandResult::new(HELP_MESSAGE)
            }),
            Command::Exit => Ok(CommandResult {
                exit: true,
                ..CommandResult::new("Exiting Homerce as requested ...")
            }),
        }
    }
}

/// Clones the element at `index` of a displayed list.
fn select<T: Record>(shown: Vec<&T>, index: Index) -> Result<T, CommandError> {
    shown
        .get(index.zero_based())
        .map(|item| (*item).clone())
        .ok_or(CommandError::InvalidIndex(T::KIND))
}

/// Feedback for a filtered list, e.g. "2 clients listed!".
fn listed(count: usize, kind: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {kind}{plural} listed!")
}
