use super::{CommandError, CommandOutcome, CommandResult, Panel, listed, select};
use crate::core::entity::{Client, contains_word_ignore_case};
use crate::core::model::Model;
use crate::core::tracker::ClientTracker;
use crate::core::types::{Email, Index, Name, Phone, Tag};
use std::collections::BTreeSet;

/// Fields to change on an existing client. Unset fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditClientDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditClientDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.phone.is_some() || self.email.is_some() || self.tags.is_some()
    }

    pub fn apply(&self, client: &Client) -> Client {
        Client {
            name: self.name.clone().unwrap_or_else(|| client.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| client.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| client.email.clone()),
            tags: self.tags.clone().unwrap_or_else(|| client.tags.clone()),
        }
    }
}

pub(super) fn add(model: &mut Model, client: &Client) -> CommandOutcome {
    model.add_client(client.clone())?;
    Ok(CommandResult::showing(
        format!("New client added: {client}"),
        Panel::Clients,
    ))
}

pub(super) fn edit(model: &mut Model, index: Index, descriptor: &EditClientDescriptor) -> CommandOutcome {
    if !descriptor.is_any_field_edited() {
        return Err(CommandError::NothingToEdit);
    }
    let target = select(model.filtered_clients(), index)?;
    let edited = descriptor.apply(&target);
    model.set_client(&target, edited.clone())?;
    Ok(CommandResult::showing(
        format!("Edited Client: {edited}"),
        Panel::Clients,
    ))
}

pub(super) fn delete(model: &mut Model, index: Index) -> CommandOutcome {
    let target = select(model.filtered_clients(), index)?;
    model.delete_client(&target)?;
    Ok(CommandResult::showing(
        format!("Deleted Client: {target}"),
        Panel::Clients,
    ))
}

/// Shows clients whose name contains any of `keywords` as a whole word.
pub(super) fn find(model: &mut Model, keywords: &[String]) -> CommandResult {
    let keywords = keywords.to_vec();
    model.update_client_filter(move |client| contains_word_ignore_case(client.name.as_str(), &keywords));
    CommandResult::showing(listed(model.filtered_clients().len(), "client"), Panel::Clients)
}

pub(super) fn list(model: &mut Model) -> CommandResult {
    model.update_client_filter(|_| true);
    CommandResult::showing("Listed all clients", Panel::Clients)
}

pub(super) fn clear(model: &mut Model) -> CommandResult {
    model.set_client_tracker(ClientTracker::new());
    CommandResult::showing("Client list has been cleared!", Panel::Clients)
}
