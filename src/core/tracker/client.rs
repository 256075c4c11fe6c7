use crate::core::collection::{ReadOnlyView, UniqueList};
use crate::core::entity::Client;
use crate::core::error::ModelResult;
use crate::core::types::Phone;
use tracing::debug;

/// Owns every client. No two clients share a phone number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientTracker {
    clients: UniqueList<Client>,
}

impl ClientTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tracker from persisted or sample clients.
    pub fn from_clients(clients: Vec<Client>) -> ModelResult<Self> {
        let mut tracker = Self::new();
        tracker.reset_data(clients)?;
        Ok(tracker)
    }

    pub fn reset_data(&mut self, clients: Vec<Client>) -> ModelResult<()> {
        self.clients.replace_all(clients)
    }

    /// Returns true if a client with the same phone number exists.
    pub fn add_client(&mut self, client: Client) -> ModelResult<()> {
        debug!(phone = %client.phone, "Adding client");
        self.clients.add(client)
    }

    /// Replaces `target` with `edited`. `edited` must not take another client's phone number.
    pub fn set_client(&mut self, target: &Client, edited: Client) -> ModelResult<()> {
        debug!(from = %target.phone, to = %edited.phone, "Editing client");
        self.clients.set_item(target, edited)
    }

    pub fn remove_client(&mut self, client: &Client) -> ModelResult<()> {
        debug!(phone = %client.phone, "Removing client");
        self.clients.remove(client)
    }

    pub fn client_by_phone(&self, phone: &Phone) -> Option<&Client> {
        self.clients.find(|client| &client.phone == phone)
    }

    pub fn client_list(&self) -> ReadOnlyView<'_, Client> {
        self.clients.as_read_only_view()
    }

    pub fn filter_clients_by<P>(&self, predicate: P) -> impl Iterator<Item = &Client>
    where
        P: Fn(&Client) -> bool,
    {
        self.clients.iter().filter(move |&client| predicate(client))
    }

    pub fn deep_copy(&self) -> Self {
        Self {
            clients: self.clients.deep_copy(),
        }
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ModelError;
    use crate::core::types::{Email, Name};
    use std::collections::BTreeSet;

    fn client(name: &str, phone: &str, email: &str) -> Client {
        Client::new(
            Name::new(name).unwrap(),
            Phone::new(phone).unwrap(),
            Email::new(email).unwrap(),
            BTreeSet::new(),
        )
    }

    #[test]
    fn test_duplicate_phone_rejected() {
        let mut tracker = ClientTracker::new();
        tracker
            .add_client(client("Alex Yeoh", "87438807", "alexyeoh@example.com"))
            .unwrap();

        let result = tracker.add_client(client("Alex Y", "87438807", "alexyeoh@example.com"));

        assert_eq!(result, Err(ModelError::Duplicate("client")));
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.client_list()[0].name.as_str(), "Alex Yeoh");
    }

    #[test]
    fn test_rename_keeps_client_but_phone_collision_fails() {
        let alex = client("Alex Yeoh", "87438807", "alexyeoh@example.com");
        let bernice = client("Bernice Yu", "99272758", "berniceyu@example.com");
        let mut tracker = ClientTracker::from_clients(vec![alex.clone(), bernice]).unwrap();

        let renamed = client("Alex Y", "87438807", "alexyeoh@example.com");
        tracker.set_client(&alex, renamed.clone()).unwrap();
        assert_eq!(tracker.client_list()[0], renamed);

        let stolen_phone = client("Alex Y", "99272758", "alexyeoh@example.com");
        assert_eq!(
            tracker.set_client(&renamed, stolen_phone),
            Err(ModelError::Duplicate("client"))
        );
    }

    #[test]
    fn test_lookup_and_filter() {
        let tracker = ClientTracker::from_clients(vec![
            client("Alex Yeoh", "87438807", "alexyeoh@example.com"),
            client("Bernice Yu", "99272758", "berniceyu@example.com"),
            client("Alex Tan", "91031282", "alextan@example.com"),
        ])
        .unwrap();

        let phone = Phone::new("99272758").unwrap();
        assert_eq!(
            tracker.client_by_phone(&phone).map(|c| c.name.as_str()),
            Some("Bernice Yu")
        );

        let alexes: Vec<_> = tracker
            .filter_clients_by(|c| c.name.as_str().starts_with("Alex"))
            .map(|c| c.phone.as_str())
            .collect();
        assert_eq!(alexes, vec!["87438807", "91031282"]);
        // Filtering does not disturb stored order
        assert_eq!(tracker.client_list()[1].name.as_str(), "Bernice Yu");
    }
}
