use crate::core::collection::{Record, SameIdentityAs};
use crate::core::types::{Email, Name, Phone, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// A customer of the business. Two clients are the same person when they share
/// a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Client {
    pub fn new(name: Name, phone: Phone, email: Email, tags: BTreeSet<Tag>) -> Self {
        Self {
            name,
            phone,
            email,
            tags,
        }
    }
}

impl Record for Client {
    const KIND: &'static str = "client";
}

impl SameIdentityAs for Client {
    fn same_identity_as(&self, other: &Self) -> bool {
        self.phone == other.phone
    }
}

impl Display for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {}",
            self.name, self.phone, self.email
        )?;
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(Tag::as_str).collect();
            write!(f, " Tags: [{}]", tags.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(name: &str, phone: &str) -> Client {
        Client::new(
            Name::new(name).unwrap(),
            Phone::new(phone).unwrap(),
            Email::new("alexyeoh@example.com").unwrap(),
            BTreeSet::new(),
        )
    }

    #[test]
    fn test_identity_is_phone_number() {
        let alex = client("Alex Yeoh", "87438807");
        assert!(alex.same_identity_as(&client("Alex Y", "87438807")));
        assert!(!alex.same_identity_as(&client("Alex Yeoh", "99272758")));
        assert_ne!(alex, client("Alex Y", "87438807"));
    }

    #[test]
    fn test_display_lists_tags() {
        let mut alex = client("Alex Yeoh", "87438807");
        assert_eq!(
            alex.to_string(),
            "Alex Yeoh Phone: 87438807 Email: alexyeoh@example.com"
        );
        alex.tags.insert(Tag::new("friends").unwrap());
        assert!(alex.to_string().ends_with("Tags: [friends]"));
    }
}
