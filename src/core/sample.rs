//! Data used to populate a fresh installation.
use crate::core::entity::{Client, Revenue, Service};
use crate::core::state::TrackerState;
use crate::core::types::{Duration, Email, Name, Phone, ServiceCode, Tag, Title, ValidationError};
use std::collections::BTreeSet;

type Result<T> = std::result::Result<T, ValidationError>;

const CLIENTS: [(&str, &str, &str, &[&str]); 6] = [
    ("Alex Yeoh", "87438807", "alexyeoh@example.com", &["friends"]),
    ("Bernice Yu", "99272758", "berniceyu@example.com", &["colleagues", "friends"]),
    ("Charlotte Oliveiro", "93210283", "charlotte@example.com", &["neighbours"]),
    ("David Li", "91031282", "lidavid@example.com", &["family"]),
    ("Irfan Ibrahim", "92492021", "irfan@example.com", &["classmates"]),
    ("Roy Balakrishnan", "92624417", "royb@example.com", &["colleagues"]),
];

const SERVICES: [(&str, &str, f64, &str); 5] = [
    ("SC000", "Lash Lift", 0.5, "38.0"),
    ("SC001", "Nail Extension", 0.5, "28.9"),
    ("SC003", "Pedicure", 0.5, "18.5"),
    ("SC007", "Hair Treatment", 1.5, "88.9"),
    ("SC005", "Manicure", 1.0, "21.5"),
];

const REVENUES: [(&str, &str); 7] = [
    ("SC000", "20-10-2020"),
    ("SC000", "21-10-2020"),
    ("SC000", "21-10-2020"),
    ("SC001", "22-10-2020"),
    ("SC003", "22-10-2020"),
    ("SC007", "22-10-2020"),
    ("SC005", "22-10-2020"),
];

pub fn sample_clients() -> Result<Vec<Client>> {
    CLIENTS
        .iter()
        .map(|(name, phone, email, tags)| {
            let tags = tags
                .iter()
                .map(|tag| Tag::new(*tag))
                .collect::<Result<BTreeSet<_>>>()?;
            Ok(Client::new(
                Name::new(*name)?,
                Phone::new(*phone)?,
                Email::new(*email)?,
                tags,
            ))
        })
        .collect()
}

pub fn sample_services() -> Result<Vec<Service>> {
    SERVICES
        .iter()
        .map(|(code, title, hours, price)| {
            Ok(Service::new(
                ServiceCode::new(*code)?,
                Title::new(*title)?,
                Duration::from_hours(*hours)?,
                price.parse()?,
            ))
        })
        .collect()
}

/// Revenue entries are built from the sample services they reference.
pub fn sample_revenues(services: &[Service]) -> Result<Vec<Revenue>> {
    let mut revenues = Vec::with_capacity(REVENUES.len());
    for (code, date) in REVENUES {
        let code = ServiceCode::new(code)?;
        if let Some(service) = services.iter().find(|s| s.code == code) {
            revenues.push(Revenue::from_service(service, date.parse()?));
        }
    }
    Ok(revenues)
}

pub fn sample_state() -> Result<TrackerState> {
    let services = sample_services()?;
    Ok(TrackerState {
        clients: sample_clients()?,
        revenues: sample_revenues(&services)?,
        services,
        ..TrackerState::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_is_valid() {
        let state = sample_state().unwrap();
        assert_eq!(state.clients.len(), 6);
        assert_eq!(state.services.len(), 5);
        assert_eq!(state.revenues.len(), 7);
        assert!(state.expenses.is_empty());
        assert!(state.appointments.is_empty());
        assert_eq!(state.revenues[0].service.title.as_str(), "Lash Lift");
    }
}
