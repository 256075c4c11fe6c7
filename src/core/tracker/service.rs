use crate::core::collection::{ReadOnlyView, UniqueList};
use crate::core::entity::Service;
use crate::core::error::ModelResult;
use crate::core::types::ServiceCode;
use tracing::debug;

/// Owns every service. Service codes are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceTracker {
    services: UniqueList<Service>,
}

impl ServiceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_services(services: Vec<Service>) -> ModelResult<Self> {
        let mut tracker = Self::new();
        tracker.reset_data(services)?;
        Ok(tracker)
    }

    pub fn reset_data(&mut self, services: Vec<Service>) -> ModelResult<()> {
        self.services.replace_all(services)
    }

    pub fn add_service(&mut self, service: Service) -> ModelResult<()> {
        debug!(code = %service.code, "Adding service");
        self.services.add(service)
    }

    pub fn set_service(&mut self, target: &Service, edited: Service) -> ModelResult<()> {
        debug!(code = %target.code, "Editing service");
        self.services.set_item(target, edited)
    }

    pub fn remove_service(&mut self, service: &Service) -> ModelResult<()> {
        debug!(code = %service.code, "Removing service");
        self.services.remove(service)
    }

    pub fn service_by_code(&self, code: &ServiceCode) -> Option<&Service> {
        self.services.find(|service| &service.code == code)
    }

    /// The lowest service code not in use, or `None` when all are taken.
    pub fn next_service_code(&self) -> Option<ServiceCode> {
        (0..=ServiceCode::MAX_NUMBER)
            .filter_map(ServiceCode::from_number)
            .find(|code| self.service_by_code(code).is_none())
    }

    pub fn service_list(&self) -> ReadOnlyView<'_, Service> {
        self.services.as_read_only_view()
    }

    pub fn filter_services_by<P>(&self, predicate: P) -> impl Iterator<Item = &Service>
    where
        P: Fn(&Service) -> bool,
    {
        self.services.iter().filter(move |&service| predicate(service))
    }

    pub fn deep_copy(&self) -> Self {
        Self {
            services: self.services.deep_copy(),
        }
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ModelError;
    use crate::core::types::{Duration, Title};

    fn service(code: &str, title: &str) -> Service {
        Service::new(
            ServiceCode::new(code).unwrap(),
            Title::new(title).unwrap(),
            Duration::from_hours(0.5).unwrap(),
            "38".parse().unwrap(),
        )
    }

    #[test]
    fn test_next_service_code_fills_gaps() {
        let mut tracker = ServiceTracker::new();
        assert_eq!(tracker.next_service_code().unwrap().as_str(), "SC000");

        tracker.add_service(service("SC000", "Lash Lift")).unwrap();
        tracker.add_service(service("SC002", "Pedicure")).unwrap();
        assert_eq!(tracker.next_service_code().unwrap().as_str(), "SC001");
    }

    #[test]
    fn test_code_is_identity() {
        let mut tracker = ServiceTracker::new();
        tracker.add_service(service("SC000", "Lash Lift")).unwrap();
        assert_eq!(
            tracker.add_service(service("SC000", "Manicure")),
            Err(ModelError::Duplicate("service"))
        );

        let code = ServiceCode::new("SC000").unwrap();
        let lash = tracker.service_by_code(&code).cloned().unwrap();
        tracker
            .set_service(&lash, service("SC000", "Lash Lift Deluxe"))
            .unwrap();
        assert_eq!(
            tracker.service_by_code(&code).unwrap().title.as_str(),
            "Lash Lift Deluxe"
        );

        tracker.remove_service(&lash).unwrap_err();
        assert_eq!(tracker.len(), 1);
    }
}
