use super::{CommandError, CommandOutcome, CommandResult, Panel, listed, select};
use crate::core::entity::{Service, contains_word_ignore_case};
use crate::core::model::Model;
use crate::core::tracker::ServiceTracker;
use crate::core::types::{Amount, Duration, Index, ServiceCode, Title};

/// A service as entered by the user; the code is assigned on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewService {
    pub title: Title,
    pub duration: Duration,
    pub price: Amount,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditServiceDescriptor {
    pub title: Option<Title>,
    pub duration: Option<Duration>,
    pub price: Option<Amount>,
}

impl EditServiceDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.title.is_some() || self.duration.is_some() || self.price.is_some()
    }

    /// The edited service keeps its code.
    pub fn apply(&self, service: &Service) -> Service {
        Service {
            code: service.code.clone(),
            title: self.title.clone().unwrap_or_else(|| service.title.clone()),
            duration: self.duration.unwrap_or(service.duration),
            price: self.price.unwrap_or(service.price),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceQuery {
    Title(Vec<String>),
    Code(ServiceCode),
}

pub(super) fn add(model: &mut Model, new: &NewService) -> CommandOutcome {
    let code = model
        .next_service_code()
        .ok_or_else(|| CommandError::Invalid("No more service codes are available".to_string()))?;
    let service = Service::new(code, new.title.clone(), new.duration, new.price);
    model.add_service(service.clone())?;
    Ok(CommandResult::showing(
        format!("New service added: {service}"),
        Panel::Services,
    ))
}

pub(super) fn edit(model: &mut Model, index: Index, descriptor: &EditServiceDescriptor) -> CommandOutcome {
    if !descriptor.is_any_field_edited() {
        return Err(CommandError::NothingToEdit);
    }
    let target = select(model.filtered_services(), index)?;
    let edited = descriptor.apply(&target);
    model.set_service(&target, edited.clone())?;
    Ok(CommandResult::showing(
        format!("Edited Service: {edited}"),
        Panel::Services,
    ))
}

/// Revenue and appointments keep their own copy of the deleted service.
pub(super) fn delete(model: &mut Model, index: Index) -> CommandOutcome {
    let target = select(model.filtered_services(), index)?;
    model.delete_service(&target)?;
    Ok(CommandResult::showing(
        format!("Deleted Service: {target}"),
        Panel::Services,
    ))
}

pub(super) fn find(model: &mut Model, query: &ServiceQuery) -> CommandResult {
    match query.clone() {
        ServiceQuery::Title(keywords) => model.update_service_filter(move |service| {
            contains_word_ignore_case(service.title.as_str(), &keywords)
        }),
        ServiceQuery::Code(code) => model.update_service_filter(move |service| service.code == code),
    }
    CommandResult::showing(listed(model.filtered_services().len(), "service"), Panel::Services)
}

pub(super) fn list(model: &mut Model) -> CommandResult {
    model.update_service_filter(|_| true);
    CommandResult::showing("Listed all services", Panel::Services)
}

pub(super) fn clear(model: &mut Model) -> CommandResult {
    model.set_service_tracker(ServiceTracker::new());
    CommandResult::showing("Service list has been cleared!", Panel::Services)
}
