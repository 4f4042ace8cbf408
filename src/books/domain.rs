use chrono::NaiveDate;
use crate::core::domain::Identifiable;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn published_on(&self) -> Option<NaiveDate>;
}
