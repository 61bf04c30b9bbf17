use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use gridflex_core::types::DerType;

/// Anything that carries a recurrence and an inclusive validity window.
///
/// The expander only needs these four accessors, so schedules and control
/// plans can be expanded side by side.
pub trait Scheduled {
    fn recurrence(&self) -> &str;
    fn valid_from(&self) -> NaiveDate;
    fn valid_to(&self) -> NaiveDate;
    fn der_type(&self) -> DerType;

    /// Whether `date` falls inside `[valid_from, valid_to]`.
    fn is_active_on(&self, date: NaiveDate) -> bool {
        self.valid_from() <= date && date <= self.valid_to()
    }
}

/// A recurrence attached to one DER type of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub der_type: DerType,
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(rename = "cron")]
    pub recurrence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
}

impl Schedule {
    #[must_use]
    pub fn new(der_type: DerType, from: NaiveDate, to: NaiveDate, recurrence: impl Into<String>) -> Self {
        Self {
            der_type,
            from,
            to,
            recurrence: recurrence.into(),
            plan_id: None,
        }
    }

    /// Whether `date` falls inside the inclusive validity window.
    #[must_use]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        Scheduled::is_active_on(self, date)
    }
}

impl Scheduled for Schedule {
    fn recurrence(&self) -> &str {
        &self.recurrence
    }

    fn valid_from(&self) -> NaiveDate {
        self.from
    }

    fn valid_to(&self) -> NaiveDate {
        self.to
    }

    fn der_type(&self) -> DerType {
        self.der_type
    }
}

/// The schedule carried by a [`ControlPlan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSchedule {
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(rename = "cron")]
    pub recurrence: String,
}

/// A reusable, named schedule template for one DER type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlan {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub der_type: DerType,
    pub schedule: PlanSchedule,
}

impl ControlPlan {
    /// ## Summary
    /// Instantiates this plan as a customer schedule tagged with the plan id.
    #[must_use]
    pub fn to_schedule(&self) -> Schedule {
        Schedule {
            der_type: self.der_type,
            from: self.schedule.from,
            to: self.schedule.to,
            recurrence: self.schedule.recurrence.clone(),
            plan_id: Some(self.id.clone()),
        }
    }
}

impl Scheduled for ControlPlan {
    fn recurrence(&self) -> &str {
        &self.schedule.recurrence
    }

    fn valid_from(&self) -> NaiveDate {
        self.schedule.from
    }

    fn valid_to(&self) -> NaiveDate {
        self.schedule.to
    }

    fn der_type(&self) -> DerType {
        self.der_type
    }
}

impl<T: Scheduled + ?Sized> Scheduled for &T {
    fn recurrence(&self) -> &str {
        (**self).recurrence()
    }

    fn valid_from(&self) -> NaiveDate {
        (**self).valid_from()
    }

    fn valid_to(&self) -> NaiveDate {
        (**self).valid_to()
    }

    fn der_type(&self) -> DerType {
        (**self).der_type()
    }
}
