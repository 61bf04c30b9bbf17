use std::collections::BTreeMap;

use serde::Serialize;

use gridflex_core::types::DerType;
use gridflex_recur::Schedule;

use crate::error::{ServiceError, ServiceResult};

/// What a customer list shows for one ICP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub icp: String,
    pub has_schedule: bool,
    pub scheduled_der_types: Vec<DerType>,
}

/// In-memory store of schedules per ICP.
///
/// An ICP holds at most one schedule per DER type; saving another schedule
/// for the same type replaces it wholesale. ICP ids are keyed with
/// surrounding whitespace trimmed, on write and on every lookup.
#[derive(Debug, Clone, Default)]
pub struct ScheduleBook {
    by_icp: BTreeMap<String, Vec<Schedule>>,
}

impl ScheduleBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Saves `schedule` for every ICP in `icps`.
    ///
    /// For each ICP the existing schedule with the same DER type is replaced,
    /// otherwise the schedule is appended.
    ///
    /// ## Errors
    /// Returns `ValidationError` if `icps` is empty, an ICP id is blank, or
    /// the validity window ends before it starts. Nothing is saved on error.
    #[tracing::instrument(skip(self, schedule), fields(der_type = %schedule.der_type))]
    pub fn save(&mut self, icps: &[String], schedule: &Schedule) -> ServiceResult<()> {
        validate_icps(icps)?;
        if schedule.to < schedule.from {
            return Err(ServiceError::ValidationError(format!(
                "schedule ends ({}) before it starts ({})",
                schedule.to, schedule.from
            )));
        }

        for icp in icps {
            let schedules = self.by_icp.entry(icp_key(icp).to_string()).or_default();
            match schedules
                .iter_mut()
                .find(|existing| existing.der_type == schedule.der_type)
            {
                Some(existing) => {
                    tracing::debug!(icp = %icp, "Replacing schedule");
                    existing.clone_from(schedule);
                }
                None => {
                    tracing::debug!(icp = %icp, "Adding schedule");
                    schedules.push(schedule.clone());
                }
            }
        }
        Ok(())
    }

    /// ## Summary
    /// Removes the schedule for `der_type` from `icp`.
    ///
    /// ## Errors
    /// Returns `NotFound` if the ICP has no schedule for that DER type.
    #[tracing::instrument(skip(self))]
    pub fn delete(&mut self, icp: &str, der_type: DerType) -> ServiceResult<Schedule> {
        let not_found = || ServiceError::NotFound(format!("no {der_type} schedule for ICP {icp}"));

        let key = icp_key(icp);
        let schedules = self.by_icp.get_mut(key).ok_or_else(not_found)?;
        let index = schedules
            .iter()
            .position(|schedule| schedule.der_type == der_type)
            .ok_or_else(not_found)?;
        let removed = schedules.remove(index);
        if schedules.is_empty() {
            self.by_icp.remove(key);
        }
        Ok(removed)
    }

    /// Schedules of one ICP, in the order they were first saved.
    #[must_use]
    pub fn schedules(&self, icp: &str) -> &[Schedule] {
        self.by_icp
            .get(icp_key(icp))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn summary(&self, icp: &str) -> ScheduleSummary {
        let scheduled_der_types: Vec<DerType> =
            self.schedules(icp).iter().map(|s| s.der_type).collect();
        ScheduleSummary {
            icp: icp_key(icp).to_string(),
            has_schedule: !scheduled_der_types.is_empty(),
            scheduled_der_types,
        }
    }

    /// ## Summary
    /// DER types that can still be scheduled.
    ///
    /// With exactly one ICP this excludes the types it already has. With
    /// several (or none) every type is offered, and saving replaces per ICP.
    #[must_use]
    pub fn available_der_types(&self, icps: &[String]) -> Vec<DerType> {
        let [icp] = icps else {
            return DerType::all().to_vec();
        };
        let taken = self.schedules(icp);
        DerType::all()
            .into_iter()
            .filter(|der_type| !taken.iter().any(|s| s.der_type == *der_type))
            .collect()
    }
}

fn icp_key(icp: &str) -> &str {
    icp.trim()
}

fn validate_icps(icps: &[String]) -> ServiceResult<()> {
    if icps.is_empty() {
        return Err(ServiceError::ValidationError(
            "at least one ICP is required".to_string(),
        ));
    }
    if icps.iter().any(|icp| icp.trim().is_empty()) {
        return Err(ServiceError::ValidationError(
            "ICP ids must not be blank".to_string(),
        ));
    }
    Ok(())
}
