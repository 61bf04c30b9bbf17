use gridflex_recur::{ControlPlan, Schedule};

use crate::error::{ServiceError, ServiceResult};
use crate::schedule::ScheduleBook;

/// In-memory store of control plans, in creation order.
#[derive(Debug, Clone, Default)]
pub struct PlanBook {
    plans: Vec<ControlPlan>,
}

impl PlanBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Creates or replaces a plan. Returns the plan as stored and whether
    /// it was inserted (`true`) rather than replacing an existing one.
    ///
    /// A plan with an empty id is new and receives a random UUID. A plan
    /// whose id is already known replaces the stored one; an unknown
    /// non-empty id is inserted as given.
    ///
    /// ## Errors
    /// Returns `ValidationError` for a blank name or an inverted validity
    /// window, and `Conflict` when another plan already uses the name.
    #[tracing::instrument(skip(self, plan), fields(plan_id = %plan.id, name = %plan.name))]
    pub fn save(&mut self, mut plan: ControlPlan) -> ServiceResult<(ControlPlan, bool)> {
        plan.name = plan.name.trim().to_string();
        plan.id = plan.id.trim().to_string();
        if plan.name.is_empty() {
            return Err(ServiceError::ValidationError(
                "plan name must not be blank".to_string(),
            ));
        }
        if plan.schedule.to < plan.schedule.from {
            return Err(ServiceError::ValidationError(format!(
                "plan ends ({}) before it starts ({})",
                plan.schedule.to, plan.schedule.from
            )));
        }
        if self
            .plans
            .iter()
            .any(|other| other.id != plan.id && other.name.eq_ignore_ascii_case(&plan.name))
        {
            return Err(ServiceError::Conflict(format!(
                "a plan named {:?} already exists",
                plan.name
            )));
        }

        if plan.id.is_empty() {
            plan.id = uuid::Uuid::new_v4().to_string();
            tracing::debug!(plan_id = %plan.id, "Assigned plan id");
        }

        let inserted = match self.plans.iter_mut().find(|existing| existing.id == plan.id) {
            Some(existing) => {
                existing.clone_from(&plan);
                false
            }
            None => {
                self.plans.push(plan.clone());
                true
            }
        };
        Ok((plan, inserted))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ControlPlan> {
        self.plans.iter().find(|plan| plan.id == id)
    }

    #[must_use]
    pub fn list(&self) -> &[ControlPlan] {
        &self.plans
    }

    /// ## Summary
    /// Removes a plan.
    ///
    /// Schedules previously applied from the plan keep their plan id.
    ///
    /// ## Errors
    /// Returns `NotFound` if no plan has this id.
    #[tracing::instrument(skip(self))]
    pub fn delete(&mut self, id: &str) -> ServiceResult<ControlPlan> {
        let index = self
            .plans
            .iter()
            .position(|plan| plan.id == id)
            .ok_or_else(|| ServiceError::NotFound(format!("plan {id}")))?;
        Ok(self.plans.remove(index))
    }

    /// ## Summary
    /// Saves the plan's schedule for every ICP, tagged with the plan id.
    ///
    /// ## Errors
    /// Returns `NotFound` for an unknown plan and the errors of
    /// [`ScheduleBook::save`].
    #[tracing::instrument(skip(self, schedules))]
    pub fn apply(
        &self,
        plan_id: &str,
        icps: &[String],
        schedules: &mut ScheduleBook,
    ) -> ServiceResult<Schedule> {
        let plan = self
            .get(plan_id)
            .ok_or_else(|| ServiceError::NotFound(format!("plan {plan_id}")))?;
        let schedule = plan.to_schedule();
        schedules.save(icps, &schedule)?;
        tracing::debug!(icp_count = icps.len(), "Applied plan");
        Ok(schedule)
    }
}
