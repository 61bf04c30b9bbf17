use std::fmt;

use crate::slot::{DAYS_PER_WEEK, WeekSlot};

/// One `minutes hours * * days` clause of a recurrence string.
///
/// Lists are kept sorted ascending without duplicates. The two `*` fields
/// are position markers only and carry no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub minutes: Vec<u8>,
    pub hours: Vec<u8>,
    pub days: Vec<u8>,
}

impl Clause {
    /// Builds a clause, normalising each list to sorted unique values.
    #[must_use]
    pub fn new(
        minutes: impl IntoIterator<Item = u8>,
        hours: impl IntoIterator<Item = u8>,
        days: impl IntoIterator<Item = u8>,
    ) -> Self {
        Self {
            minutes: sorted_unique(minutes),
            hours: sorted_unique(hours),
            days: sorted_unique(days),
        }
    }

    /// Whether the clause's day list names `day`.
    #[must_use]
    pub fn applies_to(&self, day: u8) -> bool {
        self.days.contains(&day)
    }

    /// Start times, in minutes past midnight, from the hour × minute cross product.
    pub fn start_minutes(&self) -> impl Iterator<Item = u16> + '_ {
        self.hours.iter().flat_map(move |&hour| {
            self.minutes
                .iter()
                .map(move |&minute| u16::from(hour) * 60 + u16::from(minute))
        })
    }

    /// Grid slots from the day × hour × minute cross product.
    ///
    /// Any minute other than 30 lands on the `:00` half of its hour.
    pub fn slots(&self) -> impl Iterator<Item = WeekSlot> + '_ {
        self.days
            .iter()
            .filter(|&&day| day < DAYS_PER_WEEK)
            .flat_map(move |&day| {
                self.hours.iter().flat_map(move |&hour| {
                    self.minutes.iter().filter_map(move |&minute| {
                        let half_hour = hour.checked_mul(2)?.checked_add(u8::from(minute == 30))?;
                        WeekSlot::new(day, half_hour).ok()
                    })
                })
            })
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} * * {}",
            join(&self.minutes),
            join(&self.hours),
            join(&self.days)
        )
    }
}

fn sorted_unique(values: impl IntoIterator<Item = u8>) -> Vec<u8> {
    let mut values: Vec<u8> = values.into_iter().collect();
    values.sort_unstable();
    values.dedup();
    values
}

fn join(values: &[u8]) -> String {
    values
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
