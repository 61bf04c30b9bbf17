//! Reusable control plans and applying them to customers.

mod book;

pub use book::PlanBook;
