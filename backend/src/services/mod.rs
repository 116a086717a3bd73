//! Business logic services for the Cafeteria Management Dashboard

pub mod reporting;
