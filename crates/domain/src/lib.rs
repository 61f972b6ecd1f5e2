//! # weekday-form-domain
//!
//! Pure domain model for the weekday sample form.
//!
//! ## Responsibilities
//! - Foundational types: timestamps, time-zone settings, error conventions
//! - Define **day names** (the seven long English weekday names)
//! - Define the **sample form** (submission endpoint + the `name`, `number`
//!   and `day` fields, with `day` pre-filled)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Reading the clock is expressed as a trait in the `app` crate (port).

pub mod error;
pub mod time;

pub mod form;
pub mod weekday;
