//! # weekday-form-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`Clock` port** that supplies the current instant
//! - Provide **in-process clocks** that don't need an adapter crate:
//!   - `SystemClock` — reads the host clock
//!   - `FixedClock` — always returns the same instant (simulated dates)
//! - Define the **`PageService`** use-case: resolve today's weekday in the
//!   configured zone and build the sample form around it
//!
//! ## Dependency rule
//! Depends on `weekday-form-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod clock;
pub mod ports;
pub mod services;
