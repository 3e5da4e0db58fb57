//! Pure decision-support algorithms for OptiRelief.
//!
//! This crate contains the relief-coordination logic that is independent of
//! any database, HTTP layer, or runtime. Every component is a stateless
//! function over snapshots of plain data: callers fetch entities from
//! storage, invoke one component, and own persistence of the results.
//! Nothing here blocks, logs, or retains state across calls, so concurrent
//! invocations need no coordination.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`allocation`] | Capacity-constrained supply selection (0/1 knapsack) |
//! | [`error`] | Input-validation failures shared across components |
//! | [`matching`] | Volunteer-to-region assignment (backtracking search) |
//! | [`priority`] | Urgency scoring and stable ranking of affected areas |
//! | [`routing`] | Shortest-path and all-pairs routing over the location graph |
//! | [`triage`] | Keyword urgency scanning of free-text requests |

pub mod allocation;
pub mod error;
pub mod matching;
pub mod priority;
pub mod routing;
pub mod triage;
