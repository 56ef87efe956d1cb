//! ward-core
//!
//! Pure domain types shared between the scoring engine and the ward
//! application: the persisted shape of a scored clinical scale and the
//! outcome attached to it. No scoring logic lives here.

pub mod error;
pub mod models;
