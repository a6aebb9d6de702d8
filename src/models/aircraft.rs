//! Aircraft design models.
//!
//! This module contains models for aircraft-level design studies, where a
//! handful of disciplines (thermal, structures, performance) are coupled
//! into a single analysis.

pub mod windshield_cascade;
