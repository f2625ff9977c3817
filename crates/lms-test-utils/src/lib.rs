//! Shared test fixtures for the lms-core workspace.
//!
//! This crate provides standardised builders to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`catalog`] — sibling scope fixtures for ordering tests
//! - [`curriculum`] — unit sequence fixtures for progression tests

pub mod catalog;
pub mod curriculum;
