//! Vendor Scout - Vendor Recommendation Engine
//!
//! This crate decides, for each line item of a food order, which vendor
//! should fulfill it. Administrator-supplied pairwise comparison matrices
//! are turned into criteria weights (Analytic Hierarchy Process), shipping
//! distance is computed with the haversine formula, and a bucketed scoring
//! pass blends distance, capacity fit, and price competitiveness into the
//! composite score used to rank candidates.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
