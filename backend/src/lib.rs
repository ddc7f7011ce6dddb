//! # Postos Rust Backend
//!
//! Metrics backend for a network of service locations ("postos de
//! atendimento").
//!
//! This crate provides a Rust-based backend for the posto operations panel,
//! offering record registration and a dashboard view that filters,
//! aggregates, paginates, and charts the posto collection. The backend
//! exposes a REST API via Axum for the React frontend.
//!
//! ## Features
//!
//! - **Record Registry**: Create, update, and delete posto records
//! - **Dashboard Engine**: Compute KPIs, top rankings, derived daily
//!   capacity, and chart series from the in-memory collection
//! - **Pagination**: Fixed-size pages over the filtered collection
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`db`]: Repository pattern and the in-memory record store
//! - [`models`]: Domain model for posto records
//! - [`services`]: The metrics engine (filter, derive, aggregate, present)
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
