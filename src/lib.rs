//! Hybrid flow shop scheduling.
//!
//! A hybrid flow shop is a fixed sequence of stages, each with one or
//! more identical parallel machines, through which every job passes in
//! stage order. This crate provides:
//!
//! - **Engine**: a deterministic discrete-event simulator mapping a job
//!   ordering to a time-stamped schedule and its makespan.
//! - **Genetic search (GA)**: elitism, tournament selection, order
//!   crossover and swap mutation over job permutations.
//! - **Simulated Annealing (SA)**: swap neighborhood with Metropolis
//!   acceptance and geometric cooling.
//! - **Hill-climbing (HC)**: swap neighborhood, accepts ties.
//! - **Driver / stats**: an iteration-budgeted, cancellable run loop and a
//!   multi-restart comparison of strategies.
//!
//! # Architecture
//!
//! Every search algorithm is a step function
//! `(instance, state, rng) -> (state, schedule)`. State is passed in and
//! returned explicitly; randomness comes from a caller-supplied seedable
//! generator. The engine is pure, so evaluations may run in parallel
//! (`parallel` feature, via rayon).

pub mod backend;
pub mod baseline;
pub mod driver;
pub mod engine;
pub mod error;
pub mod ga;
pub mod hc;
pub mod models;
pub mod operators;
pub mod random;
pub mod sa;
pub mod search;
pub mod stats;

pub use error::{FlowShopError, Result};
