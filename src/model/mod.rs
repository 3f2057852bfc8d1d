//! # Campus Model
//!
//! Plain DTOs shared by the graph store, the search engine and the scene.
//!
//! Design rule: no rendering handles and no search state here.
//! This module is pure data: no I/O, no globals.

pub mod landmark;
pub mod route;

pub use landmark::{Color, Landmark, Vec3};
pub use route::Route;
