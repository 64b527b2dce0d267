//! View layer of the campus event board.
//!
//! Fetches events and reviews from the backend API, renders them as element
//! trees and turns user actions into backend mutations, refetching the whole
//! list after each one.

pub mod action;
pub mod client;
pub mod config;
pub mod controller;
pub mod handlers;
pub mod models;
pub mod render;
pub mod routes;
pub mod state;
pub mod utils;
pub mod view;
