//! Résumé builder: identity-keyed persistence, public slug lookup and
//! document rendering served over HTTP, plus the editor-side state machinery
//! (form reducer, debounced preview, local mirror) that drives it.

pub mod backup;
pub mod config;
pub mod db;
pub mod editor;
pub mod errors;
pub mod models;
pub mod persistence;
pub mod photo;
pub mod public;
pub mod render;
pub mod routes;
pub mod share;
pub mod state;
