//! Core types shared across the wps crates
//!
//! This crate holds the constants every other crate has to agree on:
//!
//! - **Schema constants**: canonical structured-logging field keys and event names
//! - **Option keys**: names of the persisted option records
//! - **Markup tokens**: CSS class tokens carried by injected wrapper markup

pub mod markup;
pub mod options;
pub mod schema;
