//! Dioxus views for the calculator.

pub mod components;
pub mod pages;
pub mod shell;
pub mod theme;
