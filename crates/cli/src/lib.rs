//! ARIA Audit CLI library

pub mod commands;
