//! Entity Module

pub mod choice;
pub mod question;
