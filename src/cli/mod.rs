//! Command line argument handling

pub mod args;
