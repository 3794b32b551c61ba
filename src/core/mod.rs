//! Core library components.
//!
//! This module contains the reusable business logic for encrypted env file
//! management: key handling, the encrypted codec, and the operations that
//! tie the files to the process environment.

pub mod atomic;
pub mod binding;
pub mod codec;
pub mod constants;
pub mod environment;
pub mod envfile;
pub mod keystore;
pub mod validation;
