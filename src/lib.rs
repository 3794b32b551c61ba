//! envault - encrypted env files for process bootstrap.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── commands      # init/set/del/clear handlers
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── atomic        # Atomic file writes and permissions
//!     ├── binding       # Logical name -> variable key bindings
//!     ├── codec         # Mapping <-> encrypted blob
//!     ├── environment   # Process environment abstraction
//!     ├── envfile       # Encrypted env file operations
//!     ├── keystore      # Key generation and persistence
//!     └── validation    # Variable name and value rules
//! ```
//!
//! # Features
//!
//! - XChaCha20-Poly1305 encrypted variable files
//! - Atomic whole-file rewrites, no partial state on disk
//! - Load into the process environment with defaults and shadowing
//! - Declarative logical-name bindings for applications
//! - Testable environment abstraction

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::binding::Bindings;
pub use crate::core::environment::{Environment, MemoryEnv, ProcessEnv};
pub use crate::core::envfile::EnvFile;
pub use crate::core::keystore::{KeyStore, MasterKey};
pub use crate::error::{Error, Result};
