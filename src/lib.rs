//! # Design Patterns Catalog
//!
//! Classic object-oriented design patterns, each one a small self-contained
//! module with toy domain objects (mostly cars) and a `demo` that prints a
//! documented transcript.
//!
//! ## Patterns Covered
//!
//! 1. **Creational** - Abstract Factory, Factory Method, Builder, Prototype,
//!    Singleton
//! 2. **Structural** - Adapter, Bridge, Composite, Decorator, Facade,
//!    Flyweight, Proxy
//! 3. **Behavioral** - Chain of Responsibility, Command, Iterator, Mediator,
//!    Memento, Observer, State, Strategy, Template Method, Visitor
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin p1_creational
//! cargo run --bin p2_structural
//! cargo run --bin p3_behavioral
//!
//! cargo run --bin patterns -- list
//! cargo run --bin patterns -- run strategy decorator
//! cargo run --bin patterns -- verify
//! cargo run --bin patterns -- readme --output PATTERNS.md
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - catalog error type
//! - `serde` / `toml` / `serde_json` - configuration and JSON listings
//! - `colored` - headings on the terminal
//! - `tracing` - runner events

pub mod console;

pub mod behavioral;
pub mod creational;
pub mod structural;

pub mod catalog;
pub mod config;
pub mod error;
pub mod logger;
pub mod readme;
pub mod runner;

pub use catalog::{Catalog, Category, Pattern};
pub use config::Config;
pub use console::{Console, Stdout, Transcript};
pub use error::{CatalogError, Result};
pub use runner::Runner;
