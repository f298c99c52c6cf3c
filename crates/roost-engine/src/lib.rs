//! Fixed-point simulation engine for roost grids.
//!
//! [`Engine`] repeatedly applies a [`Rule`] to every cell of a
//! [`roost_grid::Grid`] until two successive generations compare equal,
//! then reports the stabilized grid together with [`RunMetrics`]. A
//! defensive generation cap ([`EngineConfig::max_generations`]) guards
//! against rules that never converge.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod metrics;
pub mod rule;

pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, EngineError, Stabilized};
pub use metrics::RunMetrics;
pub use rule::Rule;
