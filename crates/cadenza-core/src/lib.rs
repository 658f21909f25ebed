//! Tempo context kernel for cadenza.
//!
//! - [`TempoContext`]: shared, mutable BPM / time signature / sample rate / PPQ
//! - [`TempoSnapshot`]: consistent read-only view used by conversions
//! - [`ContextConfig`]: validated initial state
//!
//! # Example
//!
//! ```
//! use cadenza_core::{ContextConfig, TempoContext};
//!
//! let ctx = TempoContext::new(ContextConfig::default().bpm(90.0))?;
//! assert_eq!(ctx.snapshot().seconds_per_beat(), 60.0 / 90.0);
//! # Ok::<(), cadenza_core::Error>(())
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::ContextConfig;

mod context;
pub use context::{TempoContext, TempoSnapshot};

mod time_signature;
pub use time_signature::TimeSignature;
