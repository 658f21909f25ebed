//! Builder for configuring and constructing a shared `TempoContext`.

use std::sync::Arc;

use cadenza_core::{ContextConfig, TempoContext};

use crate::context::install_default_context;
use crate::Result;

/// # Example
///
/// ```
/// use cadenza::prelude::*;
///
/// let ctx = ContextBuilder::new()
///     .bpm(96.0)
///     .time_signature(6, 8)
///     .ppq(480)
///     .build()?;
///
/// assert_eq!(ctx.bpm(), 96.0);
/// assert_eq!(ctx.time_signature().beats_per_bar(), 3.0);
/// # Ok::<(), cadenza::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    config: ContextConfig,
    install_default: bool,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ContextConfig) -> Self {
        self.config = config;
        self
    }

    pub fn bpm(mut self, bpm: f64) -> Self {
        self.config = self.config.bpm(bpm);
        self
    }

    pub fn time_signature(mut self, numerator: u32, denominator: u32) -> Self {
        self.config = self.config.time_signature(numerator, denominator);
        self
    }

    pub fn sample_rate(mut self, sample_rate: f64) -> Self {
        self.config = self.config.sample_rate(sample_rate);
        self
    }

    pub fn ppq(mut self, ppq: u32) -> Self {
        self.config = self.config.ppq(ppq);
        self
    }

    /// Also install the built context as the process-wide default.
    pub fn install_as_default(mut self) -> Self {
        self.install_default = true;
        self
    }

    pub fn build(self) -> Result<Arc<TempoContext>> {
        let context = TempoContext::new(self.config)?;
        if self.install_default {
            install_default_context(Arc::clone(&context))?;
        }
        Ok(context)
    }
}
