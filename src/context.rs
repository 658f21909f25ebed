//! Process-wide default tempo context.
//!
//! Set once at host startup, read by the [`frequency`] and [`midi`]
//! convenience constructors. Library code should take an explicit
//! `&Arc<TempoContext>` instead.

use std::sync::{Arc, OnceLock};

use cadenza_core::{ContextConfig, TempoContext};
use cadenza_units::{FrequencyValue, RawValue};
use tracing::debug;

use crate::{Error, Result};

static DEFAULT_CONTEXT: OnceLock<Arc<TempoContext>> = OnceLock::new();

/// Fails with [`Error::DefaultContextInstalled`] on every call after the first.
pub fn install_default_context(context: Arc<TempoContext>) -> Result<()> {
    DEFAULT_CONTEXT
        .set(context)
        .map_err(|_| Error::DefaultContextInstalled)?;
    debug!("Installed default tempo context");
    Ok(())
}

/// Builds a context from `config` and installs it as the default.
pub fn init_default_context(config: ContextConfig) -> Result<Arc<TempoContext>> {
    let context = TempoContext::new(config)?;
    install_default_context(Arc::clone(&context))?;
    Ok(context)
}

pub fn default_context() -> Result<Arc<TempoContext>> {
    DEFAULT_CONTEXT.get().cloned().ok_or(Error::MissingContext)
}

/// Hertz-canonical value bound to the default context.
pub fn frequency(value: impl Into<RawValue>, units: Option<&str>) -> Result<FrequencyValue> {
    Ok(FrequencyValue::frequency(&default_context()?, value, units)?)
}

/// MIDI-canonical value bound to the default context.
///
/// ```
/// let ctx = cadenza::init_default_context(Default::default())?;
/// let a4 = cadenza::midi("A4", None)?;
/// assert_eq!(a4.transpose(3.0)?.to_note()?, "C5");
/// # drop(ctx);
/// # Ok::<(), cadenza::Error>(())
/// ```
pub fn midi(value: impl Into<RawValue>, units: Option<&str>) -> Result<FrequencyValue> {
    Ok(FrequencyValue::midi(&default_context()?, value, units)?)
}
