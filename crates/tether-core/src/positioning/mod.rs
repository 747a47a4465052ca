//! Positioning options for the external placement engine.
//!
//! Defaults are built from the resolved anchor and the configured
//! [`PositioningConfig`], then the step's overrides are applied on top:
//! - scalars (`strategy`, `placement`, passthrough fields) replace defaults
//! - `middleware` merges by name, see [`merge_middleware`]

pub mod defaults;
pub mod merge;

pub use defaults::default_middleware;
pub use merge::{apply_overrides, merge_middleware};

use crate::config::PositioningConfig;
use crate::resolution::ResolvedAttachment;
use crate::step::Step;
use serde::Serialize;
use tether_common::protocol::PositioningOptions;
use tracing::debug;

/// Configurator output: the centering decision plus the engine options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Positioning {
    pub centered: bool,
    pub options: PositioningOptions,
}

/// Build the options object for `step` anchored to `target`.
///
/// Centered steps (no target, missing element, or no placement) still get a
/// strategy and the caller's overrides, but none of the directional
/// middleware.
pub fn configure_positioning<E>(
    target: Option<&ResolvedAttachment<E>>,
    step: &Step<E>,
    config: &PositioningConfig,
) -> Positioning {
    let anchor = target.and_then(ResolvedAttachment::anchor);

    let mut options = PositioningOptions {
        strategy: config.strategy,
        ..PositioningOptions::default()
    };

    if let Some((_, placement)) = anchor {
        options.middleware = default_middleware(placement, &step.options.arrow, config);
        if !placement.is_auto() {
            options.placement = Some(placement);
        }
    }

    for overrides in step.options.overrides() {
        apply_overrides(&mut options, overrides);
    }

    let centered = anchor.is_none();
    debug!(
        step = ?step.id,
        centered,
        strategy = ?options.strategy,
        middleware = options.middleware.len(),
        "configured positioning"
    );

    Positioning { centered, options }
}
