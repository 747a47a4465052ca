use tether_common::protocol::{FloatingUiOverrides, NamedMiddleware, PositioningOptions};
use tracing::trace;

/// Merge caller middleware into `defaults` by name.
///
/// - a caller entry naming an existing entry replaces that entry's `options`
///   in place; an entry without `options` leaves them untouched
/// - a caller entry with a new name is appended
/// - defaults nobody named are kept as they are
pub fn merge_middleware(
    defaults: &[NamedMiddleware],
    overrides: &[NamedMiddleware],
) -> Vec<NamedMiddleware> {
    let mut merged = defaults.to_vec();

    for entry in overrides {
        match merged.iter_mut().find(|existing| existing.name == entry.name) {
            Some(existing) => {
                trace!(name = %entry.name, "overriding middleware options");
                if let Some(options) = &entry.options {
                    existing.options = Some(options.clone());
                }
            }
            None => {
                trace!(name = %entry.name, "appending middleware");
                merged.push(entry.clone());
            }
        }
    }

    merged
}

/// Apply one caller override block on top of `options`.
pub fn apply_overrides(options: &mut PositioningOptions, overrides: &FloatingUiOverrides) {
    if let Some(strategy) = overrides.strategy {
        options.strategy = strategy;
    }
    if let Some(placement) = overrides.placement {
        options.placement = Some(placement);
    }
    if let Some(middleware) = &overrides.middleware {
        options.middleware = merge_middleware(&options.middleware, middleware);
    }
    for (key, value) in &overrides.extra {
        options.extra.insert(key.clone(), value.clone());
    }
}
