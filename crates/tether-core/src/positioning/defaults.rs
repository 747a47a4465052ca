use crate::config::PositioningConfig;
use crate::positioning::merge::merge_middleware;
use serde_json::{Map, Value, json};
use tether_common::protocol::{Alignment, ArrowOption, NamedMiddleware, Placement};

pub const AUTO_PLACEMENT: &str = "autoPlacement";
pub const FLIP: &str = "flip";
pub const SHIFT: &str = "shift";
pub const ARROW: &str = "arrow";
pub const LIMIT_SHIFT: &str = "limitShift";

fn options<const N: usize>(entries: [(&str, Value); N]) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Directional middleware for a step anchored at `placement`, in order:
/// `autoPlacement` or `flip`, `shift`, `arrow` (when enabled), then the
/// configured extras merged by name.
pub fn default_middleware(
    placement: Placement,
    arrow: &ArrowOption,
    config: &PositioningConfig,
) -> Vec<NamedMiddleware> {
    let alignment = placement.alignment();
    let mut middleware = Vec::with_capacity(3 + config.middleware.len());

    if placement.is_auto() {
        middleware.push(NamedMiddleware::with_options(
            AUTO_PLACEMENT,
            options([
                ("crossAxis", json!(true)),
                ("alignment", json!(alignment.map(Alignment::as_str))),
            ]),
        ));
    } else {
        middleware.push(NamedMiddleware::new(FLIP));
    }

    middleware.push(NamedMiddleware::with_options(
        SHIFT,
        options([
            ("crossAxis", json!(config.shift_cross_axis)),
            ("limiter", json!(LIMIT_SHIFT)),
        ]),
    ));

    if arrow.is_enabled() {
        // Padding only matters when the tooltip is aligned to an edge.
        let padding = match alignment {
            Some(_) => arrow.padding().unwrap_or(config.arrow_padding),
            None => 0.0,
        };
        middleware.push(NamedMiddleware::with_options(
            ARROW,
            options([("padding", json!(padding))]),
        ));
    }

    merge_middleware(&middleware, &config.middleware)
}
