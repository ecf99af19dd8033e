//! Token split/join primitives for metric and label name translation.
//!
//! When OTLP names are rewritten into Prometheus conventions, disallowed
//! characters are replaced but word boundaries must survive. This crate
//! provides the two leaf operations that translation is built from:
//!
//! - [`split_tokens`]: scan a name with a caller-supplied boundary predicate,
//!   returning the tokens and the separator text found between each pair.
//! - [`join_with_separators`]: glue fragments back together from a parallel
//!   separator list, falling back to a default separator for uncovered gaps.
//!
//! Which characters count as boundaries, and whether non-ASCII separators
//! are kept, is decided by the caller.
//!
//! # Example
//!
//! ```
//! use prom_name_split::{join_with_separators, split_tokens, SeparatorStyle};
//!
//! let split = split_tokens(
//!     "http.server--duration",
//!     |c| !c.is_alphanumeric(),
//!     SeparatorStyle::Underscore,
//! );
//! assert_eq!(split.tokens(), ["http", "server", "duration"]);
//! assert_eq!(split.separators(), ["_", "__"]);
//!
//! let name = join_with_separators(split.tokens(), split.separators(), "_");
//! assert_eq!(name, "http_server__duration");
//! ```
//!
//! # Tracing
//!
//! Both operations emit `trace`-level events. Call [`init_tracing`] and run
//! with `RUST_LOG=prom_name_split=trace` to see them.

mod join;
mod span;
mod split;

pub use join::{join_with_separators, joined_len};
pub use span::{SpanError, TokenSpan};
pub use split::{split_tokens, token_spans, tokens_and_separators, SeparatorStyle, Split};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for this process.
///
/// Only takes effect when `RUST_LOG` is set and no global subscriber is
/// installed yet; a host's own subscriber is left in place. Repeated calls
/// are no-ops.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if installed.is_err() {
                tracing::debug!("global subscriber already set, keeping it");
            }
        }
    });
}
