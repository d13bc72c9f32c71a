//! Process-wide default options
//!
//! Every public operation takes an explicit [`FormatOptions`] reference;
//! this module only provides the shared record callers may read as a base
//! for per-call overrides, or replace to change library-wide defaults.

use std::sync::{OnceLock, PoisonError, RwLock};

use crate::types::FormatOptions;

static DEFAULTS: OnceLock<RwLock<FormatOptions>> = OnceLock::new();

fn store() -> &'static RwLock<FormatOptions> {
    DEFAULTS.get_or_init(|| RwLock::new(FormatOptions::default()))
}

/// Get a snapshot of the current process-wide default options
pub fn defaults() -> FormatOptions {
    store()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the process-wide default options
pub fn set_defaults(options: FormatOptions) {
    *store().write().unwrap_or_else(PoisonError::into_inner) = options;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_roundtrip() {
        let original = defaults();
        assert_eq!(original.symbol, "$");
        assert_eq!(original.precision, 2);

        set_defaults(original.clone().with_symbol("£").with_precision(0));
        let replaced = defaults();
        assert_eq!(replaced.symbol, "£");
        assert_eq!(replaced.precision, 0);

        set_defaults(original.clone());
        assert_eq!(defaults(), original);
    }
}
