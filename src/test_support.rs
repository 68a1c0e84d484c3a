//! Test-only utilities for safely mutating process-global state in tests.

/// RAII override of one environment variable.
///
/// [`with`](Self::with) installs a value (or unsets the variable) and the
/// prior state comes back when the guard drops. `std::env::set_var` can race
/// with concurrent readers, hence the `unsafe` blocks; callers serialize
/// with `#[serial(env)]`.
pub struct EnvGuard {
    key: &'static str,
    prev: Option<String>,
}

impl EnvGuard {
    /// Overrides `key` for the guard's lifetime; `None` unsets it.
    #[must_use]
    pub fn with(key: &'static str, val: Option<&str>) -> Self {
        let prev = std::env::var(key).ok();
        Self::apply(key, val);
        Self { key, prev }
    }

    fn apply(key: &str, val: Option<&str>) {
        match val {
            Some(v) => unsafe { std::env::set_var(key, v) },
            None => unsafe { std::env::remove_var(key) },
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        Self::apply(self.key, self.prev.as_deref());
    }
}
