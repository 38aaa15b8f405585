use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Serializes access to process-global env vars so parallel tests don't
/// race, and restores the previous values afterwards even if `f` panics.
///
/// `changes` is a list of `(key, value)` pairs: `Some(v)` sets the
/// variable, `None` removes it.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = RestoreEnv::apply(changes);
    f()
}

struct RestoreEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl RestoreEnv {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let snapshot = changes
            .iter()
            .map(|(k, _)| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for RestoreEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
