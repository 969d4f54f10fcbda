use std::{
    collections::{BTreeMap, BTreeSet},
    string::{String, ToString},
};

/// The variable namespace values are loaded into.
pub trait Environment {
    /// Names of every variable currently defined.
    fn keys(&self) -> BTreeSet<String>;

    /// Define `key` as `value`.
    fn set(&mut self, key: &str, value: &str);
}

/// The environment of the running process.
///
/// Setting variables mutates process-global state. Call [`crate::load`]
/// early in `main`, before other threads are started.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn keys(&self) -> BTreeSet<String> {
        std::env::vars_os()
            .map(|(key, _)| key.to_string_lossy().into_owned())
            .collect()
    }

    /// # Panics
    ///
    /// If `key` is empty or contains `=` or NUL, or `value` contains NUL.
    /// [`crate::apply`] rejects such entries before calling this.
    fn set(&mut self, key: &str, value: &str) {
        // SAFETY: callers are told to load before spawning threads, so no
        // other thread reads the environment concurrently.
        unsafe { std::env::set_var(key, value) };
    }
}

impl Environment for BTreeMap<String, String> {
    fn keys(&self) -> BTreeSet<String> {
        BTreeMap::keys(self).cloned().collect()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_environment_round_trips() {
        let mut env: BTreeMap<String, String> = BTreeMap::new();
        env.set("A", "1");
        env.set("A", "2");
        env.set("B", "");
        assert_eq!(
            Environment::keys(&env),
            BTreeSet::from(["A".to_string(), "B".to_string()])
        );
        assert_eq!(env["A"], "2");
    }

    #[test]
    fn process_environment_sees_its_own_writes() {
        let key = "QUOTENV_ENV_RS_PROCESS_TEST";
        let mut env = ProcessEnv;
        assert!(!env.keys().contains(key));
        env.set(key, "value");
        assert!(env.keys().contains(key));
        assert_eq!(std::env::var(key).as_deref(), Ok("value"));
    }
}
