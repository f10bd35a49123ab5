use log::debug;
use std::collections::HashMap;

/// Snapshot of the process environment. Values that are not valid unicode are skipped.
pub type Environment = HashMap<String, String>;

pub fn capture_environment() -> Environment {
    let mut env = Environment::new();
    for (key, value) in std::env::vars_os() {
        match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => {
                env.insert(key, value);
            }
            (key, _) => {
                let name = key.unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
                debug!("Skipping environment variable {} with a non-unicode name or value", name);
            }
        }
    }
    env
}

/// Returns the variable's value only when it is set and non-empty.
pub fn non_empty_var<'a>(env: &'a Environment, name: &str) -> Option<&'a str> {
    env.get(name).map(String::as_str).filter(|value| !value.is_empty())
}

/// Shell-style flag check: only the literal "1" enables it.
pub fn is_flag_set(env: &Environment, name: &str) -> bool {
    env.get(name).is_some_and(|value| value == "1")
}
