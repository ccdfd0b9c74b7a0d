use std::env;

/// Runtime environment, selected by the `ENV` variable.
/// Anything other than `production` counts as development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

pub fn which() -> Environment {
    match env::var("ENV") {
        Ok(v) if v.eq_ignore_ascii_case("production") => Environment::Production,
        _ => Environment::Development,
    }
}
