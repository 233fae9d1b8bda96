use std::{env::var, sync::Arc, time::Duration};

use dotenv::dotenv;
use eyre::{bail, Context, Error};
use log::info;

pub const SECRET_KEY_VAR: &str = "PAYCHANGU_SECRET_KEY";
pub const TIMEOUT_VAR: &str = "PAYCHANGU_TIMEOUT_SECS";

#[derive(Clone)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone)]
pub struct EnvInner {
    secret_key: String,
    timeout: Option<Duration>,
}

impl Env {
    pub fn new(secret_key: String, timeout: Option<Duration>) -> Env {
        Env(Arc::new(EnvInner {
            secret_key,
            timeout,
        }))
    }

    pub fn secret_key(&self) -> &str {
        &self.0.secret_key
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.0.timeout
    }

    pub fn load() -> Result<Env, Error> {
        if let Err(err) = dotenv() {
            info!("Failed to load .env file: {}", err);
        }

        let secret_key = var(SECRET_KEY_VAR).context("PAYCHANGU_SECRET_KEY is not set")?;
        let timeout = match var(TIMEOUT_VAR) {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };
        Ok(Env::new(secret_key, timeout))
    }
}

impl std::fmt::Debug for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env")
            .field("secret_key", &"***")
            .field("timeout", &self.0.timeout)
            .finish()
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, Error> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{} is not a number: {}", TIMEOUT_VAR, raw))?;
    if secs == 0 {
        bail!("{} must be positive", TIMEOUT_VAR);
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("30").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_timeout(" 5 ").unwrap(), Duration::from_secs(5));
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("-1").is_err());
        assert!(parse_timeout("soon").is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let env = Env::new("sec-test-123".to_owned(), None);
        let printed = format!("{:?}", env);
        assert!(!printed.contains("sec-test-123"));
        assert_eq!(env.secret_key(), "sec-test-123");
    }
}
