use serde::Deserialize;

pub static DEFAULT_PORT: u16 = 3000;
pub static DEFAULT_PROCESSING_DELAY_MS: u64 = 1000;
pub static DEFAULT_RATE_LIMIT_PER_SEC: u64 = 5;
pub static DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub frontend_url: Option<String>,
    pub port: Option<u16>,

    pub processing_delay_ms: Option<u64>,
    pub strict_choices: Option<bool>,

    pub rate_limit_per_sec: Option<u64>,
    pub body_limit_bytes: Option<usize>,
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn processing_delay_ms(&self) -> u64 {
        self.processing_delay_ms
            .unwrap_or(DEFAULT_PROCESSING_DELAY_MS)
    }

    pub fn strict_choices(&self) -> bool {
        self.strict_choices.unwrap_or(false)
    }

    pub fn rate_limit_per_sec(&self) -> u64 {
        self.rate_limit_per_sec
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_RATE_LIMIT_PER_SEC)
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_bytes.unwrap_or(DEFAULT_BODY_LIMIT_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let envy = Envy::default();

        assert_eq!(envy.port(), 3000);
        assert_eq!(envy.processing_delay_ms(), 1000);
        assert!(!envy.strict_choices());
        assert_eq!(envy.rate_limit_per_sec(), 5);
        assert_eq!(envy.body_limit_bytes(), 65536);
    }

    #[test]
    fn test_from_iter() {
        let vars = vec![
            // read before the .env file is loaded, not part of Envy
            ("APP_ENV".to_string(), "production".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("PROCESSING_DELAY_MS".to_string(), "0".to_string()),
            ("STRICT_CHOICES".to_string(), "true".to_string()),
            ("RATE_LIMIT_PER_SEC".to_string(), "0".to_string()),
        ];
        let envy = envy::from_iter::<_, Envy>(vars).unwrap();

        assert_eq!(envy.port(), 8080);
        assert_eq!(envy.processing_delay_ms(), 0);
        assert!(envy.strict_choices());
        // zero would stall every request
        assert_eq!(envy.rate_limit_per_sec(), 5);
    }
}
