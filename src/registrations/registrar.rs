use std::time::Duration;

use axum::async_trait;

use crate::app::models::api_error::ApiError;

use super::dtos::register_user_dto::RegisterUserDto;

/// The work done with a registration once it has passed validation.
#[async_trait]
pub trait Registrar: Send + Sync {
    async fn register(&self, dto: &RegisterUserDto) -> Result<(), ApiError>;
}

/// Stands in for a real backend: logs the submission and waits.
/// Nothing is stored and the password only appears masked.
#[derive(Debug, Clone)]
pub struct SimulatedRegistrar {
    delay: Duration,
}

impl SimulatedRegistrar {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Registrar for SimulatedRegistrar {
    async fn register(&self, dto: &RegisterUserDto) -> Result<(), ApiError> {
        tracing::info!(
            username = %dto.username,
            email = %dto.email,
            country = %dto.country,
            experience = %dto.experience,
            user_message = %dto.message,
            password = %dto.masked_password(),
            terms = dto.terms,
            "processing user registration"
        );

        tokio::time::sleep(self.delay).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_delay() {
        let registrar = SimulatedRegistrar::new(Duration::from_secs(1));
        let start = Instant::now();

        registrar
            .register(&RegisterUserDto::default())
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
