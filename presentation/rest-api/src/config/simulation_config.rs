use std::env;
use std::time::Duration;

use system::order_id::OrderIdScheme;

const DEFAULT_LATENCY_MS: u64 = 1000;

/// Knobs for the simulated back-end behaviour
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Pause before recommendations are served
    pub latency: Duration,
    pub order_id_scheme: OrderIdScheme,
}

impl SimulationConfig {
    /// Environment variables:
    /// - SIMULATED_LATENCY_MS: Milliseconds (default: 1000, 0 disables)
    /// - ORDER_ID_SCHEME: "token" or "time-ordered" (default: "token")
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("SIMULATED_LATENCY_MS").ok().as_deref(),
            env::var("ORDER_ID_SCHEME").ok().as_deref(),
        )
    }

    fn from_values(latency_ms: Option<&str>, scheme: Option<&str>) -> Self {
        let latency_ms = latency_ms
            .and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(ms) => Some(ms),
                Err(_) => {
                    tracing::warn!("SIMULATED_LATENCY_MS is not a number, using default");
                    None
                }
            })
            .unwrap_or(DEFAULT_LATENCY_MS);

        let order_id_scheme = scheme
            .and_then(|raw| match raw.parse::<OrderIdScheme>() {
                Ok(scheme) => Some(scheme),
                Err(e) => {
                    tracing::warn!("{}, using token ids", e);
                    None
                }
            })
            .unwrap_or(OrderIdScheme::Token);

        Self {
            latency: Duration::from_millis(latency_ms),
            order_id_scheme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_unset() {
        let config = SimulationConfig::from_values(None, None);

        assert_eq!(config.latency, Duration::from_millis(1000));
        assert_eq!(config.order_id_scheme, OrderIdScheme::Token);
    }

    #[test]
    fn should_read_explicit_values() {
        let config = SimulationConfig::from_values(Some("0"), Some("time-ordered"));

        assert_eq!(config.latency, Duration::ZERO);
        assert_eq!(config.order_id_scheme, OrderIdScheme::TimeOrdered);
    }

    #[test]
    fn should_ignore_garbage() {
        let config = SimulationConfig::from_values(Some("soon"), Some("sequential"));

        assert_eq!(config.latency, Duration::from_millis(1000));
        assert_eq!(config.order_id_scheme, OrderIdScheme::Token);
    }
}
