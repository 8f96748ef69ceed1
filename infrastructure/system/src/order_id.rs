use business::domain::order::services::OrderIdGenerator;
use business::domain::order::value_objects::OrderId;
use rand::Rng;
use uuid::Uuid;

const TOKEN_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const TOKEN_LENGTH: usize = 9;

/// Which identifier scheme new orders get.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderIdScheme {
    Token,
    TimeOrdered,
}

impl std::str::FromStr for OrderIdScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "token" => Ok(OrderIdScheme::Token),
            "time-ordered" | "uuid" => Ok(OrderIdScheme::TimeOrdered),
            _ => Err(format!("Invalid order id scheme: {}", s)),
        }
    }
}

/// Short uppercase base-36 token, e.g. `K3J9QZ0PL`.
pub struct RandomTokenIdGenerator;

impl OrderIdGenerator for RandomTokenIdGenerator {
    fn generate(&self) -> OrderId {
        let mut rng = rand::rng();
        let token: String = (0..TOKEN_LENGTH)
            .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
            .collect();
        OrderId::new(token)
    }
}

/// UUIDv7, so ids sort by creation time.
pub struct TimeOrderedIdGenerator;

impl OrderIdGenerator for TimeOrderedIdGenerator {
    fn generate(&self) -> OrderId {
        OrderId::new(Uuid::now_v7().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_uppercase_base36_tokens() {
        for _ in 0..100 {
            let id = RandomTokenIdGenerator.generate();
            assert_eq!(id.as_str().len(), TOKEN_LENGTH);
            assert!(
                id.as_str()
                    .chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
            );
        }
    }

    #[test]
    fn should_generate_parseable_v7_ids() {
        let id = TimeOrderedIdGenerator.generate();

        let parsed = Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn should_parse_scheme_names() {
        assert_eq!(
            "time-ordered".parse::<OrderIdScheme>().unwrap(),
            OrderIdScheme::TimeOrdered
        );
        assert_eq!("TOKEN".parse::<OrderIdScheme>().unwrap(), OrderIdScheme::Token);
        assert!("random".parse::<OrderIdScheme>().is_err());
    }
}
