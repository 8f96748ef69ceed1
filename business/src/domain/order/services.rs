use super::value_objects::OrderId;

/// Service port producing identifiers for new orders.
///
/// Implementations are not required to be collision free; placing an order
/// checks the history and asks again on a clash.
pub trait OrderIdGenerator: Send + Sync {
    fn generate(&self) -> OrderId;
}
