use serde::{Deserialize, Serialize};

use business::domain::cart::model::CartLine;
use business::domain::errors::RepositoryError;

use crate::catalog::entity::ProductEntity;

/// Cart or saved line: the product record with a `quantity` field added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineEntity {
    #[serde(flatten)]
    pub product: ProductEntity,
    pub quantity: u32,
}

impl CartLineEntity {
    pub fn from_domain(line: &CartLine) -> Self {
        Self {
            product: ProductEntity::from_domain(&line.product),
            quantity: line.quantity,
        }
    }

    pub fn into_domain(self) -> Result<CartLine, RepositoryError> {
        Ok(CartLine::from_repository(
            self.product.into_domain()?,
            self.quantity,
        ))
    }
}

pub fn lines_into_domain(
    entities: Vec<CartLineEntity>,
) -> Result<Vec<CartLine>, RepositoryError> {
    entities
        .into_iter()
        .map(CartLineEntity::into_domain)
        .collect()
}
