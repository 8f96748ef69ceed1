use serde::{Deserialize, Serialize};

/// Product category. The set is fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Books,
    Sports,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Clothing,
        Category::Home,
        Category::Books,
        Category::Sports,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Electronics => write!(f, "Electronics"),
            Category::Clothing => write!(f, "Clothing"),
            Category::Home => write!(f, "Home"),
            Category::Books => write!(f, "Books"),
            Category::Sports => write!(f, "Sports"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Electronics" => Ok(Category::Electronics),
            "Clothing" => Ok(Category::Clothing),
            "Home" => Ok(Category::Home),
            "Books" => Ok(Category::Books),
            "Sports" => Ok(Category::Sports),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

/// Merchandising flags shown on product cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductBadges {
    pub is_new: bool,
    pub is_best_seller: bool,
    pub on_sale: bool,
}
