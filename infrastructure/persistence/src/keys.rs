/// Keys under which the storefront keeps its documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Cart,
    SavedItems,
    Wishlist,
    Orders,
    Notifications,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Cart => "cart",
            StorageKey::SavedItems => "savedItems",
            StorageKey::Wishlist => "wishlist",
            StorageKey::Orders => "orders",
            StorageKey::Notifications => "notifications",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
