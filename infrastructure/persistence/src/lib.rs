pub mod document;
pub mod keys;
pub mod store;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
pub mod notification {
    pub mod entity;
    pub mod repository;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
pub mod wishlist {
    pub mod repository;
}
