pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod move_to_cart;
        pub mod move_to_saved;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod catalog {
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_featured;
        pub mod recommend;
    }
    pub mod notification {
        pub mod clear;
        pub mod delete;
        pub mod get_all;
        pub mod inbox_notifier;
        pub mod mark_all_read;
        pub mod mark_read;
    }
    pub mod order {
        pub mod advance_checkout;
        pub mod get_all;
        pub mod get_by_id;
        pub mod place;
    }
    pub mod shared {
        pub mod persisted_state;
    }
    pub mod wishlist {
        pub mod add;
        pub mod clear;
        pub mod contains;
        pub mod get;
        pub mod remove;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod move_to_cart;
            pub mod move_to_saved;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_featured;
            pub mod recommend;
        }
    }
    pub mod notification {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod clear;
            pub mod delete;
            pub mod get_all;
            pub mod mark_all_read;
            pub mod mark_read;
        }
    }
    pub mod order {
        pub mod checkout;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod shipping;
        pub mod value_objects;
        pub mod use_cases {
            pub mod advance_checkout;
            pub mod get_all;
            pub mod get_by_id;
            pub mod place;
        }
    }
    pub mod shared {
        pub mod repository;
        pub mod services;
        pub mod value_objects;
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod add;
            pub mod clear;
            pub mod contains;
            pub mod get;
            pub mod remove;
        }
    }
}

#[cfg(test)]
pub mod test_support;
