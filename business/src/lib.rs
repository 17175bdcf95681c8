pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod quote {
        pub mod add_product;
        pub mod get_selection;
        pub mod remove_product;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod product {
        pub mod errors;
        pub mod facets;
        pub mod filter;
        pub mod model;
        pub mod query;
        pub mod repository;
        pub mod value_objects;
        pub mod write_policy;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod quote {
        pub mod errors;
        pub mod model;
        pub mod storage;
        pub mod use_cases {
            pub mod add_product;
            pub mod get_selection;
            pub mod remove_product;
        }
    }
}
