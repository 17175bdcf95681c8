pub mod product {
    pub mod repository;
    pub mod seed;
}
pub mod key_value {
    pub mod file;
    pub mod memory;
}
