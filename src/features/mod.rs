pub mod ads;
pub mod categories;
pub mod occasions;
pub mod pages;
pub mod products;
