pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod errors;
    pub mod repository;
}
pub mod books;
pub mod catalog;
pub mod server;
pub mod strings;
pub mod utils {
    pub mod logs;
}
