pub mod command {
    pub mod count_cmd;
    pub mod uppercase_cmd;
}
pub mod controller;
pub mod domain;
pub mod factory;
