pub mod code_generator;
pub mod url_check;
