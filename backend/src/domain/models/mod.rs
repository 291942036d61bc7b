pub mod article;
pub mod statement;
