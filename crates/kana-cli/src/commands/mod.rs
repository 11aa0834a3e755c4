pub mod config_ops;
pub mod explain_ops;
pub mod romaji_ops;
