pub mod binary_search_tree;
pub mod config;
pub mod data_gen;
pub mod errors;
pub mod traversal;
pub mod utils;

pub use binary_search_tree::{BinarySearchTree, Node};
pub use config::{DriverConfig, ValueDistribution};
pub use errors::{ConfigError, GenError};
pub use traversal::Order;
