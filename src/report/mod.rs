pub mod rankings;

pub use rankings::{print_largest_indexes, print_least_balanced, print_most_shards};
