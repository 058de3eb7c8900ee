pub mod index_info;

pub use index_info::IndexInfo;
