pub mod block;
pub mod schema_file;

pub use block::{Block, BlockKind};
pub use schema_file::SchemaFile;
