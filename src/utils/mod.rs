mod fs;
mod hash;

pub use fs::list_files;
pub use hash::compute_file_hash;
