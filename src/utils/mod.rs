pub mod paths;

pub use paths::zip_entry_name;
