pub mod file_record;
pub mod platform;
pub mod repository;

pub use file_record::FileRecord;
pub use platform::Architecture;
pub use repository::Repository;
