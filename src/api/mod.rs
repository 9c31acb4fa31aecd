mod client;
mod query;


pub use client::{ALPINE_CONTENTS_SEARCH_URI, ContentsClient};
pub use query::{ContentsQuery, file_and_dir_patterns};
