mod file_finder;

pub use file_finder::{is_test_file, FileFinder, FileStats, SourceFile};
