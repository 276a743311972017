mod static_files;

pub use static_files::create_static_files_handler;
