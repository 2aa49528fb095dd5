pub mod image_file_path;
pub mod path_error;
