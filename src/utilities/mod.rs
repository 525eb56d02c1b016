pub mod create_placeholder;
pub mod generate_filename;
pub mod rate_limit_delay;
pub mod replace_url_in_file;
pub mod save_download_log;
