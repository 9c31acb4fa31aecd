/// Initialize the logger
///
/// # Arguments
/// * `debug` - Enable debug output (`-d`); warnings only otherwise
pub fn setup_logger(debug: bool) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter_for(debug)))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

fn filter_for(debug: bool) -> &'static str {
    if debug { "apk_file=debug" } else { "apk_file=warn" }
}
