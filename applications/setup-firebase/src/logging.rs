// Console output of the tool. Messages are meant for humans, so they are printed
// without timestamps, levels or targets.
pub(crate) fn init_logger() {
    // parse_default_env will read the RUST_LOG environment variable and apply it on top
    // of the default filter.
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .format_level(false)
        .format_target(false)
        .format_indent(Some(0))
        .init();
}
