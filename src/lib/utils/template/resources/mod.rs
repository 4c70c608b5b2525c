pub const CONFIG_FILE: &str = include_str!("mmpgen.toml");
pub const MAIN: &str = include_str!("main.cpp");
pub const HEADER: &str = include_str!("app.h");
pub const RESOURCE: &str = include_str!("app.rss");
