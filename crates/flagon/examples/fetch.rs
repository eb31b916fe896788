//! A small fetch-like command line built on flagon.
//!
//! ```text
//! cargo run --example fetch -- -u http://example.com --timeout 5 out.bin
//! ```

use flagon::App;
use flagon_args::{Flag, Flags, Kind};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    init_tracing();

    let flags = Flags::from(vec![
        Flag {
            short: Some('u'),
            long: Some("url".to_owned()),
            kind: Kind::String,
            required: true,
            help: "URL to download".to_owned(),
            ..Flag::default()
        },
        Flag {
            short: Some('t'),
            long: Some("timeout".to_owned()),
            kind: Kind::Int,
            help: "request timeout in seconds".to_owned(),
            ..Flag::default()
        },
        Flag {
            short: Some('d'),
            long: Some("debug".to_owned()),
            help: "enable debug output".to_owned(),
            ..Flag::default()
        },
    ]);

    let mut app = App::new("fetch")
        .set_usage("fetch -u <STRING> [-t <INT>] [-d] [files...]")
        .set_description("download a resource")
        .set_version(semver::Version::new(0, 1, 0))
        .set_flags(flags);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let files = app.run_or_exit(&args);

    println!("url: {}", app.flags().get_str("url"));
    if app.flags().get_int("timeout") != 0 {
        println!("timeout: {}s", app.flags().get_int("timeout"));
    }
    if app.flags().get_bool("debug") {
        println!("debug output enabled");
    }
    if !files.is_empty() {
        println!("files: {}", files.join(", "));
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).compact().init();
}
