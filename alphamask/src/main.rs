use alpha_remap::{AlphaRemapConfig, io};
use anyhow::{Context, Result};

const INPUT_PATH: &str = "prototype_512x512_clear.png";
const OUTPUT_PATH: &str = "prototype_512x512_clear2.png";

fn main() -> Result<()> {
    init_logger();

    let config = AlphaRemapConfig::default();
    log::info!(
        "mask white with the {} channel of {INPUT_PATH}",
        config.source().name()
    );

    io::remap_file(INPUT_PATH, OUTPUT_PATH, &config)
        .with_context(|| format!("remap {INPUT_PATH} into {OUTPUT_PATH} failed"))?;

    Ok(())
}

/// Sets up a custom logger format with timestamp, log level, file name, line number,
/// and log message. Defaults to `info` unless `RUST_LOG` says otherwise.
fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
