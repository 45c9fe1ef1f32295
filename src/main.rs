// SPDX-License-Identifier: MPL-2.0
use plate_lens::app::{self, paths, Flags};
use plate_lens::logging;

const HELP: &str = "\
PlateLens - calorie and macro estimate from a photo of your dish

USAGE:
  plate_lens [OPTIONS] [IMAGE]

OPTIONS:
  --lang <ID>          UI language (e.g. en-US, ru)
  --config-dir <PATH>  Directory holding settings.toml
  --delay-ms <N>       Analysis duration in milliseconds
  -h, --help           Print this help

ENVIRONMENT:
  PLATE_LENS_CONFIG_DIR  Config directory when --config-dir is not given
  RUST_LOG               Log filter (default: info)
";

fn parse_args() -> Result<(Flags, Option<String>), pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let delay_ms = args.opt_value_from_str("--delay-ms")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok((
        Flags {
            lang,
            file_path,
            delay_ms,
        },
        config_dir,
    ))
}

fn main() -> iced::Result {
    let (flags, config_dir) = match parse_args() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    if let Err(err) = logging::init() {
        eprintln!("warning: {err}");
    }

    paths::init_cli_overrides(config_dir);
    app::run(flags)
}
