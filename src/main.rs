// SPDX-License-Identifier: MPL-2.0
use bt_lens::app::{self, Flags};

const HELP: &str = "\
BtLens - Bluetooth internals inspector

USAGE:
  bt_lens [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --snapshot <FILE>      Adapter snapshot to inspect instead of the demo
  -h, --help             Print this help
";

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        config_dir: opt_value(&mut args, "--config-dir"),
        snapshot: opt_value(&mut args, "--snapshot"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("invalid {key}: {err}");
            None
        }
    }
}
