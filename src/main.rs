// SPDX-License-Identifier: MPL-2.0
use iced_reveal::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        reduce_motion: args.contains("--reduce-motion"),
    };

    app::run(flags)
}
