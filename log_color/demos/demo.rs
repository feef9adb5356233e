// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prints a few styled log lines to stdout.
//!
//! ```text
//! cargo run --example demo -- 256
//! RUST_LOG=trace cargo run --example demo -- none
//! ```
//!
//! The optional argument is the color level: `none`, `basic` (`16`), `hundreds`
//! (`256`) or `millions` (`truecolor`, the default).

use r3bl_log_color::{BasicCode, BasicColorIdentity, Channel, Color, ColorLevel,
                     ColorOptions, ConsoleConfig, ConsoleSink, LogTextCtx, RgbValue,
                     fg_dark_gray, fg_light_cyan, fg_light_red, fg_yellow, log_texts,
                     rainbow_string};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn level_tag(name: &str, color: Color) -> LogTextCtx {
    LogTextCtx::new().then(log_texts![
        fg_dark_gray("["),
        LogTextCtx::colored(name, color.with_options(ColorOptions::BOLD)),
        fg_dark_gray("] "),
    ])
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let level = match std::env::args().nth(1) {
        Some(arg) => ColorLevel::from_str(&arg)
            .map_err(|err| miette::miette!("Invalid color level {arg:?}: {err}"))?,
        None => ColorLevel::default(),
    };
    let sink = ConsoleSink::stdout(ConsoleConfig::new(level));
    sink.set_title("r3bl_log_color demo")?;

    sink.println(
        &level_tag("INFO", Color::rgb(80, 200, 120, Channel::Foreground)).then(log_texts![
            "listening on ",
            fg_light_cyan("127.0.0.1:8080"),
        ]),
    )?;

    sink.println(
        &level_tag("WARN", Color::hundred(214, Channel::Foreground)).then(log_texts![
            "disk usage at ",
            fg_yellow("91%"),
        ]),
    )?;

    let alert = Color::new(
        BasicColorIdentity::from(BasicCode::BG_RED)
            .with(Channel::Foreground, BasicCode::FG_LIGHT_WHITE),
        ColorOptions::UNDERLINE,
    );
    sink.println(&level_tag("ERROR", Color::basic(BasicCode::FG_RED)).then(log_texts![
        fg_light_red("connection reset: "),
        LogTextCtx::colored("retrying", alert),
    ]))?;

    sink.println(&rainbow_string(
        "r3bl_log_color renders 16, 256 and truecolor styles",
        RgbValue::from_u8(255, 0, 128),
        RgbValue::from_u8(0, 160, 255),
        Channel::Foreground,
    ))?;

    sink.flush()?;
    Ok(())
}
