//! Headless console runner (default binary).
//!
//! Reads one JSON command per line from stdin and writes one JSON response per
//! line to stdout. Clock ticks of a running timed game are interleaved as
//! `tick` responses. Logs go to stderr (`RUST_LOG`, default `info`).

use std::io::Write;

use anyhow::{Context, Result};
use env_logger::Env;
use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use cross_clear::core::{GameSession, SimpleRng};
use cross_clear::driver::{
    encode_response, parse_command, CodecError, Command, Driver, DriverConfig, Response,
};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = DriverConfig::from_env();
    let session = GameSession::new(config.game.clone(), SimpleRng::new(config.seed))
        .context("invalid game configuration")?;
    info!(
        "[Console] seed {} tick {}ms",
        config.seed,
        config.tick_period.as_millis()
    );

    let (mut driver, mut ticks) = Driver::new(session, config.tick_period);

    let first = driver.handle(Command::Reset {
        mode: config.mode,
        shape: config.shape,
    });
    emit(&first)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };

                let response = match parse_command(&line) {
                    Ok(command) => driver.handle(command),
                    Err(CodecError::Empty) => continue,
                    Err(err) => {
                        warn!("[Console] {}", err);
                        err.to_response()
                    }
                };

                emit(&response)?;
                if response == Response::Bye {
                    break;
                }
            }
            Some(event) = ticks.recv() => {
                if let Some(response) = driver.on_clock(event) {
                    emit(&response)?;
                }
            }
        }
    }

    driver.shutdown();
    info!("[Console] bye");
    Ok(())
}

fn emit(response: &Response) -> Result<()> {
    let line = encode_response(response)?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}
