//! Token subcommands

use std::io;

use clap::{Args, Subcommand};
use jiff::Timestamp;
use pizzeria::session::{AccessToken, RefreshAction, next_action};

use crate::commands::CliError;

/// Token subcommands.
#[derive(Debug, Args)]
pub struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    /// Show a token's expiry and when it would be refreshed.
    Inspect {
        /// Encoded access token
        token: String,

        /// Whether a refresh token is also held
        #[arg(long)]
        has_refresh_token: bool,
    },
}

pub(super) fn run(command: &TokenCommand, out: &mut impl io::Write) -> Result<(), CliError> {
    match &command.command {
        TokenSubcommand::Inspect {
            token,
            has_refresh_token,
        } => {
            let token = AccessToken::parse(token)?;

            if let Some(subject) = token.subject() {
                writeln!(out, "subject:    {subject}")?;
            }

            match token.expires_at() {
                Some(expires_at) => writeln!(out, "expires at: {expires_at}")?,
                None => writeln!(out, "expires at: never")?,
            }

            match next_action(Some(&token), *has_refresh_token, Timestamp::now()) {
                RefreshAction::RefreshAfter(delay) => {
                    writeln!(out, "refresh in: {}s", delay.as_secs())?;
                }
                RefreshAction::RefreshNow => writeln!(out, "refresh in: now")?,
                RefreshAction::Poll(interval) => {
                    writeln!(out, "poll every: {}s", interval.as_secs())?;
                }
                RefreshAction::Idle => writeln!(out, "refresh in: not scheduled")?,
            }
        }
    }

    Ok(())
}
