// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of request bodies for stdout.

use serde::Serialize;
use sieve_core::{Action, Request};

use crate::error::Result;

/// How a request is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Indent the JSON.
    pub pretty: bool,
    /// Print only the body, without the action wrapper.
    pub body_only: bool,
}

/// A request body tagged with the action it belongs to.
#[derive(Serialize)]
struct Envelope<'a, R> {
    action: Action,
    payload: &'a R,
}

/// Renders a request as JSON text.
pub fn render<R: Request>(request: &R, options: OutputOptions) -> Result<String> {
    let json = if options.body_only {
        if options.pretty {
            request.to_json_pretty()?
        } else {
            request.to_json()?
        }
    } else {
        let envelope = Envelope {
            action: request.action(),
            payload: request,
        };
        if options.pretty {
            serde_json::to_string_pretty(&envelope)?
        } else {
            serde_json::to_string(&envelope)?
        }
    };
    tracing::debug!("rendered {} request ({} bytes)", request.action(), json.len());
    Ok(json)
}

/// Renders and prints a request.
pub fn print<R: Request>(request: &R, options: OutputOptions) -> Result<()> {
    println!("{}", render(request, options)?);
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
