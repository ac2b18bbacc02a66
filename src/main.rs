// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! CTA Studio - call-to-action overlays for video projects.
//!
//! A command-line front end for browsing projects, inspecting their CTA
//! timelines and previewing which overlays a viewer sees at a given time.

mod app;

use anyhow::Result;
use app::{App, Options};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let options = Options::parse(std::env::args().skip(1))?;
    let mut app = App::new(options)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app.run(&mut out)?;

    Ok(())
}
