// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command-line application state.
//!
//! This module parses the command line, builds the project store and
//! renders the dashboard, project list, timeline and preview views as text.

use anyhow::{bail, Context, Result};
use ctastudio::catalog::{filter_projects, sort_projects, DashboardStats, SortBy};
use ctastudio::config::Config;
use ctastudio::io::{export_path, import_path, Snapshot};
use ctastudio::models::{Project, ProjectId};
use ctastudio::seed::sample_projects;
use ctastudio::timeline::{active_ctas, cta_span, format_time, Playhead};
use ctastudio::ProjectStore;
use std::io::Write;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: ctastudio [OPTIONS]

Options:
  --config FILE     Settings file (YAML)
  --load FILE       Import projects from a JSON/YAML snapshot
  --save FILE       Export all projects to a JSON/YAML snapshot
  --search TERM     Filter the project list by name or description
  --sort ORDER      Order the project list: name, created, updated
  --project ID      Open a project's timeline
  --at SECONDS      Show the CTAs visible at a playback time
  --play            Simulate playback and print CTAs as they appear
  --duration SECS   Video length for the timeline (default: last CTA end)
  -h, --help        Print this help";

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub config: Option<PathBuf>,
    pub load: Option<PathBuf>,
    pub save: Option<PathBuf>,
    pub search: Option<String>,
    pub sort: Option<SortBy>,
    pub project: Option<ProjectId>,
    pub at: Option<f64>,
    pub play: bool,
    pub duration: Option<f64>,
    pub help: bool,
}

impl Options {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .with_context(|| format!("{} requires a value", name))
            };
            match arg.as_str() {
                "--config" => options.config = Some(value("--config")?.into()),
                "--load" => options.load = Some(value("--load")?.into()),
                "--save" => options.save = Some(value("--save")?.into()),
                "--search" => options.search = Some(value("--search")?),
                "--sort" => options.sort = Some(value("--sort")?.parse()?),
                "--project" => options.project = Some(ProjectId::from(value("--project")?)),
                "--at" => options.at = Some(parse_seconds("--at", &value("--at")?)?),
                "--duration" => {
                    options.duration = Some(parse_seconds("--duration", &value("--duration")?)?)
                }
                "--play" => options.play = true,
                "-h" | "--help" => options.help = true,
                other => bail!("unknown argument: {}", other),
            }
        }

        Ok(options)
    }
}

fn parse_seconds(name: &str, raw: &str) -> Result<f64> {
    let seconds: f64 = raw
        .parse()
        .with_context(|| format!("{} expects a number of seconds, got {:?}", name, raw))?;
    if !seconds.is_finite() || seconds < 0.0 {
        bail!("{} must be a non-negative number of seconds, got {}", name, raw);
    }
    Ok(seconds)
}

/// Main application state.
pub struct App {
    config: Config,
    options: Options,
    store: ProjectStore,
}

impl App {
    /// Build the store from config and options.
    pub fn new(options: Options) -> Result<Self> {
        let config = match &options.config {
            Some(path) => Config::from_yaml_file(path)?,
            None => Config::default(),
        };

        let mut store = ProjectStore::new();
        if config.seed_samples {
            store.import_projects(sample_projects());
        }
        if let Some(path) = &options.load {
            let snapshot = import_path(path)?;
            store.import_projects(snapshot.projects);
        }

        Ok(Self::with_store(config, options, store))
    }

    pub fn with_store(config: Config, options: Options, store: ProjectStore) -> Self {
        Self {
            config,
            options,
            store,
        }
    }

    /// Render the requested view to `out`.
    pub fn run(&mut self, out: &mut impl Write) -> Result<()> {
        if self.options.help {
            writeln!(out, "{}", USAGE)?;
            return Ok(());
        }

        match self.options.project.clone() {
            Some(project_id) => self.show_project(&project_id, out)?,
            None => self.show_overview(out)?,
        }

        if let Some(path) = &self.options.save {
            let snapshot = Snapshot {
                projects: self.store.projects().to_vec(),
            };
            export_path(&snapshot, path)?;
            writeln!(out, "Saved {} projects to {}", snapshot.projects.len(), path.display())?;
        }

        Ok(())
    }

    fn show_overview(&self, out: &mut impl Write) -> Result<()> {
        let projects = self.store.projects();
        let stats = DashboardStats::compute(projects, self.config.recent_limit);

        writeln!(out, "Projects: {}", stats.total_projects)?;
        writeln!(out, "CTAs: {}", stats.total_ctas)?;
        for (cta_type, count) in &stats.cta_types {
            writeln!(out, "  {}: {}", cta_type.as_str(), count)?;
        }
        writeln!(out)?;

        writeln!(out, "Recently updated:")?;
        for project in &stats.recent_projects {
            writeln!(out, "  {}  {}", project.updated.format("%b %-d, %Y"), project.name)?;
        }
        writeln!(out)?;

        let term = self.options.search.as_deref().unwrap_or("");
        let mut list = filter_projects(projects, term);
        sort_projects(&mut list, self.options.sort.unwrap_or(self.config.sort_by));

        if list.is_empty() {
            writeln!(out, "No projects found")?;
            return Ok(());
        }
        for project in list {
            let count = project.ctas.len();
            writeln!(
                out,
                "{:<38} {} ({} CTA{})",
                project.id.as_str(),
                project.name,
                count,
                if count == 1 { "" } else { "s" }
            )?;
        }
        Ok(())
    }

    fn show_project(&mut self, project_id: &ProjectId, out: &mut impl Write) -> Result<()> {
        if !self.store.set_current_project(project_id) {
            bail!("project not found: {}", project_id);
        }
        let Some(project) = self.store.current_project() else {
            bail!("project not found: {}", project_id);
        };

        let duration = self
            .options
            .duration
            .unwrap_or_else(|| project.last_cta_end());

        writeln!(out, "{}", project.name)?;
        writeln!(out, "{}", project.video_url)?;
        writeln!(out, "Duration: {}", format_time(duration))?;
        writeln!(out)?;
        render_timeline(project, duration, out)?;

        if let Some(at) = self.options.at {
            writeln!(out)?;
            writeln!(out, "Visible at {}:", format_time(at))?;
            let visible = active_ctas(&project.ctas, at);
            if visible.is_empty() {
                writeln!(out, "  (none)")?;
            }
            for cta in visible {
                writeln!(
                    out,
                    "  [{}] {} at ({:.0}%, {:.0}%) -> {}",
                    cta.cta_type.as_str(),
                    cta.text,
                    cta.position.x,
                    cta.position.y,
                    cta.link
                )?;
            }
        }

        if self.options.play {
            writeln!(out)?;
            play(project, duration, self.config.tick_interval(), out)?;
        }

        Ok(())
    }
}

const TRACK_WIDTH: usize = 40;

fn render_timeline(project: &Project, duration: f64, out: &mut impl Write) -> Result<()> {
    if project.ctas.is_empty() {
        writeln!(out, "No CTAs yet")?;
        return Ok(());
    }
    for cta in &project.ctas {
        let span = cta_span(cta, duration);
        let start = ((span.left / 100.0) * TRACK_WIDTH as f64).round() as usize;
        let end = ((span.right() / 100.0) * TRACK_WIDTH as f64).round() as usize;
        let start = start.min(TRACK_WIDTH);
        let end = end.clamp(start, TRACK_WIDTH);

        let track: String = (0..TRACK_WIDTH)
            .map(|i| if i >= start && i < end { '#' } else { '.' })
            .collect();
        writeln!(
            out,
            "|{}| {}-{} {}",
            track,
            format_time(cta.start_time),
            format_time(cta.end_time),
            cta.text
        )?;
    }
    Ok(())
}

/// Longest simulated playback, in ticks (about 2.7 hours at 10 Hz).
const MAX_PLAY_TICKS: u64 = 100_000;

/// Step a playhead from 0 to `duration`, printing CTAs as they enter and exit.
fn play(project: &Project, duration: f64, interval: f64, out: &mut impl Write) -> Result<()> {
    let steps = (duration / interval).floor();
    if !(0.0..=MAX_PLAY_TICKS as f64).contains(&steps) {
        bail!(
            "cannot play {}: {} exceeds the {} tick playback limit",
            project.id,
            format_time(duration),
            MAX_PLAY_TICKS
        );
    }
    let ticks = steps as u64;
    let mut playhead = Playhead::new();

    for tick in 0..=ticks {
        let time = tick as f64 * interval;
        let transition = playhead.tick(time, &project.ctas);
        for id in &transition.entered {
            if let Some(cta) = project.cta(id) {
                writeln!(out, "{} + {}", format_time(time), cta.text)?;
            }
        }
        for id in &transition.exited {
            if let Some(cta) = project.cta(id) {
                writeln!(out, "{} - {}", format_time(time), cta.text)?;
            }
        }
    }
    log::debug!("Played {} ticks of {}", ticks + 1, project.id);
    Ok(())
}
