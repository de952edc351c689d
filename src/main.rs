//! A scrolling TUI chronicle of the Ottoman Empire.
//!
//! Run the binary to read interactively.  Run with `--outline` to print the
//! chapter list and exit.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::ui::{layout::AppLayout, nav::NavBar, page, theme::Theme};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Interactive chronicle of the Ottoman Empire")]
struct Cli {
    /// Section to open at (see `--outline` for ids).
    start: Option<String>,

    /// Print the section outline and exit.
    #[arg(long)]
    outline: bool,

    /// Disable scroll and entrance animations.
    #[arg(long = "no-anim")]
    no_anim: bool,
}

fn print_outline() {
    for section in core::content::SECTIONS {
        let title = if section.title.is_empty() {
            "(prose)"
        } else {
            section.title
        };
        match section.subtitle {
            Some(subtitle) => println!("{:18} {title} — {subtitle}", section.id),
            None => println!("{:18} {title}", section.id),
        }
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    if cli.outline {
        print_outline();
        return Ok(());
    }

    if let Some(ref id) = cli.start {
        if core::content::section(id).is_none() {
            anyhow::bail!("unknown section {id:?} — run with --outline for the list");
        }
    }

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    // ── initial state ─────────────────────────────────────────
    let size = terminal.size()?;
    let user_config = config::AppConfig::load();
    if let Err(err) = user_config.ensure_saved() {
        tracing::warn!(%err, "could not write default config");
    }
    let mut state = AppState::new(
        user_config,
        size.width,
        size.height.saturating_sub(2),
        cli.no_anim,
    );
    if let Some(ref id) = cli.start {
        if let Some(top) = state.layout.section_top(id) {
            let margin = state.config.tuning.header_margin_rows;
            state.scroll.jump_to(top.saturating_sub(margin) as f64);
        }
    }
    handler::sync_viewport(&mut state);

    let mut events = spawn_event_reader();

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());
            state.page_area = layout.page_area;

            let scrolled = state.scroll.offset() > state.config.tuning.nav_scrolled_threshold;
            let nav = NavBar::new(state.resolver.active(), scrolled);
            state.nav_hits = nav.render_and_hit(layout.nav_area, frame.buffer_mut());

            page::render_page(layout.page_area, frame.buffer_mut(), &mut state);

            let hint = state.config.status_bar_hint();
            let status_text = state.status_message.as_deref().unwrap_or(&hint);
            let status = Paragraph::new(status_text).style(Theme::status_bar_style());
            frame.render_widget(status, layout.status_area);
        })?;

        match events.recv().await {
            Some(AppEvent::Key(k)) => handler::handle_key(&mut state, k),
            Some(AppEvent::Mouse(m)) => handler::handle_mouse(&mut state, m),
            Some(AppEvent::Resize(w, h)) => {
                state.relayout(w, h.saturating_sub(2));
                handler::sync_viewport(&mut state);
            }
            Some(AppEvent::Tick) => handler::tick(&mut state),
            None => break,
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
