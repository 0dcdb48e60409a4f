use anyhow::{Context as _, Result};
use gpui::*;
use std::borrow::Cow;
use termfolio::{Config, ProjectRegistry, TerminalSession, logging};

mod ui;

fn main() -> Result<()> {
    let loaded = Config::load();
    let filter = match &loaded {
        Ok(config) => config.log_filter.clone(),
        Err(_) => Config::default().log_filter,
    };
    logging::init(&filter)?;
    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!("{err}; falling back to default config");
        Config::default()
    });

    let registry = match &config.registry_path {
        Some(path) => ProjectRegistry::from_path(path)
            .with_context(|| format!("loading portfolio from {}", path.display()))?,
        None => ProjectRegistry::builtin().context("loading built-in portfolio")?,
    };
    let session = TerminalSession::new(config, registry);

    Application::new().run(move |cx: &mut App| {
        cx.text_system()
            .add_fonts(vec![Cow::Borrowed(lucide_icons::LUCIDE_FONT_BYTES)])
            .ok();
        let mut options = WindowOptions::default();
        // Client-decorated window; the TopBar acts as the title bar.
        options.titlebar = Some(TitlebarOptions {
            title: Some("termfolio".into()),
            appears_transparent: true,
            ..Default::default()
        });
        options.window_decorations = Some(WindowDecorations::Client);

        if let Err(err) = cx.open_window(options, |_, cx| {
            cx.new(|cx| ui::Workspace::new(session, cx))
        }) {
            tracing::error!("failed to open window: {err}");
            cx.quit();
        }
    });
    Ok(())
}
