use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::model::AppConfig;
use crate::session::Session;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// App over an empty temp data dir, already hydrated. Keep the `TempDir`
/// alive for as long as the app is used.
pub fn hydrated_app() -> (TempDir, App) {
    app_with_config(AppConfig::default())
}

/// Hydrated app whose config opens `topic` on launch
pub fn app_with_default_topic(topic: &str) -> (TempDir, App) {
    let mut config = AppConfig::default();
    config.ui.default_topic = Some(topic.to_string());
    app_with_config(config)
}

fn app_with_config(config: AppConfig) -> (TempDir, App) {
    let tmp = TempDir::new().unwrap();
    let session = Session::with_config(tmp.path().to_path_buf(), config);
    let mut app = App::new(session);
    app.hydrate();
    (tmp, app)
}
