//! User configuration — keybindings, tuning values, and persistence.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/chronik/config.toml` (default `~/.config/chronik/config.toml`).

use std::collections::HashMap;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    JumpTop,
    JumpBottom,
    PrevSlide,
    NextSlide,
    OpenChapter,
    PrevSection,
    NextSection,
    CycleAnalysis,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used when serialising the config).
    pub const ALL: &[Action] = &[
        Action::ScrollUp,
        Action::ScrollDown,
        Action::PageUp,
        Action::PageDown,
        Action::JumpTop,
        Action::JumpBottom,
        Action::PrevSlide,
        Action::NextSlide,
        Action::OpenChapter,
        Action::PrevSection,
        Action::NextSection,
        Action::CycleAnalysis,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::PageUp => "page_up",
            Action::PageDown => "page_down",
            Action::JumpTop => "jump_top",
            Action::JumpBottom => "jump_bottom",
            Action::PrevSlide => "prev_slide",
            Action::NextSlide => "next_slide",
            Action::OpenChapter => "open_chapter",
            Action::PrevSection => "prev_section",
            Action::NextSection => "next_section",
            Action::CycleAnalysis => "cycle_analysis",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        match s {
            "scroll_up" => Some(Action::ScrollUp),
            "scroll_down" => Some(Action::ScrollDown),
            "page_up" => Some(Action::PageUp),
            "page_down" => Some(Action::PageDown),
            "jump_top" => Some(Action::JumpTop),
            "jump_bottom" => Some(Action::JumpBottom),
            "prev_slide" => Some(Action::PrevSlide),
            "next_slide" => Some(Action::NextSlide),
            "open_chapter" => Some(Action::OpenChapter),
            "prev_section" => Some(Action::PrevSection),
            "next_section" => Some(Action::NextSection),
            "cycle_analysis" => Some(Action::CycleAnalysis),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared (platform-specific modifiers like SUPER are ignored).
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// User-friendly display string (e.g. `"Alt+↑"`, `"Ctrl+c"`, `"q"`).
    pub fn display(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PgUp".into(),
            KeyCode::PageDown => "PgDn".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Serialise to config-file format (e.g. `"Alt+Up"`, `"Ctrl+c"`, `"q"`).
    fn to_config_string(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Left => "Left".into(),
            KeyCode::Right => "Right".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PageUp".into(),
            KeyCode::PageDown => "PageDown".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Alt+Up"`, `"q"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') && s.len() > 1 => {
                let n: u8 = s[1..].parse().ok()?;
                KeyCode::F(n)
            }
            s if s.len() == 1 => KeyCode::Char(s.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── tuning ────────────

/// Presentation tuning values.  All have sensible defaults and are clamped
/// on load so a hand-edited config can't produce a broken animation.
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    /// Viewport fraction divisor for the activity probe point
    /// (probe = scroll + viewport / divisor).
    pub probe_divisor: f64,
    /// Maximum card tilt at the slot edge, degrees.
    pub tilt_max_deg: f64,
    /// Card scale while hovered.
    pub lift_scale: f64,
    /// Smooth-scroll damping per tick.
    pub scroll_speed: f64,
    /// Reveal-animation damping per tick.
    pub reveal_ease: f64,
    /// Carousel-transition damping per tick.
    pub carousel_ease: f64,
    /// Rows the viewport keeps above a jumped-to section header.
    pub header_margin_rows: usize,
    /// Rows one mouse-wheel notch scrolls.
    pub wheel_step_rows: f64,
    /// Scroll offset past which the nav bar takes its elevated chrome.
    pub nav_scrolled_threshold: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            probe_divisor: 3.0,
            tilt_max_deg: 8.0,
            lift_scale: 1.02,
            scroll_speed: 0.25,
            reveal_ease: 0.18,
            carousel_ease: 0.3,
            header_margin_rows: 2,
            wheel_step_rows: 3.0,
            nav_scrolled_threshold: 1.0,
        }
    }
}

impl Tuning {
    /// Config-file keys accepted by [`Tuning::set`].
    const KEYS: &[&str] = &[
        "probe_divisor",
        "tilt_max_deg",
        "lift_scale",
        "scroll_speed",
        "reveal_ease",
        "carousel_ease",
        "header_margin_rows",
        "wheel_step_rows",
        "nav_scrolled_threshold",
    ];

    /// Apply one numeric setting, clamped to its usable range.
    fn set(&mut self, key: &str, v: f64) {
        match key {
            "probe_divisor" => self.probe_divisor = v.clamp(1.5, 10.0),
            "tilt_max_deg" => self.tilt_max_deg = v.clamp(0.0, 45.0),
            "lift_scale" => self.lift_scale = v.clamp(1.0, 1.5),
            "scroll_speed" => self.scroll_speed = v.clamp(0.05, 0.95),
            "reveal_ease" => self.reveal_ease = v.clamp(0.05, 0.95),
            "carousel_ease" => self.carousel_ease = v.clamp(0.05, 0.95),
            "header_margin_rows" => self.header_margin_rows = (v.max(0.0) as usize).min(10),
            "wheel_step_rows" => self.wheel_step_rows = v.clamp(1.0, 20.0),
            "nav_scrolled_threshold" => self.nav_scrolled_threshold = v.clamp(0.0, 100.0),
            _ => {}
        }
    }
}

// ───────────────────────────────────────── errors ────────────

/// A malformed config line.  Loading is lenient: each error is reported and
/// the line skipped, so one typo never discards the rest of the file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("line {line}: unknown setting `{key}`")]
    UnknownKey { line: usize, key: String },
    #[error("line {line}: `{key}` expects a number, got `{value}`")]
    BadNumber {
        line: usize,
        key: String,
        value: String,
    },
    #[error("line {line}: unparsable key binding `{value}` for `{key}`")]
    BadBinding {
        line: usize,
        key: String,
        value: String,
    },
}

// ───────────────────────────────────────── config ────────────

/// Application configuration — keybindings plus presentation tuning.
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    pub tuning: Tuning,
}

impl AppConfig {
    /// Hard-coded default keybindings.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let alt = KeyModifiers::ALT;
        let mut m = HashMap::new();

        m.insert(ScrollUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(ScrollDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        // Both enums have PageUp/PageDown variants, so spell the keys out.
        m.insert(Action::PageUp, vec![KeyBind::new(KeyCode::PageUp, n)]);
        m.insert(Action::PageDown, vec![KeyBind::new(KeyCode::PageDown, n), KeyBind::new(Char(' '), n)]);
        m.insert(JumpTop, vec![KeyBind::new(Home, n), KeyBind::new(Char('g'), n)]);
        m.insert(JumpBottom, vec![KeyBind::new(End, n), KeyBind::new(Char('G'), KeyModifiers::SHIFT)]);
        m.insert(PrevSlide, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(NextSlide, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(OpenChapter, vec![KeyBind::new(Enter, n)]);
        m.insert(PrevSection, vec![KeyBind::new(Up, alt), KeyBind::new(Char('['), n)]);
        m.insert(NextSection, vec![KeyBind::new(Down, alt), KeyBind::new(Char(']'), n)]);
        m.insert(CycleAnalysis, vec![KeyBind::new(Tab, n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: scroll | {}/{}: slide | {}: chapter | {}: quit",
            self.short_binding(Action::ScrollUp),
            self.short_binding(Action::ScrollDown),
            self.short_binding(Action::PrevSlide),
            self.short_binding(Action::NextSlide),
            self.short_binding(Action::OpenChapter),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.  Malformed lines are
    /// reported to the log and skipped; the rest of the file still applies.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                let (config, errors) = Self::parse_config(&contents);
                for err in &errors {
                    tracing::warn!(config = %path.display(), %err, "config line ignored");
                }
                return config;
            }
        }
        Self {
            bindings: Self::default_bindings(),
            tuning: Tuning::default(),
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    /// Write the defaults on first run so users have a file to edit.  An
    /// existing file is left untouched.
    pub fn ensure_saved(&self) -> anyhow::Result<()> {
        if config_path().exists() {
            return Ok(());
        }
        self.save()
    }

    fn parse_config(s: &str) -> (Self, Vec<ConfigError>) {
        let mut bindings = Self::default_bindings();
        let mut tuning = Tuning::default();
        let mut errors = Vec::new();

        for (idx, raw) in s.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            if Tuning::KEYS.contains(&key) {
                match value.parse::<f64>() {
                    Ok(v) => tuning.set(key, v),
                    Err(_) => errors.push(ConfigError::BadNumber {
                        line: idx + 1,
                        key: key.to_string(),
                        value: value.to_string(),
                    }),
                }
                continue;
            }

            let Some(action) = Action::from_config_key(key) else {
                errors.push(ConfigError::UnknownKey {
                    line: idx + 1,
                    key: key.to_string(),
                });
                continue;
            };

            let mut parsed = Vec::new();
            for part in value.split(',') {
                let part = part.trim().trim_matches('"');
                match KeyBind::parse(part) {
                    Some(bind) => parsed.push(bind),
                    None => errors.push(ConfigError::BadBinding {
                        line: idx + 1,
                        key: key.to_string(),
                        value: part.to_string(),
                    }),
                }
            }
            if !parsed.is_empty() {
                bindings.insert(action, parsed);
            }
        }

        (Self { bindings, tuning }, errors)
    }

    fn serialise(&self) -> String {
        let t = self.tuning;
        let mut lines = vec![
            "# chronik configuration".to_string(),
            String::new(),
            "# Presentation tuning".to_string(),
            format!("probe_divisor = {}", t.probe_divisor),
            format!("tilt_max_deg = {}", t.tilt_max_deg),
            format!("lift_scale = {}", t.lift_scale),
            format!("scroll_speed = {}", t.scroll_speed),
            format!("reveal_ease = {}", t.reveal_ease),
            format!("carousel_ease = {}", t.carousel_ease),
            format!("header_margin_rows = {}", t.header_margin_rows),
            format!("wheel_step_rows = {}", t.wheel_step_rows),
            format!("nav_scrolled_threshold = {}", t.nav_scrolled_threshold),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab,".to_string(),
            "#   Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/chronik/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("chronik").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_serialise() {
        let mut config = AppConfig {
            bindings: AppConfig::default_bindings(),
            tuning: Tuning::default(),
        };
        config.tuning.tilt_max_deg = 12.0;
        config
            .bindings
            .insert(Action::Quit, vec![KeyBind::new(KeyCode::Char('x'), KeyModifiers::CONTROL)]);

        let (reparsed, errors) = AppConfig::parse_config(&config.serialise());
        assert!(errors.is_empty());
        assert_eq!(reparsed.tuning.tilt_max_deg, 12.0);
        assert_eq!(
            reparsed.bindings.get(&Action::Quit),
            Some(&vec![KeyBind::new(KeyCode::Char('x'), KeyModifiers::CONTROL)])
        );
    }

    #[test]
    fn default_page_keys_map_to_page_actions() {
        let config = AppConfig {
            bindings: AppConfig::default_bindings(),
            tuning: Tuning::default(),
        };
        let up = KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE);
        let down = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(config.match_key(up), Some(Action::PageUp));
        assert_eq!(config.match_key(down), Some(Action::PageDown));
    }

    #[test]
    fn out_of_range_tuning_is_clamped_without_errors() {
        let (parsed, errors) =
            AppConfig::parse_config("tilt_max_deg = 900\nscroll_speed = 0.0001\n");
        assert!(errors.is_empty());
        assert_eq!(parsed.tuning.tilt_max_deg, 45.0);
        assert_eq!(parsed.tuning.scroll_speed, 0.05);
    }

    #[test]
    fn unknown_keys_are_reported_but_do_not_poison_the_rest() {
        let (parsed, errors) = AppConfig::parse_config("no_such_key = 7\nquit = z\n");
        assert_eq!(
            parsed.bindings.get(&Action::Quit),
            Some(&vec![KeyBind::new(KeyCode::Char('z'), KeyModifiers::NONE)])
        );
        assert_eq!(
            errors,
            vec![ConfigError::UnknownKey {
                line: 1,
                key: "no_such_key".into()
            }]
        );
    }

    #[test]
    fn malformed_values_keep_defaults_and_surface_errors() {
        let (parsed, errors) =
            AppConfig::parse_config("tilt_max_deg = fast\nquit = NotAKey99\n");
        assert_eq!(parsed.tuning.tilt_max_deg, Tuning::default().tilt_max_deg);
        assert_eq!(
            parsed.bindings.get(&Action::Quit),
            AppConfig::default_bindings().get(&Action::Quit)
        );
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ConfigError::BadNumber { line: 1, .. }));
        assert!(matches!(errors[1], ConfigError::BadBinding { line: 2, .. }));
    }

    #[test]
    fn first_run_writes_the_default_file_and_never_overwrites() {
        let dir = std::env::temp_dir().join(format!("chronik-config-{}", std::process::id()));
        std::env::set_var("XDG_CONFIG_HOME", &dir);

        let config = AppConfig {
            bindings: AppConfig::default_bindings(),
            tuning: Tuning::default(),
        };
        config.ensure_saved().unwrap();
        let path = dir.join("chronik").join("config.toml");
        assert!(path.exists());

        // A user-edited file survives later runs untouched.
        std::fs::write(&path, "quit = z\n").unwrap();
        config.ensure_saved().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "quit = z\n");

        std::env::remove_var("XDG_CONFIG_HOME");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn binding_match_prefers_more_modifiers() {
        let mut config = AppConfig {
            bindings: AppConfig::default_bindings(),
            tuning: Tuning::default(),
        };
        config
            .bindings
            .insert(Action::JumpTop, vec![KeyBind::new(KeyCode::Char('q'), KeyModifiers::CONTROL)]);

        let plain = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let ctrl = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(config.match_key(plain), Some(Action::Quit));
        assert_eq!(config.match_key(ctrl), Some(Action::JumpTop));
    }
}
