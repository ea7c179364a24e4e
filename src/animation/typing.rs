use crate::config::TypewriterConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Head,
    Rest,
    Exploration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    /// Everything cleared, waiting to start the next cycle.
    Paused,
    Typing,
    /// Full text shown, waiting to clear.
    Dwelling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaretTone {
    Dark,
    Light,
}

/// What the typing container shows after a tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypingFrame {
    pub head: String,
    /// `None` until the rest segment has been created for this cycle.
    pub rest: Option<String>,
    pub line_break: bool,
    pub exploration: Option<String>,
    pub caret: CaretTone,
}

impl Default for CaretTone {
    fn default() -> Self {
        CaretTone::Dark
    }
}

impl CaretTone {
    pub fn color(self, config: &TypewriterConfig) -> &'static str {
        match self {
            CaretTone::Dark => config.dark_color,
            CaretTone::Light => config.light_color,
        }
    }
}

impl TypingFrame {
    pub fn text(&self) -> String {
        let mut text = self.head.clone();
        if let Some(rest) = &self.rest {
            text.push_str(rest);
        }
        if self.line_break {
            text.push('\n');
        }
        if let Some(exploration) = &self.exploration {
            text.push_str(exploration);
        }
        text
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.rest.is_none() && !self.line_break && self.exploration.is_none()
    }
}

/// One endlessly repeating typing cycle. Each `advance` moves one step and
/// returns how long to wait before the next.
#[derive(Clone, Debug, PartialEq)]
pub struct TypingSession {
    config: TypewriterConfig,
    stage: Stage,
    phase: Phase,
    cursor: usize,
}

impl TypingSession {
    pub fn new(config: TypewriterConfig) -> Self {
        Self {
            config,
            stage: Stage::Paused,
            phase: Phase::Head,
            cursor: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Delay before the very first tick of a fresh session.
    pub fn start_delay(&self) -> u32 {
        self.config.start_delay_ms
    }

    pub fn advance(&mut self) -> u32 {
        match self.stage {
            Stage::Paused => {
                self.stage = Stage::Typing;
                self.phase = Phase::Head;
                self.cursor = 0;
                self.type_char()
            }
            Stage::Typing => self.type_char(),
            Stage::Dwelling => {
                self.stage = Stage::Paused;
                self.phase = Phase::Head;
                self.cursor = 0;
                self.config.restart_pause_ms
            }
        }
    }

    fn type_char(&mut self) -> u32 {
        if self.cursor < self.target().chars().count() {
            self.cursor += 1;
            return self.config.char_delay_ms;
        }
        match self.phase {
            Phase::Head => {
                self.phase = Phase::Rest;
                self.cursor = 0;
                self.config.head_to_rest_ms
            }
            Phase::Rest => {
                self.phase = Phase::Exploration;
                self.cursor = 0;
                self.config.rest_to_exploration_ms
            }
            Phase::Exploration => {
                self.stage = Stage::Dwelling;
                self.config.dwell_ms
            }
        }
    }

    fn target(&self) -> &str {
        match self.phase {
            Phase::Head => &self.config.head,
            Phase::Rest => &self.config.rest,
            Phase::Exploration => &self.config.exploration,
        }
    }

    pub fn frame(&self) -> TypingFrame {
        if self.stage == Stage::Paused {
            return TypingFrame::default();
        }
        let config = &self.config;
        match self.phase {
            Phase::Head => TypingFrame {
                head: prefix(&config.head, self.cursor).to_string(),
                caret: CaretTone::Dark,
                ..TypingFrame::default()
            },
            Phase::Rest => TypingFrame {
                head: config.head.clone(),
                rest: Some(prefix(&config.rest, self.cursor).to_string()),
                caret: CaretTone::Light,
                ..TypingFrame::default()
            },
            Phase::Exploration => TypingFrame {
                head: config.head.clone(),
                rest: Some(format!("{} ", config.rest)),
                line_break: true,
                exploration: (self.cursor > 0 || self.stage == Stage::Dwelling)
                    .then(|| prefix(&config.exploration, self.cursor).to_string()),
                caret: CaretTone::Light,
            },
        }
    }
}

fn prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
