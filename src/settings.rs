/// Longest value a field accepts. Keeps `minutes * 60` well inside `i64`.
const MAX_INPUT_LEN: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsField {
    WorkMinutes,
    BreakMinutes,
}

impl SettingsField {
    pub fn label(self) -> &'static str {
        match self {
            SettingsField::WorkMinutes => "Work (min)",
            SettingsField::BreakMinutes => "Break (min)",
        }
    }

    fn other(self) -> Self {
        match self {
            SettingsField::WorkMinutes => SettingsField::BreakMinutes,
            SettingsField::BreakMinutes => SettingsField::WorkMinutes,
        }
    }
}

/// Value change produced by an edit in the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingsEdit {
    pub field: SettingsField,
    pub minutes: i64,
}

/// The duration editor. Only presentation state lives here; the durations
/// themselves belong to the timer and are pushed in through each edit.
#[derive(Debug)]
pub struct SettingsPanel {
    pub visible: bool,
    pub focus: SettingsField,
    work_input: String,
    break_input: String,
}

impl SettingsPanel {
    pub fn new(work_minutes: i64, break_minutes: i64) -> Self {
        Self {
            visible: false,
            focus: SettingsField::WorkMinutes,
            work_input: work_minutes.to_string(),
            break_input: break_minutes.to_string(),
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn switch_focus(&mut self) {
        self.focus = self.focus.other();
    }

    pub fn input(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::WorkMinutes => &self.work_input,
            SettingsField::BreakMinutes => &self.break_input,
        }
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            SettingsField::WorkMinutes => &mut self.work_input,
            SettingsField::BreakMinutes => &mut self.break_input,
        }
    }

    /// Types a character into the focused field. Digits are always taken, a
    /// minus sign only at the front. Anything else is not an edit.
    pub fn type_char(&mut self, c: char) -> Option<SettingsEdit> {
        let input = self.focused_input_mut();
        let accepted = input.len() < MAX_INPUT_LEN
            && (c.is_ascii_digit() || (c == '-' && input.is_empty()));
        if !accepted {
            return None;
        }
        input.push(c);
        Some(self.current_edit())
    }

    pub fn backspace(&mut self) -> Option<SettingsEdit> {
        self.focused_input_mut().pop()?;
        Some(self.current_edit())
    }

    fn current_edit(&self) -> SettingsEdit {
        SettingsEdit {
            field: self.focus,
            minutes: parse_minutes(self.input(self.focus)),
        }
    }
}

/// Reads a field's text as minutes. Whatever does not parse, such as an
/// empty field or a lone `-`, counts as zero.
pub fn parse_minutes(input: &str) -> i64 {
    input.parse().unwrap_or(0)
}
