//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Integer spinner; the raw text is kept as typed and parsed on demand,
    /// coercing to 0 when it is not a valid integer
    Number {
        raw: String,
        min: i64,
        max: i64,
    },
    /// Single-select over a fixed set of options
    Select {
        options: &'static [&'static str],
        selected: usize,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new numeric spinner field with an initial value and bounds
    pub fn number(name: &str, label: &str, initial: i64, min: i64, max: i64) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Number {
                raw: initial.to_string(),
                min,
                max,
            },
        }
    }

    /// Create a new single-select field, starting on the first option
    pub fn select(name: &str, label: &str, options: &'static [&'static str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Select {
                options,
                selected: 0,
            },
        }
    }

    /// Get the text value (returns empty string for other field kinds)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the integer value of a numeric field. Raw text that does not
    /// parse as an integer coerces to 0. Text and select fields yield 0.
    pub fn as_int(&self) -> i64 {
        match &self.value {
            FieldValue::Number { raw, .. } => raw.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Get the selected option of a select field
    pub fn selected_option(&self) -> &'static str {
        match &self.value {
            FieldValue::Select { options, selected } => options[*selected],
            _ => "",
        }
    }

    /// Set the field from raw text. Numbers keep the raw text (parsed on
    /// snapshot); selects only accept a known option and ignore anything else.
    pub fn set_value(&mut self, raw: &str) {
        match &mut self.value {
            FieldValue::Text(s) => *s = raw.to_string(),
            FieldValue::Number { raw: r, .. } => *r = raw.to_string(),
            FieldValue::Select { options, selected } => {
                if let Some(idx) = options.iter().position(|o| o.eq_ignore_ascii_case(raw)) {
                    *selected = idx;
                }
            }
        }
    }

    /// Push a character to the field value. Numeric fields only accept
    /// digits (and a leading minus is rejected, the form has no negative
    /// inputs); select fields cycle forward on any character.
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Number { raw, .. } => {
                if c.is_ascii_digit() {
                    raw.push(c);
                }
            }
            FieldValue::Select { .. } => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Number { raw, .. } => {
                raw.pop();
            }
            FieldValue::Select { .. } => {}
        }
    }

    /// Step a spinner up or cycle a select to the next option
    pub fn step_up(&mut self) {
        match &mut self.value {
            FieldValue::Number { raw, min, max } => {
                let next = (raw.trim().parse::<i64>().unwrap_or(0) + 1).clamp(*min, *max);
                *raw = next.to_string();
            }
            FieldValue::Select { options, selected } => {
                *selected = (*selected + 1) % options.len();
            }
            FieldValue::Text(_) => {}
        }
    }

    /// Step a spinner down or cycle a select to the previous option
    pub fn step_down(&mut self) {
        match &mut self.value {
            FieldValue::Number { raw, min, max } => {
                let next = (raw.trim().parse::<i64>().unwrap_or(0) - 1).clamp(*min, *max);
                *raw = next.to_string();
            }
            FieldValue::Select { options, selected } => {
                *selected = if *selected == 0 {
                    options.len() - 1
                } else {
                    *selected - 1
                };
            }
            FieldValue::Text(_) => {}
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number { raw, .. } => raw.clone(),
            FieldValue::Select { options, selected } => options[*selected].to_string(),
        }
    }
}
