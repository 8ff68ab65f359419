//! Form field value objects

/// One selectable entry of a choice field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Value sent to the backend
    pub value: &'static str,
    /// Text shown to the user
    pub label: &'static str,
}

/// What kind of input a field takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Choice(&'static [ChoiceOption]),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    value: String,
}

impl FormField {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            value: String::new(),
        }
    }

    /// Create a new single-line text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Create a new multi-line text field
    pub fn multiline(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Multiline)
    }

    /// Create a new choice field; starts with nothing selected
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [ChoiceOption],
    ) -> Self {
        Self::new(name, label, FieldKind::Choice(options))
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Multiline)
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice(_))
    }

    /// Overwrite the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value (ignored by choice fields)
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            FieldKind::Text => {
                if c != '\n' {
                    self.value.push(c);
                }
            }
            FieldKind::Multiline => self.value.push(c),
            FieldKind::Choice(_) => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match self.kind {
            FieldKind::Text | FieldKind::Multiline => {
                self.value.pop();
            }
            // Choices are cleared, not edited
            FieldKind::Choice(_) => self.value.clear(),
        }
    }

    /// Step to the next (or previous) option of a choice field, wrapping
    pub fn cycle_choice(&mut self, forward: bool) {
        let FieldKind::Choice(options) = self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }

        let current = options.iter().position(|o| o.value == self.value);
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(0), false) => options.len() - 1,
            (Some(i), false) => i - 1,
        };
        self.value = options[next].value.to_string();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Label with a required marker
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Choice(options) => options
                .iter()
                .find(|o| o.value == self.value)
                .map(|o| o.label.to_string())
                .unwrap_or_default(),
            FieldKind::Text | FieldKind::Multiline => self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: &[ChoiceOption] = &[
        ChoiceOption {
            value: "s",
            label: "Small",
        },
        ChoiceOption {
            value: "l",
            label: "Large",
        },
    ];

    #[test]
    fn test_text_ignores_newline() {
        let mut field = FormField::text("name", "Name");
        field.push_char('J');
        field.push_char('\n');
        field.push_char('o');
        assert_eq!(field.value(), "Jo");
    }

    #[test]
    fn test_multiline_keeps_newline() {
        let mut field = FormField::multiline("message", "Message");
        field.push_char('a');
        field.push_char('\n');
        field.push_char('b');
        assert_eq!(field.value(), "a\nb");
        assert!(field.is_multiline());
    }

    #[test]
    fn test_pop_char() {
        let mut field = FormField::text("name", "Name");
        field.set_value("Jane");
        field.pop_char();
        assert_eq!(field.value(), "Jan");
    }

    #[test]
    fn test_choice_ignores_typing() {
        let mut field = FormField::choice("size", "Size", SIZES);
        field.push_char('x');
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_cycle_choice_forward_wraps() {
        let mut field = FormField::choice("size", "Size", SIZES);
        field.cycle_choice(true);
        assert_eq!(field.value(), "s");
        field.cycle_choice(true);
        assert_eq!(field.value(), "l");
        field.cycle_choice(true);
        assert_eq!(field.value(), "s");
    }

    #[test]
    fn test_cycle_choice_backward_from_empty_picks_last() {
        let mut field = FormField::choice("size", "Size", SIZES);
        field.cycle_choice(false);
        assert_eq!(field.value(), "l");
        field.cycle_choice(false);
        assert_eq!(field.value(), "s");
    }

    #[test]
    fn test_backspace_clears_choice() {
        let mut field = FormField::choice("size", "Size", SIZES);
        field.cycle_choice(true);
        field.pop_char();
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_display_value_uses_choice_label() {
        let mut field = FormField::choice("size", "Size", SIZES);
        assert_eq!(field.display_value(), "");
        field.set_value("l");
        assert_eq!(field.display_value(), "Large");
    }

    #[test]
    fn test_display_label_marks_required() {
        assert_eq!(FormField::text("name", "Name").required().display_label(), "Name *");
        assert_eq!(FormField::text("phone", "Phone").display_label(), "Phone");
    }
}
