//! Timer-driven display state. The core only counts ticks; the runtime owns
//! the actual timers.

/// Character-by-character reveal of a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReveal {
    text: String,
    total: usize,
    shown: usize,
}

impl TextReveal {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self {
            text,
            total,
            shown: 0,
        }
    }

    /// Number of ticks needed to reveal everything.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Reveals one more character; a no-op once complete.
    pub fn advance(&mut self) {
        if self.shown < self.total {
            self.shown += 1;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.shown == self.total
    }

    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }
}

/// Count-up animation for one statistic such as `"95%"` or `"10K+"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAnimation {
    original: String,
    target: Option<u64>,
    percent: bool,
    display: String,
}

impl CounterAnimation {
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let target = leading_integer(&original);
        let percent = original.contains('%');
        Self {
            display: original.clone(),
            original,
            target,
            percent,
        }
    }

    /// Statistics without a leading number are left as they are.
    pub fn is_animated(&self) -> bool {
        self.target.is_some()
    }

    /// Shows the value for `step` out of `steps`; the final step restores
    /// the original text verbatim.
    pub fn show_step(&mut self, step: u32, steps: u32) {
        let Some(target) = self.target else {
            return;
        };
        if step >= steps {
            self.display = self.original.clone();
            return;
        }
        let value = target * u64::from(step) / u64::from(steps.max(1));
        self.display = if self.percent {
            format!("{value}%")
        } else {
            value.to_string()
        };
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

fn leading_integer(text: &str) -> Option<u64> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_handles_multibyte_text() {
        let mut reveal = TextReveal::new("Añil");
        assert_eq!(reveal.len(), 4);
        assert_eq!(reveal.visible(), "");
        reveal.advance();
        reveal.advance();
        assert_eq!(reveal.visible(), "Añ");
        assert!(!reveal.is_complete());
        reveal.advance();
        reveal.advance();
        reveal.advance();
        assert_eq!(reveal.visible(), "Añil");
        assert!(reveal.is_complete());
    }

    #[test]
    fn counter_keeps_percent_suffix_and_ends_on_original() {
        let mut counter = CounterAnimation::new("95%");
        counter.show_step(25, 50);
        assert_eq!(counter.display(), "47%");
        counter.show_step(50, 50);
        assert_eq!(counter.display(), "95%");
    }

    #[test]
    fn counter_ends_on_original_suffix_text() {
        let mut counter = CounterAnimation::new("10K+");
        counter.show_step(10, 50);
        assert_eq!(counter.display(), "2");
        counter.show_step(50, 50);
        assert_eq!(counter.display(), "10K+");
    }

    #[test]
    fn non_numeric_stat_is_static() {
        let mut counter = CounterAnimation::new("24/7");
        assert!(counter.is_animated());
        let mut label = CounterAnimation::new("IA");
        assert!(!label.is_animated());
        label.show_step(3, 50);
        assert_eq!(label.display(), "IA");
        counter.show_step(50, 50);
        assert_eq!(counter.display(), "24/7");
    }
}
