//! Typing effect for the hero subtitle (off by default).

use crate::capabilities::{RenderSink, Scheduler};
use std::rc::Rc;

/// Reveals a text one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.typed >= self.chars.len()
    }

    /// Type the next character and return everything typed so far.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_finished() {
            return None;
        }
        self.typed += 1;
        Some(self.chars[..self.typed].iter().collect())
    }
}

/// Clear `sink`, then type `text` into it: the first character immediately,
/// each following one `speed_ms` later.
pub fn type_into<S: Scheduler + 'static>(
    scheduler: &Rc<S>,
    sink: Rc<dyn RenderSink>,
    text: &str,
    speed_ms: u32,
) {
    sink.set_text("");
    type_next(Rc::clone(scheduler), sink, Typewriter::new(text), speed_ms);
}

fn type_next<S: Scheduler + 'static>(
    scheduler: Rc<S>,
    sink: Rc<dyn RenderSink>,
    mut writer: Typewriter,
    speed_ms: u32,
) {
    let Some(frame) = writer.advance() else {
        return;
    };
    sink.set_text(&frame);
    let next_scheduler = Rc::clone(&scheduler);
    scheduler.after(
        speed_ms,
        Box::new(move || type_next(next_scheduler, sink, writer, speed_ms)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualScheduler, RecordingSink};

    #[test]
    fn test_advance_yields_prefixes() {
        let mut writer = Typewriter::new("Héllo");
        let frames: Vec<String> = std::iter::from_fn(|| writer.advance()).collect();
        assert_eq!(frames, vec!["H", "Hé", "Hél", "Héll", "Héllo"]);
        assert!(writer.is_finished());
    }

    #[test]
    fn test_type_into_paces_characters() {
        let scheduler = ManualScheduler::new();
        let sink = RecordingSink::new(&scheduler);

        type_into(&scheduler, sink.clone(), "Red Team", 50);
        assert_eq!(sink.texts(), vec!["", "R"]);

        scheduler.advance(49);
        assert_eq!(sink.last().as_deref(), Some("R"));

        scheduler.advance(1_000);
        assert_eq!(scheduler.now(), 1_049);
        assert_eq!(sink.last().as_deref(), Some("Red Team"));
        assert_eq!(sink.texts().len(), 1 + "Red Team".len());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_empty_text_only_clears() {
        let scheduler = ManualScheduler::new();
        let sink = RecordingSink::new(&scheduler);
        type_into(&scheduler, sink.clone(), "", 50);
        assert_eq!(sink.texts(), vec![""]);
        assert!(scheduler.is_idle());
    }
}
