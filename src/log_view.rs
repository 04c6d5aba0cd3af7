/// Bounded buffer behind the side log panel.
#[derive(Debug, Default)]
pub struct LogView {
    pub entries: Vec<String>,
    pub scroll_offset: u16,
}

const MAX_ENTRIES: usize = 200;

impl LogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        if self.entries.len() > MAX_ENTRIES {
            self.entries.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_view_caps_entries() {
        let mut view = LogView::new();
        for i in 0..(MAX_ENTRIES + 10) {
            view.add(format!("entry {}", i));
        }
        assert_eq!(view.entries.len(), MAX_ENTRIES);
        assert_eq!(view.entries[0], "entry 10");
    }
}
