pub const INITIAL_WINDOW: usize = 5;
pub const WINDOW_STEP: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window(usize);

impl Default for Window {
    fn default() -> Self {
        Self(INITIAL_WINDOW)
    }
}

impl Window {
    pub fn new(size: usize) -> Self {
        Self(size)
    }

    pub fn size(self) -> usize {
        self.0
    }

    pub fn show_more(&mut self) {
        self.0 = self.0.saturating_add(WINDOW_STEP);
    }

    pub fn has_more(self, total: usize) -> bool {
        self.0 < total
    }
}
