/// Rotation index for the today's-exams highlight. Advancing and stepping
/// back wrap around; an empty slide list has no current slide.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slideshow {
    len: usize,
    index: usize,
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn back(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a specific slide; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Re-point at a list of a different length, keeping the position when
    /// it is still valid.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }
}
