//! Circular buffer of recent log lines

use std::collections::VecDeque;

#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a line, evicting the oldest when full
    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_oldest() {
        let mut ring = RingBuffer::new(2);
        ring.push("a".to_string());
        ring.push("b".to_string());
        ring.push("c".to_string());
        assert_eq!(ring.lines(), vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut ring = RingBuffer::new(0);
        ring.push("a".to_string());
        assert!(ring.is_empty());
    }
}
