/// Tracks the first and last `B` record timestamps in file order.
///
/// Timestamps are kept as raw `HHMMSS` text; validation happens when the
/// window is resolved. Both buffers are filled once and reused, so recording
/// a fix does not allocate.
#[derive(Debug, Default, Clone)]
pub struct FixTimeTracker {
    first_seen: String,
    last_seen: String,
    fix_count: usize,
}

impl FixTimeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fix line (already known to start with `B`)
    pub fn record(&mut self, line: &str) {
        let timestamp = fix_timestamp(line);
        if self.fix_count == 0 {
            self.first_seen.push_str(timestamp);
        }
        self.last_seen.clear();
        self.last_seen.push_str(timestamp);
        self.fix_count += 1;
    }

    pub fn first_seen(&self) -> Option<&str> {
        (self.fix_count > 0).then_some(self.first_seen.as_str())
    }

    pub fn last_seen(&self) -> Option<&str> {
        (self.fix_count > 0).then_some(self.last_seen.as_str())
    }

    pub fn fix_count(&self) -> usize {
        self.fix_count
    }
}

/// The up-to-six characters following the record-type character
pub fn fix_timestamp(line: &str) -> &str {
    let mut chars = line.char_indices().skip(1);
    let Some((start, _)) = chars.next() else {
        return "";
    };
    let end = chars
        .nth(4)
        .map(|(idx, c)| idx + c.len_utf8())
        .unwrap_or(line.len());
    &line[start..end]
}
