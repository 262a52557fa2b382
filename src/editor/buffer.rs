use ropey::Rope;
use unicode_width::UnicodeWidthChar;

/// Caret position in the editor buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (byte offset within the line).
    pub col: usize,
    /// Remembered column for vertical movement (sticky column).
    col_memory: usize,
}

impl Cursor {
    /// Create a cursor at line 0, column 0.
    pub const fn new() -> Self {
        Self {
            line: 0,
            col: 0,
            col_memory: 0,
        }
    }

    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            col_memory: col,
        }
    }

    const fn set_col(&mut self, col: usize) {
        self.col = col;
        self.col_memory = col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The document text, backed by a rope, plus the caret.
///
/// Lines are split on `'\n'` only, which keeps line numbers in agreement
/// with [`locate`](super::locate). Every movement clamps, so the caret
/// offset is always within `0..=len_chars()`.
pub struct EditorBuffer {
    rope: Rope,
    cursor: Cursor,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string, caret at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Cursor::new(),
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Replace the whole document and put the caret at offset 0.
    ///
    /// The buffer is clean afterwards: the new text is what the file holds.
    pub fn replace_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = Cursor::new();
        self.dirty = false;
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Zero-based character offset of the caret in the full text.
    pub fn caret_offset(&self) -> usize {
        self.cursor_char_idx()
    }

    /// Number of characters in the document.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line without its `'\n'`.
    ///
    /// A `'\r'` stays part of the line: it is a character the caret can
    /// sit after, and it takes one column like any other.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let mut s = self.rope.line(line_idx).to_string();
        if s.ends_with('\n') {
            s.pop();
        }
        Some(s)
    }

    /// Length of a line in bytes (without trailing newline).
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.len())
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.split_line();
            return;
        }
        let char_idx = self.cursor_char_idx();
        let col = self.clamped_col();
        self.rope.insert_char(char_idx, ch);
        self.cursor.set_col(col + ch.len_utf8());
        self.dirty = true;
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let char_idx = self.cursor_char_idx();
        self.rope.insert(char_idx, s);

        let lines: Vec<&str> = s.split('\n').collect();
        if lines.len() > 1 {
            self.cursor.line += lines.len() - 1;
            self.cursor.set_col(lines.last().map_or(0, |l| l.len()));
        } else {
            self.cursor.set_col(self.clamped_col() + s.len());
        }
        self.dirty = true;
    }

    /// Split the current line at the cursor (Enter key).
    pub fn split_line(&mut self) {
        let char_idx = self.cursor_char_idx();
        self.rope.insert_char(char_idx, '\n');
        self.cursor.line += 1;
        self.cursor.set_col(0);
        self.dirty = true;
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor_char_idx() == 0 {
            return false;
        }

        let char_idx = self.cursor_char_idx();
        let line = self.line_at(self.cursor.line).unwrap_or_default();
        let col = clamp_to_boundary(&line, self.cursor.col);
        if col == 0 {
            // Join with previous line
            let prev_line_len = self.line_len(self.cursor.line - 1);
            self.rope.remove(char_idx - 1..char_idx);
            self.cursor.line -= 1;
            self.cursor.set_col(prev_line_len);
        } else {
            let prev_char_len = line[..col].chars().next_back().map_or(0, char::len_utf8);
            self.rope.remove(char_idx - 1..char_idx);
            self.cursor.set_col(col - prev_char_len);
        }
        self.dirty = true;
        true
    }

    /// Delete the character at the cursor (Delete key).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_forward(&mut self) -> bool {
        let char_idx = self.cursor_char_idx();
        if char_idx >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(char_idx..=char_idx);
        self.dirty = true;
        true
    }

    /// Move the cursor in the given direction.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_lines_up(1),
            Direction::Down => self.move_lines_down(1),
        }
    }

    /// Move up `n` lines keeping the sticky column (PageUp uses this).
    pub fn move_lines_up(&mut self, n: usize) {
        if n == 0 || self.cursor.line == 0 {
            return;
        }
        self.cursor.line = self.cursor.line.saturating_sub(n);
        self.restore_col_memory();
    }

    /// Move down `n` lines keeping the sticky column (PageDown uses this).
    pub fn move_lines_down(&mut self, n: usize) {
        let last = self.line_count().saturating_sub(1);
        if n == 0 || self.cursor.line >= last {
            return;
        }
        self.cursor.line = (self.cursor.line + n).min(last);
        self.restore_col_memory();
    }

    /// Move cursor to the beginning of the line (Home).
    pub const fn move_home(&mut self) {
        self.cursor.set_col(0);
    }

    /// Move cursor to the end of the line (End).
    pub fn move_end(&mut self) {
        let len = self.line_len(self.cursor.line);
        self.cursor.set_col(len);
    }

    /// Move cursor one word to the left (Ctrl+Left).
    pub fn move_word_left(&mut self) {
        if self.cursor.col == 0 {
            if self.cursor.line > 0 {
                self.cursor.line -= 1;
                self.cursor.set_col(self.line_len(self.cursor.line));
            }
            return;
        }

        let line = self.line_at(self.cursor.line).unwrap_or_default();
        let col = clamp_to_boundary(&line, self.cursor.col);
        let trimmed = line[..col].trim_end();
        let pos = trimmed
            .rfind(|c: char| !c.is_alphanumeric() && c != '_')
            .map_or(0, |i| i + trimmed[i..].chars().next().map_or(1, char::len_utf8));
        self.cursor.set_col(pos);
    }

    /// Move cursor one word to the right (Ctrl+Right).
    pub fn move_word_right(&mut self) {
        let line_len = self.line_len(self.cursor.line);
        if self.cursor.col >= line_len {
            if self.cursor.line + 1 < self.line_count() {
                self.cursor.line += 1;
                self.cursor.set_col(0);
            }
            return;
        }

        let line = self.line_at(self.cursor.line).unwrap_or_default();
        let col = clamp_to_boundary(&line, self.cursor.col);
        let after = &line[col..];
        let word_end = after
            .find(|c: char| !c.is_alphanumeric() && c != '_')
            .unwrap_or(after.len());
        let rest = &after[word_end..];
        let space_end = rest
            .find(|c: char| c.is_alphanumeric() || c == '_')
            .unwrap_or(rest.len());

        self.cursor.set_col(col + word_end + space_end);
    }

    /// Move cursor to a line and byte column, clamped to the document and
    /// snapped back to a character boundary.
    pub fn move_to(&mut self, line: usize, col: usize) {
        let max_line = self.line_count().saturating_sub(1);
        self.cursor.line = line.min(max_line);
        let text = self.line_at(self.cursor.line).unwrap_or_default();
        self.cursor.set_col(clamp_to_boundary(&text, col));
    }

    /// Move cursor to the character drawn at terminal column `screen_col`
    /// of `line` (mouse clicks land here).
    pub fn move_to_screen(&mut self, line: usize, screen_col: usize) {
        let max_line = self.line_count().saturating_sub(1);
        let line = line.min(max_line);
        let text = self.line_at(line).unwrap_or_default();
        let mut width = 0usize;
        let mut byte_col = text.len();
        for (idx, ch) in text.char_indices() {
            let w = display_width(ch);
            if width + w > screen_col {
                byte_col = idx;
                break;
            }
            width += w;
        }
        self.move_to(line, byte_col);
    }

    /// Move cursor to the start of the buffer (Ctrl+Home).
    pub const fn move_to_start(&mut self) {
        self.cursor.line = 0;
        self.cursor.set_col(0);
    }

    /// Move cursor to the end of the buffer (Ctrl+End).
    pub fn move_to_end(&mut self) {
        let last_line = self.line_count().saturating_sub(1);
        self.cursor.line = last_line;
        self.cursor.set_col(self.line_len(last_line));
    }

    // --- Private helpers ---

    /// Convert cursor position to a ropey char index.
    fn cursor_char_idx(&self) -> usize {
        let line_start = self.rope.line_to_char(self.cursor.line);
        let line = self.line_at(self.cursor.line).unwrap_or_default();
        let byte_col = clamp_to_boundary(&line, self.cursor.col);
        line_start + line[..byte_col].chars().count()
    }

    /// The caret column, clamped to the current line.
    fn clamped_col(&self) -> usize {
        let line = self.line_at(self.cursor.line).unwrap_or_default();
        clamp_to_boundary(&line, self.cursor.col)
    }

    fn restore_col_memory(&mut self) {
        let text = self.line_at(self.cursor.line).unwrap_or_default();
        self.cursor.col = clamp_to_boundary(&text, self.cursor.col_memory);
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            let line = self.line_at(self.cursor.line).unwrap_or_default();
            let col = clamp_to_boundary(&line, self.cursor.col);
            let prev_char_len = line[..col].chars().next_back().map_or(0, char::len_utf8);
            self.cursor.set_col(col - prev_char_len);
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.set_col(self.line_len(self.cursor.line));
        }
    }

    fn move_right(&mut self) {
        let line_len = self.line_len(self.cursor.line);
        if self.cursor.col < line_len {
            let line = self.line_at(self.cursor.line).unwrap_or_default();
            let next_char_len = line[self.cursor.col..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.cursor.set_col(self.cursor.col + next_char_len);
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.set_col(0);
        }
    }
}

/// Largest char boundary of `line` at or before byte `col`.
fn clamp_to_boundary(line: &str, col: usize) -> usize {
    let mut col = col.min(line.len());
    while !line.is_char_boundary(col) {
        col -= 1;
    }
    col
}

/// Width of `ch` on screen; control characters (tabs included) take one cell
/// because the renderer draws them as a blank.
pub fn display_width(ch: char) -> usize {
    if ch.is_control() {
        1
    } else {
        ch.width().unwrap_or(1)
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("cursor", &self.cursor)
            .field("dirty", &self.dirty)
            .finish()
    }
}
