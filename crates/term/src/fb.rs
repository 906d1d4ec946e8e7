//! Character framebuffer for terminal rendering.

/// 2D framebuffer of plain characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    cols: u16,
    rows: u16,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(cols: u16, rows: u16) -> Self {
        let len = (cols as usize) * (rows as usize);
        Self {
            cols,
            rows,
            cells: vec![' '; len],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible. Contents are
    /// unspecified afterwards; callers clear before drawing each frame.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if self.cols == cols && self.rows == rows {
            return;
        }
        self.cols = cols;
        self.rows = rows;
        let len = (cols as usize) * (rows as usize);
        self.cells.resize(len, ' ');
    }

    #[inline(always)]
    fn idx(&self, col: u16, row: u16) -> Option<usize> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some((row as usize) * (self.cols as usize) + (col as usize))
    }

    pub fn get(&self, col: u16, row: u16) -> Option<char> {
        self.idx(col, row).map(|i| self.cells[i])
    }

    /// Fill every cell with blank space.
    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Write one character. Out-of-bounds writes are ignored.
    pub fn put_char(&mut self, col: u16, row: u16, ch: char) {
        if let Some(i) = self.idx(col, row) {
            self.cells[i] = ch;
        }
    }

    /// Write a string left-to-right, silently truncated at the right edge.
    pub fn put_str(&mut self, col: u16, row: u16, s: &str) {
        let mut c = col;
        for ch in s.chars() {
            if c >= self.cols {
                break;
            }
            self.put_char(c, row, ch);
            c += 1;
        }
    }

    /// Serialize row-major into one text block.
    ///
    /// Rows are joined with `\n`; there is no trailing newline after the last
    /// row, so blitting the block never writes past the grid.
    pub fn to_block(&self) -> String {
        let cols = self.cols as usize;
        let rows = self.rows as usize;
        let mut out = String::with_capacity(rows * (cols + 1));
        for (row, chunk) in self.cells.chunks(cols).enumerate() {
            if row > 0 {
                out.push('\n');
            }
            out.extend(chunk.iter());
        }
        out
    }
}
