//! Append-only buffer for the generated document.

/// Accumulates rendered blocks in order.
///
/// # Example
///
/// ```
/// use atomgen_codegen::OutputBuffer;
///
/// let mut out = OutputBuffer::new();
/// out.push_str("// header\n\n");
/// out.push_block("public extension Int {");
/// out.push_indented("\t", "public init() {}");
/// out.push_block("}");
///
/// assert_eq!(out.block_count(), 3);
/// assert_eq!(out.build(), "// header\n\npublic extension Int {\n\tpublic init() {}\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    buffer: String,
    blocks: usize,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rendered block followed by a newline.
    pub fn push_block(&mut self, block: &str) {
        self.push_indented("", block);
    }

    /// Add a rendered block behind a prefix, followed by a newline.
    pub fn push_indented(&mut self, prefix: &str, block: &str) {
        self.buffer.push_str(prefix);
        self.buffer.push_str(block);
        self.buffer.push('\n');
        self.blocks += 1;
    }

    /// Add raw text that is not counted as a block.
    pub fn push_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    /// Add a blank line.
    pub fn blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Number of blocks pushed so far.
    pub fn block_count(&self) -> usize {
        self.blocks
    }

    /// Consume the buffer and return the document.
    pub fn build(self) -> String {
        self.buffer
    }
}
