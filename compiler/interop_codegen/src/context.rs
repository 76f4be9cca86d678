//! Code generation context and state.
//!
//! The `CodegenContext` holds the configuration, the encoded signatures of the
//! struct being compiled, and the output buffer with its indentation state.

use crate::addresses::AddressTable;
use crate::CodegenConfig;

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Code generation context for one artifact.
pub struct CodegenContext<'a> {
    /// Batch configuration.
    pub config: &'a CodegenConfig,
    /// Encoded signatures of the struct being compiled.
    pub addresses: AddressTable,
    /// Current indentation level.
    indent: usize,
    /// Generated code output.
    output: String,
    /// Nothing has been written since the innermost scope was opened.
    at_scope_start: bool,
}

impl<'a> CodegenContext<'a> {
    /// Create a new codegen context.
    pub fn new(config: &'a CodegenConfig) -> Self {
        Self {
            config,
            addresses: AddressTable::default(),
            indent: 0,
            output: String::with_capacity(4096),
            at_scope_start: true,
        }
    }

    /// Attach the encoded signatures of the struct being compiled.
    #[must_use]
    pub fn with_addresses(mut self, addresses: AddressTable) -> Self {
        self.addresses = addresses;
        self
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent * INDENT_WIDTH {
            self.output.push(' ');
        }
    }

    /// Write a line to output (with indentation and newline).
    pub fn writeln(&mut self, s: &str) {
        self.write_indent();
        self.output.push_str(s);
        self.output.push('\n');
        self.at_scope_start = false;
    }

    /// Write a newline.
    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Write `header` and an opening brace, then indent.
    pub fn open_scope(&mut self, header: &str) {
        self.writeln(header);
        self.writeln("{");
        self.indent();
        self.at_scope_start = true;
    }

    /// Dedent and write the closing brace.
    pub fn close_scope(&mut self) {
        self.dedent();
        self.writeln("}");
    }

    /// Separate a new item from the previous one with a blank line, unless it
    /// is the first item of its scope.
    pub fn item_separator(&mut self) {
        if !self.at_scope_start {
            self.newline();
        }
    }

    /// Current indentation level.
    pub fn depth(&self) -> usize {
        self.indent
    }

    /// Take the generated output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}
