/// The stored code width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeWidth {
    /// One byte per code.
    One,

    /// Two bytes per code.
    Two,
}

/// Stored code width argument group.
#[derive(clap::Args, Debug)]
pub struct CodeWidthArgs {
    /// Stored code width in bytes (1 or 2; 2 matches `uint16` consumers).
    #[arg(long, default_value_t = 2)]
    code_width: u8,
}

impl CodeWidthArgs {
    /// Get the selected code width.
    pub fn width(&self) -> Result<CodeWidth, Box<dyn std::error::Error>> {
        match self.code_width {
            1 => Ok(CodeWidth::One),
            2 => Ok(CodeWidth::Two),
            w => Err(format!("unsupported code width: {w}").into()),
        }
    }
}
