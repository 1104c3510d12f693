use std::{
    fs,
    io::{Read, Write},
};

fn squash_standard_io(path: &Option<String>) -> Option<&str> {
    match path.as_deref() {
        Some("-") | None => None,
        Some(p) => Some(p),
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Read the full input contents.
    pub fn read_bytes(&self) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => {
                let mut bytes = Vec::new();
                std::io::stdin().lock().read_to_end(&mut bytes)?;
                bytes
            }
            Some(p) => fs::read(p)?,
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Write the full output contents.
    pub fn write_bytes(
        &self,
        bytes: &[u8],
    ) -> Result<(), Box<dyn std::error::Error>> {
        match squash_standard_io(&self.output) {
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(bytes)?;
                stdout.flush()?;
            }
            Some(p) => fs::write(p, bytes)?,
        }
        Ok(())
    }
}
