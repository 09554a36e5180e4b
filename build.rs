use anyhow::Result;
use vergen::EmitBuilder;

fn main() -> Result<()> {
    // Short commit SHA shown by `igc_meta --version`
    EmitBuilder::builder().git_sha(true).emit()?;
    Ok(())
}
