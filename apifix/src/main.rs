//! Command-line entry point for `apifix`.

use anyhow::Result;

fn main() -> Result<()> {
    // Delegate CLI args to the shared entry_point function
    let code = apifix::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
