use color_eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    minesweeper_cli::run()?;
    Ok(())
}
