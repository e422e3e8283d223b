use anyhow::Result;

fn main() -> Result<()> {
    cmdfreq::cli::run()
}
