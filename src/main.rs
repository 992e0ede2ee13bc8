use anyhow::Result;

fn main() -> Result<()> {
    project_tidy::cli::run()
}
