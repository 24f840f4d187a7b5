use anyhow::Result;

fn main() -> Result<()> {
    feature_inspector::cli::run()
}
