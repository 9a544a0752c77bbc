/// Execute the full packaging pipeline for one function:
/// bundle, stage deployment files, emit declarations.
pub async fn package(function: &str) -> anyhow::Result<()> {
    super::bundle(function).await?;
    super::stage(function).await?;
    super::declarations(function).await?;

    println!();
    println!("Packaged {function}.");
    Ok(())
}
