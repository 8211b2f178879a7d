//! Dump command: print the namespace snapshot as JSON

use crate::AppContext;

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let snapshot = ctx.space.snapshot();
    tracing::debug!(
        "Dumping {} references, {} attributes",
        snapshot.references.len(),
        snapshot.attributes.len()
    );
    println!("{}", snapshot.to_json()?);
    Ok(())
}
