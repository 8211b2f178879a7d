//! Read command

use clap::Args;

use crate::output::format_values;
use crate::AppContext;
use uaspace_core::limits::validate_read_batch;
use uaspace_core::{AddressSpaceServices, AttributeId, NodeId, ReadValueId};

#[derive(Args)]
pub struct ReadArgs {
    /// Node to read (e.g. RootFolder, i=84)
    pub node: String,

    /// Attributes to read, by name or number (e.g. DisplayName 13)
    #[arg(required = true)]
    pub attributes: Vec<String>,
}

impl ReadArgs {
    pub fn to_requests(&self) -> anyhow::Result<Vec<ReadValueId>> {
        let node: NodeId = self.node.trim().parse()?;
        validate_read_batch(self.attributes.len())?;

        self.attributes
            .iter()
            .map(|a| -> anyhow::Result<ReadValueId> {
                let attribute_id: AttributeId = a.trim().parse()?;
                Ok(ReadValueId::new(node.clone(), attribute_id))
            })
            .collect()
    }
}

pub fn run(args: &ReadArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let requests = args.to_requests()?;
    let values = ctx.space.read(&requests);
    println!("{}", format_values(&requests, &values, ctx.format)?);
    Ok(())
}
