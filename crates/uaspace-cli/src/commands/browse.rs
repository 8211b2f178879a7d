//! Browse command

use clap::Args;

use crate::output::format_references;
use crate::AppContext;
use uaspace_core::limits::validate_node_class_mask;
use uaspace_core::{
    AddressSpaceServices, BrowseDescription, BrowseDirection, NodeClass, NodeClassMask, NodeId,
};

#[derive(Args)]
pub struct BrowseArgs {
    /// Node to browse (e.g. RootFolder, i=84, ns=2;s=Pump)
    pub node: String,

    /// Direction: forward, inverse, both
    #[arg(short, long, default_value = "forward")]
    pub direction: String,

    /// Only references of this type
    #[arg(short = 'r', long)]
    pub reference_type: Option<String>,

    /// Also accept subtypes of the reference type
    #[arg(short = 's', long, requires = "reference_type")]
    pub include_subtypes: bool,

    /// Only targets of these node classes (repeatable)
    #[arg(short = 'c', long = "node-class")]
    pub node_classes: Vec<String>,

    /// Raw node class mask bits, combined with --node-class
    #[arg(long)]
    pub mask: Option<u32>,
}

impl BrowseArgs {
    /// Parse the arguments into a browse query
    pub fn to_query(&self) -> anyhow::Result<BrowseDescription> {
        let node: NodeId = self.node.trim().parse()?;
        let direction: BrowseDirection = self.direction.parse()?;

        let classes = self
            .node_classes
            .iter()
            .map(|c| c.parse::<NodeClass>())
            .collect::<Result<Vec<_>, _>>()?;
        let mask = NodeClassMask::new(
            NodeClassMask::from_classes(&classes).bits() | self.mask.unwrap_or(0),
        );
        validate_node_class_mask(mask)?;

        let mut query = BrowseDescription::new(node)
            .with_direction(direction)
            .with_node_class_mask(mask);

        if let Some(reference_type) = &self.reference_type {
            let reference_type: NodeId = reference_type.trim().parse()?;
            query = if self.include_subtypes {
                query.with_reference_type_and_subtypes(reference_type)
            } else {
                query.with_reference_type(reference_type)
            };
        }

        Ok(query)
    }
}

pub fn run(args: &BrowseArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let query = args.to_query()?;
    tracing::debug!("Browse query: {:?}", query);

    let references = ctx.space.browse(&query);
    println!("{}", format_references(&references, ctx.format)?);
    Ok(())
}
