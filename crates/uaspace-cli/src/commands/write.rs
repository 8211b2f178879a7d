//! Write command

use clap::Args;

use crate::output::format_statuses;
use crate::AppContext;
use uaspace_core::limits::validate_write_batch;
use uaspace_core::{AddressSpaceServices, AttributeId, NodeId, Variant, WriteValue};

#[derive(Args)]
pub struct WriteArgs {
    /// Node to write (e.g. RootFolder, i=84)
    pub node: String,

    /// Attribute to write, by name or number
    pub attribute: String,

    /// New value; booleans and unsigned integers are recognised, anything
    /// else is written as a string
    pub value: String,
}

/// Interpret command-line text as the narrowest matching variant
fn parse_variant(text: &str) -> Variant {
    if let Ok(b) = text.parse::<bool>() {
        Variant::Boolean(b)
    } else if let Ok(v) = text.parse::<u32>() {
        Variant::UInt32(v)
    } else if let Ok(v) = text.parse::<i32>() {
        Variant::Int32(v)
    } else {
        Variant::String(text.to_string())
    }
}

pub fn run(args: &WriteArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let node: NodeId = args.node.trim().parse()?;
    let attribute_id: AttributeId = args.attribute.trim().parse()?;
    let requests = vec![WriteValue::new(node, attribute_id, parse_variant(&args.value))];
    validate_write_batch(requests.len())?;

    let statuses = ctx.space.write(&requests);
    for status in statuses.iter().filter(|s| s.is_bad()) {
        tracing::warn!("Write rejected: {}", status);
    }
    println!("{}", format_statuses(&statuses, ctx.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variant() {
        assert_eq!(parse_variant("true"), Variant::Boolean(true));
        assert_eq!(parse_variant("42"), Variant::UInt32(42));
        assert_eq!(parse_variant("-7"), Variant::Int32(-7));
        assert_eq!(parse_variant("Pump 1"), Variant::String("Pump 1".to_string()));
    }
}
