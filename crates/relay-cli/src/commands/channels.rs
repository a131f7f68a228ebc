//! List channel kinds and whether they are implemented.

use crate::Context;
use relay_core::ChannelKind;

/// Print one line per channel kind.
pub fn run(ctx: &Context) -> anyhow::Result<()> {
    for kind in ChannelKind::ALL {
        let status = if kind.is_implemented() {
            "implemented"
        } else {
            "not implemented"
        };
        ctx.sink.log(&format!("{:<10} {}", kind, status));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_core::{Config, MemorySink, SystemClock};
    use std::sync::Arc;

    #[test]
    fn test_lists_every_kind() {
        let sink = MemorySink::new();
        let ctx = Context::with_capabilities(
            Config::default(),
            Arc::new(SystemClock),
            Arc::new(sink.clone()),
        );

        run(&ctx).unwrap();

        assert_eq!(
            sink.lines(),
            vec![
                "whatsapp   implemented",
                "telegram   not implemented",
                "facebook   not implemented",
                "instagram  not implemented",
            ]
        );
    }
}
