use handlebars::{
    BlockContext, Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
    RenderErrorReason, Renderable,
};
use serde_json::Value;

/// Block helper that walks an ordered sequence in fixed-size chunks. Each
/// chunk's elements are joined with the configured separator and the joined
/// line becomes the block context (`{{this}}`); chunk outputs are
/// concatenated with nothing between them. Registered as `each5` and
/// `each10` for the text template's row layout.
pub struct ChunkHelper {
    size: usize,
    joiner: &'static str,
}

impl ChunkHelper {
    pub fn new(size: usize, joiner: &'static str) -> Self {
        Self { size, joiner }
    }
}

impl HelperDef for ChunkHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let param = h
            .param(0)
            .ok_or(RenderErrorReason::ParamNotFoundForIndex("chunk", 0))?;
        let items: Vec<String> = param
            .value()
            .as_array()
            .map(|values| values.iter().map(display).collect())
            .unwrap_or_default();
        let Some(template) = h.template() else {
            return Ok(());
        };
        for chunk in items.chunks(self.size) {
            let mut block = BlockContext::new();
            block.set_base_value(Value::String(chunk.join(self.joiner)));
            rc.push_block(block);
            template.render(r, ctx, rc, out)?;
            rc.pop_block();
        }
        Ok(())
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
