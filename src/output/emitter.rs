// Fri Oct 16 2026 - Alex

use crate::output::template;

/// Renders the trampoline source for one module.
pub struct TrampolineEmitter {
    module_id: String,
    stem: String,
}

impl TrampolineEmitter {
    pub fn new(module_id: &str, stem: &str) -> Self {
        Self {
            module_id: module_id.to_string(),
            stem: stem.to_string(),
        }
    }

    /// `functions` is emitted in the given order, duplicates included.
    /// Data objects get no binding yet; they are only reported.
    pub fn render(&self, functions: &[String], objects: &[String]) -> String {
        let mut code = String::new();

        code.push_str(&template::include(template::PAYLOAD_HEADER));

        for sym in functions {
            code.push_str(&template::trampoline(sym));
        }

        code.push_str(&template::constructor_open(&self.stem));
        for sym in functions {
            code.push_str(&template::lookup_call(&self.module_id, sym));
        }
        code.push_str(&template::constructor_close());

        if !objects.is_empty() {
            log::debug!(
                "{} data objects have no trampoline binding: {}",
                objects.len(),
                objects.join(", ")
            );
        }

        code
    }
}
