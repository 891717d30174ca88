use std::collections::HashSet;

/// Append-only text sink for the generated C translation unit.
///
/// Three ordered regions: the header region holds `#include` lines (each
/// header name emitted at most once), the auxiliary region is reserved for
/// declarations outside the entry function, and the main region is the
/// function body under construction. The final output is the concatenation
/// header ++ auxiliary ++ main.
///
/// The main region supports in-place patching: statement emission plants
/// short marker strings for values that are only known later (a declaration
/// type, a format specifier, a print separator/terminator) and rewrites them
/// once the value is resolved.
#[derive(Debug, Default)]
pub struct Emitter {
    header: String,
    auxiliary: String,
    main: String,
    seen_headers: HashSet<String>,
}

impl Emitter {
    pub fn new() -> Self {
        Emitter {
            header: String::new(),
            auxiliary: String::new(),
            main: String::new(),
            seen_headers: HashSet::new(),
        }
    }

    /// Emits `#include <name.h>` into the header region, once per name.
    pub fn include(&mut self, name: &str) {
        if self.seen_headers.insert(name.to_string()) {
            self.header.push_str(&format!("#include <{}.h>\n\n", name));
        }
    }

    pub fn write_aux(&mut self, code: &str) {
        self.auxiliary.push_str(code);
    }

    pub fn write_main(&mut self, code: &str) {
        self.main.push_str(code);
    }

    /// Replaces the first occurrence of `marker` in the main region.
    pub fn patch_first(&mut self, marker: &str, replacement: &str) {
        self.main = self.main.replacen(marker, replacement, 1);
    }

    /// Replaces every occurrence of `marker` in the main region.
    pub fn patch_all(&mut self, marker: &str, replacement: &str) {
        self.main = self.main.replace(marker, replacement);
    }

    pub fn main_text(&self) -> &str {
        &self.main
    }

    pub fn finish(self) -> String {
        let mut output = self.header;
        output.push_str(&self.auxiliary);
        output.push_str(&self.main);
        output
    }
}
