//! Declaration rendering
//!
//! Consumes a populated registry and produces the final text blob. The root
//! declaration renders first; the rest follow in first-registration order.

use super::types::{Declaration, Declarations, Dialect};
use super::visitor::{ObjectRegistry, TypeInferrer};

/// Build the ordered declaration list from a finished registry
pub(crate) fn assemble(registry: ObjectRegistry, inferrer: &TypeInferrer) -> Declarations {
    let declarations = registry
        .into_entries()
        .map(|(key, entry)| Declaration {
            name: inferrer.emitted_name(&key),
            fields: entry.fields,
        })
        .collect();

    Declarations {
        declarations,
        dialect: inferrer.dialect(),
    }
}

impl Declarations {
    /// Render the complete output blob, including the Flow pragma when the
    /// dialect asks for one. Ends with a trailing newline.
    pub fn render(&self) -> String {
        let body = self
            .declarations
            .iter()
            .map(|decl| render_declaration(decl, self.dialect))
            .collect::<Vec<_>>()
            .join("\n");

        match self.dialect {
            Dialect::Flow => format!("// @flow\n\n{body}\n"),
            _ => format!("{body}\n"),
        }
    }
}

/// Render one declaration: two-space indent, comma-separated fields, no
/// trailing comma, no semicolons
fn render_declaration(decl: &Declaration, dialect: Dialect) -> String {
    let declarator = dialect.declarator();
    if decl.fields.is_empty() {
        return format!("{declarator} {} {{}}", decl.name);
    }

    let fields = decl
        .fields
        .iter()
        .map(|field| format!("  {}: {}", field.name, field.ty.render()))
        .collect::<Vec<_>>()
        .join(",\n");

    format!("{declarator} {} {{\n{fields}\n}}", decl.name)
}
